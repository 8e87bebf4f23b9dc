//! Keyword rule tables for the three-tier categorizer.
//!
//! Three ordered tables map taxonomy slugs to keyword phrase sets: leaf
//! (most specific), parent (broader topical groupings) and root (coarsest
//! top-level groupings). Table-definition order is significant — it encodes
//! specificity priority, so a leaf keyword like "typhoon" out-ranks a root
//! keyword like "world" even when both appear in the same text. Matching is
//! lower-cased substring containment; keywords here must be lower case.
//!
//! The tables are data, not logic: extend or audit them without touching
//! the matching code in the parent module.

/// One taxonomy slug and the keyword phrases that select it.
pub struct CategoryRule {
    /// Taxonomy slug assigned on match.
    pub slug: &'static str,
    /// Lower-cased keyword phrases, matched as substrings.
    pub keywords: &'static [&'static str],
}

/// Fallback root slug when no rule in any table matches.
pub const DEFAULT_CATEGORY: &str = "world-current-affairs";

/// Leaf categories — the most specific tier, checked first.
pub static LEAF_RULES: &[CategoryRule] = &[
    // Disasters and weather events
    CategoryRule {
        slug: "typhoon-storm-alerts",
        keywords: &["typhoon", "tropical storm", "tropical depression", "signal no.", "storm surge", "pagasa warning", "habagat"],
    },
    CategoryRule {
        slug: "earthquake-monitoring",
        keywords: &["earthquake", "magnitude quake", "phivolcs", "aftershock", "intensity iv", "tremor"],
    },
    CategoryRule {
        slug: "volcano-watch",
        keywords: &["volcanic eruption", "alert level 3", "taal volcano", "mayon", "kanlaon", "ashfall", "lava flow"],
    },
    CategoryRule {
        slug: "flooding-landslides",
        keywords: &["flash flood", "flood warning", "landslide", "rising floodwater", "evacuation center", "swollen river"],
    },
    // Public health
    CategoryRule {
        slug: "disease-outbreaks",
        keywords: &["dengue outbreak", "measles outbreak", "covid-19", "covid surge", "mpox", "leptospirosis", "pertussis"],
    },
    CategoryRule {
        slug: "public-health-programs",
        keywords: &["vaccination drive", "immunization program", "philhealth", "health insurance coverage", "doh advisory"],
    },
    // National politics
    CategoryRule {
        slug: "senate-proceedings",
        keywords: &["senate hearing", "senate probe", "senate inquiry", "senate bill", "senators voted"],
    },
    CategoryRule {
        slug: "house-legislation",
        keywords: &["house bill", "house of representatives", "congressional hearing", "lower chamber", "committee on appropriations"],
    },
    CategoryRule {
        slug: "malacanang-briefings",
        keywords: &["malacanang", "palace briefing", "executive order", "presidential spokesperson", "office of the president"],
    },
    CategoryRule {
        slug: "supreme-court-rulings",
        keywords: &["supreme court ruled", "supreme court decision", "high court ruling", "certiorari", "temporary restraining order"],
    },
    CategoryRule {
        slug: "election-watch",
        keywords: &["comelec", "election period", "voter registration", "partylist", "canvassing", "precinct count"],
    },
    CategoryRule {
        slug: "impeachment-proceedings",
        keywords: &["impeachment complaint", "impeachment trial", "articles of impeachment"],
    },
    // Justice and security
    CategoryRule {
        slug: "drug-war-operations",
        keywords: &["drug war", "buy-bust", "shabu seized", "drug den", "pdea operation"],
    },
    CategoryRule {
        slug: "anti-corruption-cases",
        keywords: &["ombudsman", "graft charges", "plunder case", "sandiganbayan", "malversation"],
    },
    CategoryRule {
        slug: "west-philippine-sea",
        keywords: &["west philippine sea", "south china sea", "ayungin shoal", "scarborough", "chinese coast guard", "water cannon"],
    },
    CategoryRule {
        slug: "insurgency-peace-talks",
        keywords: &["npa rebels", "insurgency", "peace talks", "red-tagging", "milf", "bangsamoro transition"],
    },
    // Economy specifics
    CategoryRule {
        slug: "inflation-prices",
        keywords: &["inflation rate", "consumer prices", "price ceiling", "rice prices", "oil price hike", "fare hike"],
    },
    CategoryRule {
        slug: "central-bank-policy",
        keywords: &["bangko sentral", "bsp rate", "policy rate", "interest rate hike", "monetary board"],
    },
    CategoryRule {
        slug: "stock-market-report",
        keywords: &["psei", "philippine stock exchange", "stocks closed", "bourse", "blue chips"],
    },
    CategoryRule {
        slug: "peso-exchange-rate",
        keywords: &["peso depreciated", "peso appreciated", "exchange rate", "dollar-peso"],
    },
    CategoryRule {
        slug: "ofw-remittances",
        keywords: &["ofw", "overseas filipino workers", "remittances", "migrant workers office", "owwa"],
    },
    CategoryRule {
        slug: "pogo-crackdown",
        keywords: &["pogo", "offshore gaming", "pogo raid", "pogo ban"],
    },
    // Infrastructure and transport
    CategoryRule {
        slug: "rail-transit-updates",
        keywords: &["mrt-3", "lrt-1", "lrt-2", "metro rail", "train glitch", "subway project"],
    },
    CategoryRule {
        slug: "airport-operations",
        keywords: &["naia", "ninoy aquino international airport", "flight cancellations", "airport terminal", "runway closure"],
    },
    CategoryRule {
        slug: "jeepney-modernization",
        keywords: &["jeepney modernization", "jeepney phaseout", "transport strike", "puv modernization"],
    },
    CategoryRule {
        slug: "build-infrastructure",
        keywords: &["build better more", "flagship infrastructure", "expressway project", "bridge construction", "dpwh project"],
    },
    // Sports specifics
    CategoryRule {
        slug: "pba-basketball",
        keywords: &["pba", "philippine cup", "governors' cup", "commissioner's cup", "ginebra", "san miguel beermen"],
    },
    CategoryRule {
        slug: "gilas-pilipinas",
        keywords: &["gilas", "fiba", "world cup qualifiers", "naturalized player"],
    },
    CategoryRule {
        slug: "collegiate-hoops",
        keywords: &["uaap", "ncaa season", "final four", "ateneo blue eagles", "up fighting maroons", "la salle green archers"],
    },
    CategoryRule {
        slug: "boxing-ring-report",
        keywords: &["boxing title", "wbc", "wbo", "knockout win", "pacquiao", "title defense"],
    },
    CategoryRule {
        slug: "volleyball-leagues",
        keywords: &["pvl", "premier volleyball league", "creamline", "spikers' turf"],
    },
    CategoryRule {
        slug: "football-azkals",
        keywords: &["azkals", "pfl", "afc cup", "fifa ranking"],
    },
    CategoryRule {
        slug: "international-games",
        keywords: &["sea games", "asian games", "olympics", "gold medal haul", "paris 2024"],
    },
    // Entertainment specifics
    CategoryRule {
        slug: "teleserye-watch",
        keywords: &["teleserye", "kapamilya series", "kapuso drama", "primetime series finale"],
    },
    CategoryRule {
        slug: "opm-music-scene",
        keywords: &["opm", "original pilipino music", "p-pop", "sb19", "bini"],
    },
    CategoryRule {
        slug: "pageant-fever",
        keywords: &["miss universe", "miss philippines", "binibining pilipinas", "pageant crown"],
    },
    CategoryRule {
        slug: "film-festival-circuit",
        keywords: &["mmff", "metro manila film festival", "cinemalaya", "famas"],
    },
    CategoryRule {
        slug: "celebrity-headlines",
        keywords: &["showbiz couple", "celebrity breakup", "kathryn bernardo", "vice ganda", "showbiz comeback"],
    },
    // Science and technology specifics
    CategoryRule {
        slug: "telco-connectivity",
        keywords: &["5g rollout", "fiber broadband", "starlink", "signal coverage", "telco towers"],
    },
    CategoryRule {
        slug: "cybersecurity-alerts",
        keywords: &["data breach", "phishing", "ransomware", "hacked website", "sim registration"],
    },
    CategoryRule {
        slug: "space-weather-science",
        keywords: &["pagasa forecast", "la nina", "el nino", "amihan", "satellite launch"],
    },
    CategoryRule {
        slug: "ai-emerging-tech",
        keywords: &["artificial intelligence", "chatbot", "machine learning", "generative ai"],
    },
    // Education and labor
    CategoryRule {
        slug: "school-openings",
        keywords: &["class suspension", "deped", "school year opening", "enrollment period", "brigada eskwela"],
    },
    CategoryRule {
        slug: "college-admissions",
        keywords: &["upcat", "college entrance", "ched", "scholarship program", "tuition hike"],
    },
    CategoryRule {
        slug: "wage-labor-disputes",
        keywords: &["wage hike", "minimum wage", "labor strike", "union dispute", "endo", "dole order"],
    },
];

/// Parent categories — broader topical groupings, checked when no leaf
/// rule matches.
pub static PARENT_RULES: &[CategoryRule] = &[
    CategoryRule {
        slug: "disaster-weather",
        keywords: &["state of calamity", "evacuation", "severe weather", "disaster response", "relief goods", "rainfall warning"],
    },
    CategoryRule {
        slug: "politics-government",
        keywords: &["senate", "congress", "legislation", "cabinet secretary", "local government", "government agency", "national budget"],
    },
    CategoryRule {
        slug: "crime-justice",
        keywords: &["arrested", "murder case", "court convicted", "manhunt", "criminal charges", "police operation"],
    },
    CategoryRule {
        slug: "defense-security",
        keywords: &["armed forces", "military drills", "coast guard", "territorial defense", "joint patrols"],
    },
    CategoryRule {
        slug: "foreign-relations",
        keywords: &["bilateral talks", "state visit", "ambassador", "diplomatic protest", "treaty signing"],
    },
    CategoryRule {
        slug: "health-wellness",
        keywords: &["hospital", "health department", "medical mission", "mental health", "nutrition program"],
    },
    CategoryRule {
        slug: "education",
        keywords: &["students", "teachers", "classroom", "curriculum", "tuition"],
    },
    CategoryRule {
        slug: "labor-employment",
        keywords: &["workers", "employment rate", "job fair", "layoffs", "labor department"],
    },
    CategoryRule {
        slug: "transportation-infrastructure",
        keywords: &["commuters", "traffic scheme", "road closure", "toll rates", "public transport"],
    },
    CategoryRule {
        slug: "energy-utilities",
        keywords: &["power outage", "electricity rates", "meralco", "rotational brownout", "water service"],
    },
    CategoryRule {
        slug: "agriculture-food",
        keywords: &["farmers", "rice harvest", "crop damage", "fisherfolk", "agriculture department"],
    },
    CategoryRule {
        slug: "banking-finance",
        keywords: &["bank lending", "loan growth", "fintech", "digital bank", "credit rating"],
    },
    CategoryRule {
        slug: "corporate-business",
        keywords: &["quarterly earnings", "net income rose", "ipo", "merger", "conglomerate"],
    },
    CategoryRule {
        slug: "property-real-estate",
        keywords: &["condominium", "real estate", "property developer", "housing backlog"],
    },
    CategoryRule {
        slug: "tourism-travel",
        keywords: &["tourist arrivals", "travel advisory", "boracay", "palawan", "tourism department"],
    },
    CategoryRule {
        slug: "environment-climate",
        keywords: &["climate change", "reforestation", "plastic waste", "biodiversity", "carbon emissions"],
    },
    CategoryRule {
        slug: "basketball",
        keywords: &["basketball", "hardcourt", "triple-double", "buzzer-beater"],
    },
    CategoryRule {
        slug: "combat-sports",
        keywords: &["boxing", "mixed martial arts", "one championship", "undercard"],
    },
    CategoryRule {
        slug: "movies-television",
        keywords: &["box office", "movie premiere", "streaming series", "netflix", "film review"],
    },
    CategoryRule {
        slug: "music-concerts",
        keywords: &["concert", "album launch", "chart-topping", "music festival"],
    },
    CategoryRule {
        slug: "gaming-esports",
        keywords: &["esports", "mobile legends", "valorant", "game developer"],
    },
    CategoryRule {
        slug: "gadgets-apps",
        keywords: &["smartphone launch", "app update", "gadget review", "wearable"],
    },
];

/// Root categories — the coarsest top-level groupings, checked last.
pub static ROOT_RULES: &[CategoryRule] = &[
    CategoryRule {
        slug: "nation",
        keywords: &["philippines", "filipino", "manila", "luzon", "visayas", "mindanao", "barangay", "palace"],
    },
    CategoryRule {
        slug: "business-economy",
        keywords: &["business", "economy", "economic", "market", "trade", "investors", "gdp"],
    },
    CategoryRule {
        slug: "sports",
        keywords: &["sports", "athlete", "tournament", "championship", "coach", "varsity"],
    },
    CategoryRule {
        slug: "entertainment-lifestyle",
        keywords: &["entertainment", "celebrity", "showbiz", "lifestyle", "fashion", "viral"],
    },
    CategoryRule {
        slug: "science-technology",
        keywords: &["technology", "science", "research", "innovation", "internet"],
    },
    CategoryRule {
        slug: "opinion-analysis",
        keywords: &["opinion", "editorial", "commentary", "column"],
    },
    CategoryRule {
        slug: "world-current-affairs",
        keywords: &["world", "international", "global", "foreign", "united nations", "overseas"],
    },
];
