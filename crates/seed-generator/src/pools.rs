//! Fixed value pools for name and free-text sampling.

/// First names, sampled uniformly and independently of last names.
pub const FIRST_NAMES: [&str; 20] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen",
];

/// Last names, sampled uniformly and independently of first names.
pub const LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

/// Street names for templated addresses.
pub const STREETS: [&str; 8] = [
    "Oak Street",
    "Maple Avenue",
    "Cedar Lane",
    "Elm Drive",
    "Birch Road",
    "Willow Way",
    "Pine Court",
    "Aspen Boulevard",
];

/// Cities for templated addresses.
pub const CITIES: [&str; 6] = [
    "Springfield",
    "Riverton",
    "Lakewood",
    "Fairview",
    "Georgetown",
    "Clinton",
];

/// Medical-history summaries for patient records.
pub const MEDICAL_HISTORIES: [&str; 6] = [
    "No significant prior history.",
    "Hypertension managed with medication.",
    "Type 2 diabetes, diet controlled.",
    "Seasonal allergies, no other conditions.",
    "Prior appendectomy, otherwise healthy.",
    "Asthma, uses inhaler as needed.",
];
