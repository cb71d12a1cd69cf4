//! Passenger name generation

use rand::Rng;

/// Generate a manifest-style name: initial and family name (`"K. Tanaka"`)
pub fn generate_name(rng: &mut impl Rng) -> String {
    let initial = INITIALS[rng.gen_range(0..INITIALS.len())];
    let family = FAMILY_NAMES[rng.gen_range(0..FAMILY_NAMES.len())];
    format!("{}. {}", initial, family)
}

static INITIALS: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'R', 'S',
    'T', 'V', 'W', 'Y',
];

// Sample list - a real deployment reads the passenger manifest instead
static FAMILY_NAMES: &[&str] = &[
    "Chen",
    "Patel",
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Davis",
    "Miller",
    "Wilson",
    "Moore",
    "Taylor",
    "Anderson",
    "Thomas",
    "Garcia",
    "Martinez",
    "Robinson",
    "Clark",
    "Lewis",
    "Lee",
    "Walker",
    "Tanaka",
    "Okafor",
    "Kowalski",
    "Nguyen",
    "Haddad",
    "Silva",
    "Novak",
    "Larsen",
    "Rossi",
    "Kim",
];
