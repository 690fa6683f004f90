//! Fake-data tables and pickers for name-aware string generation.
//!
//! When a string field has no explicit binding, the walker asks
//! [`for_field`] whether the field's name matches a known shape — a field
//! called `surname` draws from [`SURNAMES`], `email` gets a well-formed
//! address, `info` gets a short sentence. Unrecognized names fall back to a
//! plain bounded random string.

use rand::Rng;

/// Common given names
pub static FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
];

/// Common family names
pub static SURNAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White",
];

/// Country names
pub static COUNTRIES: &[&str] = &[
    "Poland", "Germany", "France", "Spain", "Italy", "Portugal", "Netherlands", "Belgium",
    "Sweden", "Norway", "Denmark", "Finland", "Austria", "Switzerland", "Ireland", "Greece",
    "Canada", "Australia", "Japan", "Brazil",
];

/// City names
pub static CITIES: &[&str] = &[
    "Warsaw", "Berlin", "Paris", "Madrid", "Rome", "Lisbon", "Amsterdam", "Brussels", "Stockholm",
    "Oslo", "Copenhagen", "Helsinki", "Vienna", "Zurich", "Dublin", "Athens",
];

/// Company names
pub static COMPANIES: &[&str] = &[
    "Acme Corp", "Globex", "Initech", "Umbrella Group", "Stark Industries", "Wayne Enterprises",
    "Wonka Industries", "Tyrell Corp", "Cyberdyne Systems", "Soylent Corp", "Massive Dynamic",
    "Hooli", "Pied Piper", "Aperture Science", "Black Mesa", "Oscorp",
];

/// Street names, without numbers
pub static STREETS: &[&str] = &[
    "Maple Street", "Oak Avenue", "Cedar Lane", "Elm Street", "Pine Road", "Birch Boulevard",
    "Willow Way", "Chestnut Drive", "Juniper Court", "Magnolia Place", "Sycamore Terrace",
    "Hawthorn Close",
];

/// Email domains
pub static DOMAINS: &[&str] = &[
    "example.com",
    "mail.test",
    "inbox.dev",
    "post.example.org",
    "box.invalid",
    "mailbox.example.net",
    "courier.test",
    "letters.example",
];

/// Filler words for sentences
pub static WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "labore", "dolore", "magna", "aliqua", "enim", "minim",
    "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi", "aliquip", "ex",
    "commodo", "consequat",
];

fn pick(table: &'static [&'static str], rng: &mut dyn rand::RngCore) -> &'static str {
    table[rng.gen_range(0..table.len())]
}

/// A random given name
pub fn first_name(rng: &mut dyn rand::RngCore) -> String {
    pick(FIRST_NAMES, rng).to_string()
}

/// A random family name
pub fn surname(rng: &mut dyn rand::RngCore) -> String {
    pick(SURNAMES, rng).to_string()
}

/// A random "Given Family" name pair
pub fn full_name(rng: &mut dyn rand::RngCore) -> String {
    format!("{} {}", pick(FIRST_NAMES, rng), pick(SURNAMES, rng))
}

/// A random well-formed email address
pub fn email(rng: &mut dyn rand::RngCore) -> String {
    format!(
        "{}.{}@{}",
        pick(FIRST_NAMES, rng).to_lowercase(),
        pick(SURNAMES, rng).to_lowercase(),
        pick(DOMAINS, rng)
    )
}

/// A random country name
pub fn country(rng: &mut dyn rand::RngCore) -> String {
    pick(COUNTRIES, rng).to_string()
}

/// A random city name
pub fn city(rng: &mut dyn rand::RngCore) -> String {
    pick(CITIES, rng).to_string()
}

/// A random company name
pub fn company(rng: &mut dyn rand::RngCore) -> String {
    pick(COMPANIES, rng).to_string()
}

/// A random numbered street address
pub fn street_address(rng: &mut dyn rand::RngCore) -> String {
    format!("{} {}", rng.gen_range(1..=200), pick(STREETS, rng))
}

/// A random phone number in a simple dashed format
pub fn phone_number(rng: &mut dyn rand::RngCore) -> String {
    format!(
        "{:03}-{:03}-{:04}",
        rng.gen_range(100..1000),
        rng.gen_range(0..1000),
        rng.gen_range(0..10_000)
    )
}

/// A random filler word
pub fn word(rng: &mut dyn rand::RngCore) -> String {
    pick(WORDS, rng).to_string()
}

/// A short capitalized sentence of filler words
pub fn sentence(rng: &mut dyn rand::RngCore) -> String {
    let count = rng.gen_range(4..=9);
    let mut out = String::new();
    for i in 0..count {
        let w = pick(WORDS, rng);
        if i == 0 {
            let mut chars = w.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(w);
        }
    }
    out.push('.');
    out
}

/// Name-aware dispatch for unbound string fields
///
/// Returns `None` for unrecognized names, in which case the caller falls
/// back to a plain bounded random string.
pub fn for_field(name: &str, rng: &mut dyn rand::RngCore) -> Option<String> {
    match name {
        "name" | "first_name" | "firstname" | "given_name" => Some(first_name(rng)),
        "surname" | "last_name" | "lastname" | "family_name" => Some(surname(rng)),
        "full_name" | "fullname" => Some(full_name(rng)),
        "email" | "e_mail" | "mail" => Some(email(rng)),
        "country" => Some(country(rng)),
        "city" | "town" => Some(city(rng)),
        "company" | "employer" | "organization" => Some(company(rng)),
        "address" | "street" | "street_address" => Some(street_address(rng)),
        "phone" | "phone_number" | "telephone" => Some(phone_number(rng)),
        "info" | "description" | "text" | "comment" | "notes" | "bio" => Some(sentence(rng)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_pickers_draw_from_tables() {
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            assert!(FIRST_NAMES.contains(&first_name(&mut rng).as_str()));
            assert!(SURNAMES.contains(&surname(&mut rng).as_str()));
            assert!(COUNTRIES.contains(&country(&mut rng).as_str()));
            assert!(COMPANIES.contains(&company(&mut rng).as_str()));
        }
    }

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..50 {
            let address = email(&mut rng);
            assert!(address.contains('@'));
            assert!(address.contains('.'));
            assert_eq!(address, address.to_lowercase());
        }
    }

    #[test]
    fn test_street_address_is_numbered() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            let address = street_address(&mut rng);
            let number: String = address.chars().take_while(|c| c.is_ascii_digit()).collect();
            assert!(!number.is_empty());
        }
    }

    #[test]
    fn test_sentence_is_capitalized_and_terminated() {
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..20 {
            let text = sentence(&mut rng);
            assert!(text.chars().next().unwrap().is_ascii_uppercase());
            assert!(text.ends_with('.'));
            assert!(text.split_whitespace().count() >= 4);
        }
    }

    #[test]
    fn test_for_field_dispatch() {
        let mut rng = StdRng::seed_from_u64(5);

        assert!(for_field("surname", &mut rng).is_some());
        assert!(for_field("email", &mut rng).unwrap().contains('@'));
        assert!(for_field("info", &mut rng).unwrap().ends_with('.'));
        assert!(for_field("widget_code", &mut rng).is_none());
    }

    #[test]
    fn test_phone_number_format() {
        let mut rng = StdRng::seed_from_u64(6);

        for _ in 0..20 {
            let phone = phone_number(&mut rng);
            let parts: Vec<_> = phone.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert_eq!(parts[0].len(), 3);
            assert_eq!(parts[1].len(), 3);
            assert_eq!(parts[2].len(), 4);
        }
    }
}
