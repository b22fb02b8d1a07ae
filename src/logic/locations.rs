/// Lowercase aliases for Nigerian cities and the name the weather provider resolves best
const CITY_ALIASES: [(&str, &str); 20] = [
    ("lagos", "Lagos"),
    ("abuja", "Abuja"),
    ("kano", "Kano"),
    ("port harcourt", "Port Harcourt"),
    ("ibadan", "Ibadan"),
    ("benin", "Benin City"),
    ("maiduguri", "Maiduguri"),
    ("zaria", "Zaria"),
    ("aba", "Aba"),
    ("jos", "Jos"),
    ("ilorin", "Ilorin"),
    ("oyo", "Oyo"),
    ("enugu", "Enugu"),
    ("abeokuta", "Abeokuta"),
    ("sokoto", "Sokoto"),
    ("onitsha", "Onitsha"),
    ("warri", "Warri"),
    ("calabar", "Calabar"),
    ("akure", "Akure"),
    ("bauchi", "Bauchi"),
];

/// Map a user-supplied Nigerian city to its canonical name.
/// Unknown locations pass through trimmed but otherwise untouched.
pub fn normalize_location(input: &str) -> String {
    let trimmed = input.trim();
    let key = trimmed.to_lowercase();

    CITY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

pub fn known_cities() -> Vec<&'static str> {
    CITY_ALIASES.iter().map(|(_, canonical)| *canonical).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_known_cities() {
        assert_eq!(normalize_location("lagos"), "Lagos");
        assert_eq!(normalize_location("  PORT HARCOURT "), "Port Harcourt");
        assert_eq!(normalize_location("Benin"), "Benin City");
    }

    #[test]
    fn unknown_locations_pass_through() {
        assert_eq!(normalize_location("Owerri"), "Owerri");
        assert_eq!(normalize_location(" 6.45,3.39 "), "6.45,3.39");
        assert_eq!(normalize_location(""), "");
    }

    #[test]
    fn known_cities_are_canonical() {
        let cities = known_cities();
        assert_eq!(cities.len(), 20);
        assert!(cities.contains(&"Benin City"));
        for city in cities {
            assert_eq!(normalize_location(city), city);
        }
    }
}
