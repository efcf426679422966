use freightcast_core::models::MatchOrder;

use crate::cities::CityTable;

/// Resolves free-text destinations to known city names.
///
/// When several names occur in the text, the first one under the configured
/// [`MatchOrder`] wins.
#[derive(Debug, Clone)]
pub struct CityExtractor {
    names: Vec<String>,
}

impl CityExtractor {
    pub fn new(table: &CityTable, order: MatchOrder) -> Self {
        let mut names: Vec<String> = table.names().map(str::to_string).collect();
        if order == MatchOrder::LongestFirst {
            // Stable sort keeps table order among equal lengths
            names.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        }
        Self { names }
    }

    /// Find the first known city name contained in `text`
    pub fn extract(&self, text: &str) -> Option<&str> {
        if text.is_empty() {
            return None;
        }
        self.names.iter().find(|name| text.contains(name.as_str())).map(String::as_str)
    }

    /// Names in match priority order
    pub fn priority(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freightcast_core::models::CityEntry;

    fn overlapping_table() -> CityTable {
        CityTable::new(vec![
            CityEntry::new("York", 53.96, -1.08, false),
            CityEntry::new("New York", 40.71, -74.01, false),
        ])
        .unwrap()
    }

    #[test]
    fn test_extracts_city_from_free_text() {
        let extractor = CityExtractor::new(&CityTable::builtin(), MatchOrder::Declaration);
        assert_eq!(extractor.extract("Almaty, warehouse 4"), Some("Almaty"));
        assert_eq!(extractor.extract("Delivery to Moscow region"), Some("Moscow"));
    }

    #[test]
    fn test_no_match() {
        let extractor = CityExtractor::new(&CityTable::builtin(), MatchOrder::Declaration);
        assert_eq!(extractor.extract(""), None);
        assert_eq!(extractor.extract("Ulaanbaatar"), None);
    }

    #[test]
    fn test_declaration_order_wins() {
        let extractor = CityExtractor::new(&overlapping_table(), MatchOrder::Declaration);
        assert_eq!(extractor.extract("New York port"), Some("York"));
    }

    #[test]
    fn test_longest_first() {
        let extractor = CityExtractor::new(&overlapping_table(), MatchOrder::LongestFirst);
        assert_eq!(extractor.extract("New York port"), Some("New York"));
        assert_eq!(extractor.extract("York minster"), Some("York"));
    }

    #[test]
    fn test_multiple_cities_first_in_table_wins() {
        let extractor = CityExtractor::new(&CityTable::builtin(), MatchOrder::Declaration);
        assert_eq!(extractor.extract("Moscow via Almaty"), Some("Almaty"));
    }
}
