//! Term definition tables.
//!
//! Each [`Tier`] has a complete table. Changing tiers swaps the whole table,
//! so returning to a tier always restores exactly the same definitions.

use indexmap::IndexMap;
use log::debug;
use serde::Serialize;

use crate::model::Tier;

const BASELINE: [(&str, &str); 10] = [
    ("6G", "Sixth generation wireless technology with ultra-low latency"),
    (
        "AI",
        "Artificial Intelligence - computer systems that mimic human intelligence",
    ),
    ("ML", "Machine Learning - AI systems that learn from data"),
    ("IoT", "Internet of Things - network of connected devices"),
    (
        "API",
        "Application Programming Interface - software communication protocol",
    ),
    ("framework", "Structured approach or system for organizing work"),
    ("algorithm", "Step-by-step procedure for solving problems"),
    ("model", "Mathematical representation of a real-world process"),
    ("network", "Interconnected system of components"),
    ("system", "Organized set of components working together"),
];

const BEGINNER: [(&str, &str); 5] = [
    ("framework", "A basic structure or system for organizing work"),
    ("algorithm", "A set of simple steps to solve a problem"),
    ("model", "A simple representation of how something works"),
    ("system", "A group of parts working together"),
    ("network", "Connected devices that can communicate"),
];

const ADVANCED: [(&str, &str); 5] = [
    (
        "framework",
        "Structured architectural approach providing foundational components and design patterns",
    ),
    (
        "algorithm",
        "Computational procedure with defined input/output specifications and complexity analysis",
    ),
    (
        "model",
        "Mathematical abstraction representing system behavior with quantifiable parameters",
    ),
    (
        "system",
        "Integrated architecture with defined interfaces, protocols, and operational constraints",
    ),
    (
        "network",
        "Distributed infrastructure with topology, routing protocols, and performance metrics",
    ),
];

/// Case-sensitive term to definition mapping for one tier.
///
/// # Examples
///
/// ```
/// # use seewrite_core::definitions::DefinitionsTable;
/// # use seewrite_core::model::Tier;
/// let table = DefinitionsTable::for_tier(Tier::Beginner);
/// assert_eq!(table.get("system"), Some("A group of parts working together"));
/// assert_eq!(
///     table.describe("LTE"),
///     "LTE: Technical term used in this context"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefinitionsTable {
    tier: Tier,
    entries: IndexMap<String, String>,
}

impl DefinitionsTable {
    /// Builds the complete table for `tier`.
    pub fn for_tier(tier: Tier) -> Self {
        let mut entries: IndexMap<String, String> = BASELINE
            .iter()
            .map(|(term, text)| ((*term).to_string(), (*text).to_string()))
            .collect();

        let overrides: &[(&str, &str)] = match tier {
            Tier::Beginner => &BEGINNER,
            Tier::Intermediate => &[],
            Tier::Advanced => &ADVANCED,
        };
        for (term, text) in overrides {
            // Overrides only replace existing entries, order stays baseline order
            if let Some(slot) = entries.get_mut(*term) {
                *slot = (*text).to_string();
            }
        }

        Self { tier, entries }
    }

    /// The baseline table.
    pub fn baseline() -> Self {
        Self::for_tier(Tier::Intermediate)
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    /// Tooltip text for `term`: the definition itself, or a generic
    /// placeholder naming the term.
    pub fn describe(&self, term: &str) -> String {
        match self.get(term) {
            Some(definition) => definition.to_string(),
            None => {
                debug!(term, tier = self.tier.id(); "No definition found, using placeholder");
                format!("{term}: Technical term used in this context")
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates terms and definitions in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(term, text)| (term.as_str(), text.as_str()))
    }
}

impl Default for DefinitionsTable {
    fn default() -> Self {
        Self::baseline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_has_all_terms() {
        let table = DefinitionsTable::baseline();
        assert_eq!(table.len(), 10);
        assert_eq!(
            table.get("IoT"),
            Some("Internet of Things - network of connected devices")
        );
        assert_eq!(
            table.get("framework"),
            Some("Structured approach or system for organizing work")
        );
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = DefinitionsTable::baseline();
        assert!(table.get("Framework").is_none());
        assert!(table.get("iot").is_none());
    }

    #[test]
    fn test_tier_tables_are_complete() {
        for tier in Tier::ALL {
            let table = DefinitionsTable::for_tier(tier);
            assert_eq!(table.len(), 10);
            assert_eq!(table.tier(), tier);
            // Acronyms never change with the tier
            assert_eq!(
                table.get("6G"),
                Some("Sixth generation wireless technology with ultra-low latency")
            );
        }
    }

    #[test]
    fn test_advanced_overrides() {
        let table = DefinitionsTable::for_tier(Tier::Advanced);
        assert_eq!(
            table.get("network"),
            Some("Distributed infrastructure with topology, routing protocols, and performance metrics")
        );
    }

    #[test]
    fn test_swapping_back_restores_baseline() {
        let advanced = DefinitionsTable::for_tier(Tier::Advanced);
        assert_ne!(advanced, DefinitionsTable::baseline());
        assert_eq!(
            DefinitionsTable::for_tier(Tier::Intermediate),
            DefinitionsTable::baseline()
        );
    }

    #[test]
    fn test_describe() {
        let table = DefinitionsTable::for_tier(Tier::Beginner);
        assert_eq!(
            table.describe("model"),
            "A simple representation of how something works"
        );
        assert_eq!(
            table.describe("5G"),
            "5G: Technical term used in this context"
        );
    }
}
