//! Filter encoding for the analytical query endpoints
//!
//! Every `/visualizations/*` endpoint takes some subset of the same three
//! filters (town or towns, flat type, year). [`FilterSet`] models that subset
//! with all-optional fields, and [`FilterSet::encode`] produces the flattened
//! [`ParameterSet`] the backend expects: absent filters emit no key at all,
//! and a town collection emits one independently-addressable `towns[i]` key
//! per element.

use serde::{Deserialize, Serialize};

/// A town constraint: one town, or an ordered collection of towns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TownFilter {
    /// A single town, encoded as the `town` key
    Single(String),
    /// An ordered collection, encoded as indexed `towns[i]` keys
    Multiple(Vec<String>),
}

impl From<&str> for TownFilter {
    fn from(town: &str) -> Self {
        TownFilter::Single(town.to_string())
    }
}

impl From<String> for TownFilter {
    fn from(town: String) -> Self {
        TownFilter::Single(town)
    }
}

impl From<Vec<String>> for TownFilter {
    fn from(towns: Vec<String>) -> Self {
        TownFilter::Multiple(towns)
    }
}

/// Optional filter criteria for an analytical query
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    /// Town constraint, if any
    pub town: Option<TownFilter>,
    /// Flat type constraint (e.g. "4 ROOM"), if any
    pub flat_type: Option<String>,
    /// Transaction year constraint, if any; year 0 counts as absent
    pub year: Option<u16>,
}

impl FilterSet {
    /// Encode the present filters as query parameters
    ///
    /// Pure and deterministic: the same filter set always yields the same
    /// parameter set, entry order included. Absent filters (and empty scalar
    /// values) emit no key.
    pub fn encode(&self) -> ParameterSet {
        let mut params = ParameterSet::new();

        match &self.town {
            Some(TownFilter::Single(town)) if !town.is_empty() => {
                params.push("town", town.clone());
            }
            Some(TownFilter::Multiple(towns)) => {
                params.push_repeated("towns", towns);
            }
            _ => {}
        }

        if let Some(flat_type) = self.flat_type.as_deref() {
            if !flat_type.is_empty() {
                params.push("flatType", flat_type);
            }
        }

        if let Some(year) = self.year {
            if year != 0 {
                params.push("year", year.to_string());
            }
        }

        params
    }
}

/// Ordered key/value pairs destined for a query string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParameterSet {
    entries: Vec<(String, String)>,
}

impl ParameterSet {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scalar entry
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Append a collection as indexed `name[i]` entries, i = 0..n-1 in
    /// collection order
    ///
    /// This is the only place the indexed-key encoding rule lives; the
    /// receiving side reconstructs the list exactly, so the collection is
    /// never coalesced into a single key.
    pub fn push_repeated(&mut self, name: &str, values: &[String]) {
        for (index, value) in values.iter().enumerate() {
            self.entries.push((format!("{name}[{index}]"), value.clone()));
        }
    }

    /// The entries, in insertion order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &ParameterSet) -> Vec<&str> {
        params.entries().iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn test_single_town_emits_one_town_key() {
        let filters = FilterSet {
            town: Some(TownFilter::Single("BEDOK".to_string())),
            ..Default::default()
        };

        let params = filters.encode();
        assert_eq!(
            params.entries(),
            &[("town".to_string(), "BEDOK".to_string())]
        );
    }

    #[test]
    fn test_town_collection_emits_indexed_keys_in_order() {
        let filters = FilterSet {
            town: Some(TownFilter::Multiple(vec![
                "BEDOK".to_string(),
                "TAMPINES".to_string(),
                "YISHUN".to_string(),
            ])),
            ..Default::default()
        };

        let params = filters.encode();
        assert_eq!(
            params.entries(),
            &[
                ("towns[0]".to_string(), "BEDOK".to_string()),
                ("towns[1]".to_string(), "TAMPINES".to_string()),
                ("towns[2]".to_string(), "YISHUN".to_string()),
            ]
        );
        assert!(!keys(&params).contains(&"town"));
    }

    #[test]
    fn test_absent_town_emits_no_town_key() {
        let params = FilterSet::default().encode();
        assert!(params.is_empty());
    }

    #[test]
    fn test_empty_town_collection_emits_no_keys() {
        let filters = FilterSet {
            town: Some(TownFilter::Multiple(vec![])),
            ..Default::default()
        };

        assert!(filters.encode().is_empty());
    }

    #[test]
    fn test_empty_single_town_is_treated_as_absent() {
        let filters = FilterSet {
            town: Some(TownFilter::Single(String::new())),
            flat_type: Some(String::new()),
            ..Default::default()
        };

        assert!(filters.encode().is_empty());
    }

    #[test]
    fn test_flat_type_and_year() {
        let filters = FilterSet {
            flat_type: Some("4 ROOM".to_string()),
            year: Some(2023),
            ..Default::default()
        };

        let params = filters.encode();
        assert_eq!(
            params.entries(),
            &[
                ("flatType".to_string(), "4 ROOM".to_string()),
                ("year".to_string(), "2023".to_string()),
            ]
        );
    }

    #[test]
    fn test_year_zero_is_treated_as_absent() {
        let filters = FilterSet {
            year: Some(0),
            ..Default::default()
        };

        assert!(filters.encode().is_empty());
    }

    #[test]
    fn test_all_filters_together_keep_insertion_order() {
        let filters = FilterSet {
            town: Some(TownFilter::Multiple(vec![
                "BEDOK".to_string(),
                "YISHUN".to_string(),
            ])),
            flat_type: Some("3 ROOM".to_string()),
            year: Some(2022),
        };

        let params = filters.encode();
        assert_eq!(
            keys(&params),
            vec!["towns[0]", "towns[1]", "flatType", "year"]
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let filters = FilterSet {
            town: Some(TownFilter::Multiple(vec![
                "BEDOK".to_string(),
                "YISHUN".to_string(),
            ])),
            flat_type: Some("5 ROOM".to_string()),
            year: Some(2024),
        };

        assert_eq!(filters.encode(), filters.encode());
    }

    #[test]
    fn test_town_filter_conversions() {
        assert_eq!(
            TownFilter::from("BEDOK"),
            TownFilter::Single("BEDOK".to_string())
        );
        assert_eq!(
            TownFilter::from(vec!["BEDOK".to_string()]),
            TownFilter::Multiple(vec!["BEDOK".to_string()])
        );
    }
}
