use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat string-keyed map of transaction fields exchanged with the gateway.
///
/// Keys are normalized to uppercase on ingestion; the gateway treats field
/// names as case-insensitive, so `orderID`, `ORDERID` and `OrderId` all land
/// on the same entry (last write wins). Iteration order is byte-lexicographic
/// by key, which is exactly the ordering the canonicalizer requires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, String>);

impl ParameterSet {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, uppercasing the key. Returns the previous value for
    /// the normalized key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into().to_uppercase(), value.into())
    }

    /// Looks up a field by case-insensitive name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(&key.to_uppercase()).map(String::as_str)
    }

    /// Returns true if the field is present (possibly with an empty value).
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(&key.to_uppercase())
    }

    /// Removes a field by case-insensitive name, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(&key.to_uppercase())
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Consumes the set, yielding the underlying ordered map.
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl From<BTreeMap<String, String>> for ParameterSet {
    fn from(map: BTreeMap<String, String>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_uppercased_on_insert() {
        let mut params = ParameterSet::new();
        params.insert("orderID", "12");
        assert_eq!(params.get("ORDERID"), Some("12"));
        assert_eq!(params.get("orderid"), Some("12"));
    }

    #[test]
    fn last_write_wins_after_normalization() {
        let params: ParameterSet = [("status", "5"), ("STATUS", "9")].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("status"), Some("9"));
    }

    #[test]
    fn iteration_is_lexicographic() {
        let params: ParameterSet = [("b", "2"), ("A", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn serializes_as_plain_map() {
        let params: ParameterSet = [("amount", "500")].into_iter().collect();
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"AMOUNT":"500"}"#
        );
    }
}
