use indexmap::IndexMap;
use url::form_urlencoded;

use crate::Value;

/// An ordered collection of wire key/value pairs.
///
/// Backs both request bodies and query strings. Keys keep their
/// insertion order, so encoding the same input twice yields the same
/// byte sequence.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pairs: IndexMap<String, Value>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a top-level key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.pairs.insert(key.into(), value.into());
    }

    /// Insert a `prefix[subkey]` pair, the flat form of one map entry.
    pub fn insert_keyed(&mut self, prefix: &str, subkey: &str, value: impl Into<Value>) {
        self.pairs
            .insert(format!("{}[{}]", prefix, subkey), value.into());
    }

    /// Insert a `prefix[index][subkey]` pair, the flat form of one field
    /// of the `index`-th element of an array.
    pub fn insert_indexed(
        &mut self,
        prefix: &str,
        index: usize,
        subkey: &str,
        value: impl Into<Value>,
    ) {
        self.pairs
            .insert(format!("{}[{}][{}]", prefix, index, subkey), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.pairs.get(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Serialize to `application/x-www-form-urlencoded`, percent-escaping
    /// keys and values. Brackets in flattened keys become `%5B` / `%5D`.
    pub fn urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut form = Form::new();
        form.insert("customer", "cus_123");
        form.insert("prorate", false);
        form.insert("days_until_due", 30_i64);

        let keys: Vec<&str> = form.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["customer", "prorate", "days_until_due"]);
    }

    #[test]
    fn test_bracket_helpers_build_flattened_keys() {
        let mut form = Form::new();
        form.insert_keyed("metadata", "order_id", "6735");
        form.insert_indexed("items", 0, "price", "price_gold");
        form.insert_indexed("items", 1, "quantity", 2_i64);

        assert_eq!(form.get("metadata[order_id]"), Some(&Value::Str("6735".into())));
        assert_eq!(form.get("items[0][price]"), Some(&Value::Str("price_gold".into())));
        assert_eq!(form.get("items[1][quantity]"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_urlencoded_escapes_brackets_and_spaces() {
        let mut form = Form::new();
        form.insert_indexed("items", 0, "price", "price_gold");
        form.insert_keyed("metadata", "note", "two words");

        assert_eq!(
            form.urlencoded(),
            "items%5B0%5D%5Bprice%5D=price_gold&metadata%5Bnote%5D=two+words"
        );
    }

    #[test]
    fn test_empty_form_encodes_to_empty_string() {
        let form = Form::new();
        assert!(form.is_empty());
        assert_eq!(form.urlencoded(), "");
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let build = || {
            let mut form = Form::new();
            form.insert("customer", "cus_123");
            form.insert_keyed("created", "gte", 1_527_000_000_i64);
            form.insert("limit", 3_i64);
            form.urlencoded()
        };
        assert_eq!(build(), build());
    }
}
