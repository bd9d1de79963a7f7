//! Structural form encoding.
//!
//! Parameter objects are flattened depth-first into an ordered multi-map of
//! bracketed keys:
//!
//! ```text
//! amount=10000
//! payment_methods[]=gcash
//! payment_methods[]=maya
//! payment_method_options[card][capture_type]=manual
//! metadata[order]=1234
//! ```
//!
//! Struct fields are visited in declaration order, sequence elements in
//! sequence order, and map entries in sorted key order, so encoding the same
//! value twice always yields identical output. Absent optional values
//! contribute no pairs at all.
//!
//! Structs implement [`FormEncode`] through `#[derive(FormEncode)]`, which
//! requires a `#[form(key = "...")]` wire key on every field.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use url::form_urlencoded;

pub use payrex_macros::FormEncode;

/// A value that can be flattened into form pairs.
pub trait FormEncode {
    /// Append this value's pairs to `out`, using `key` as the composite key
    /// of this value. An empty key means "top level".
    fn encode_into(&self, key: &str, out: &mut FormValues);
}

/// Ordered wire-key descriptors of a derived parameter struct.
pub trait FormObject: FormEncode {
    /// Wire keys in field declaration order.
    const WIRE_KEYS: &'static [&'static str];
}

/// Compose a child key: `wire_key` at the top level, `parent[wire_key]`
/// below it.
pub fn child_key(parent: &str, wire_key: &str) -> String {
    if parent.is_empty() {
        wire_key.to_string()
    } else {
        format!("{parent}[{wire_key}]")
    }
}

/// Encode a parameter object into a fresh [`FormValues`].
pub fn encode<T: FormEncode + ?Sized>(params: &T) -> FormValues {
    let mut out = FormValues::new();
    params.encode_into("", &mut out);
    out
}

/// Ordered multi-map of encoded form pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair. Existing pairs under the same key are kept.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Whether any pair uses `key` or a key nested under it.
    pub fn contains_prefix(&self, key: &str) -> bool {
        self.pairs
            .iter()
            .any(|(k, _)| k == key || k.strip_prefix(key).is_some_and(|rest| rest.starts_with('[')))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as `application/x-www-form-urlencoded`.
    pub fn to_urlencoded(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl fmt::Display for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_urlencoded())
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = &'a (String, String);
    type IntoIter = std::slice::Iter<'a, (String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

// ============================================================================
// Scalars
// ============================================================================

impl FormEncode for str {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        out.add(key, self);
    }
}

impl FormEncode for String {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        out.add(key, self.as_str());
    }
}

impl FormEncode for bool {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        out.add(key, if *self { "true" } else { "false" });
    }
}

macro_rules! impl_form_encode_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FormEncode for $ty {
                fn encode_into(&self, key: &str, out: &mut FormValues) {
                    out.add(key, self.to_string());
                }
            }
        )*
    };
}

impl_form_encode_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Implement [`FormEncode`] for wire enums through their `as_str()`.
macro_rules! impl_form_encode_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::encode::FormEncode for $ty {
                fn encode_into(&self, key: &str, out: &mut $crate::encode::FormValues) {
                    out.add(key, self.as_str());
                }
            }
        )*
    };
}

pub(crate) use impl_form_encode_as_str;

// ============================================================================
// Wrappers and collections
// ============================================================================

impl<T: FormEncode + ?Sized> FormEncode for &T {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        (**self).encode_into(key, out);
    }
}

impl<T: FormEncode + ?Sized> FormEncode for Box<T> {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        (**self).encode_into(key, out);
    }
}

impl<T: FormEncode> FormEncode for Option<T> {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        if let Some(value) = self {
            value.encode_into(key, out);
        }
    }
}

impl<T: FormEncode> FormEncode for [T] {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        let element_key = format!("{key}[]");
        for element in self {
            element.encode_into(&element_key, out);
        }
    }
}

impl<T: FormEncode> FormEncode for Vec<T> {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        self.as_slice().encode_into(key, out);
    }
}

impl<T: FormEncode> FormEncode for BTreeMap<String, T> {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        for (map_key, value) in self {
            value.encode_into(&child_key(key, map_key), out);
        }
    }
}

impl<T: FormEncode, S> FormEncode for HashMap<String, T, S> {
    fn encode_into(&self, key: &str, out: &mut FormValues) {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        for (map_key, value) in entries {
            value.encode_into(&child_key(key, map_key), out);
        }
    }
}

/// The empty parameter object.
impl FormEncode for () {
    fn encode_into(&self, _key: &str, _out: &mut FormValues) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(FormEncode)]
    struct Card {
        #[form(key = "capture_type")]
        capture_type: String,
        #[form(key = "allowed_bins")]
        allowed_bins: Option<Vec<String>>,
    }

    #[derive(FormEncode)]
    struct Options {
        #[form(key = "card")]
        card: Card,
    }

    #[derive(FormEncode)]
    struct Params {
        #[form(key = "amount")]
        amount: i64,
        #[form(key = "description")]
        description: Option<String>,
        #[form(key = "payment_methods")]
        payment_methods: Vec<String>,
        #[form(key = "payment_method_options")]
        payment_method_options: Option<Options>,
        #[form(key = "metadata")]
        metadata: Option<HashMap<String, String>>,
    }

    fn sample() -> Params {
        Params {
            amount: 10000,
            description: None,
            payment_methods: vec!["gcash".into(), "maya".into()],
            payment_method_options: Some(Options {
                card: Card {
                    capture_type: "manual".into(),
                    allowed_bins: Some(vec!["411111".into(), "422222".into(), "433333".into()]),
                },
            }),
            metadata: None,
        }
    }

    #[test]
    fn test_child_key() {
        assert_eq!(child_key("", "amount"), "amount");
        assert_eq!(child_key("metadata", "order"), "metadata[order]");
        assert_eq!(child_key("a[b]", "c"), "a[b][c]");
    }

    #[test]
    fn test_nested_repeated_field_keeps_order() {
        let values = encode(&sample());

        assert_eq!(
            values.get_all("payment_method_options[card][allowed_bins][]"),
            vec!["411111", "422222", "433333"]
        );
        assert_eq!(
            values.get("payment_method_options[card][capture_type]"),
            Some("manual")
        );
    }

    #[test]
    fn test_declaration_order() {
        let values = encode(&sample());
        let keys: Vec<&str> = values.iter().map(|(k, _)| k).collect();

        assert_eq!(
            keys,
            vec![
                "amount",
                "payment_methods[]",
                "payment_methods[]",
                "payment_method_options[card][capture_type]",
                "payment_method_options[card][allowed_bins][]",
                "payment_method_options[card][allowed_bins][]",
                "payment_method_options[card][allowed_bins][]",
            ]
        );
    }

    #[test]
    fn test_absent_optional_is_omitted() {
        let values = encode(&sample());

        assert!(!values.contains_prefix("description"));
        assert!(!values.contains_prefix("metadata"));
    }

    #[test]
    fn test_present_zero_values_are_emitted() {
        let mut params = sample();
        params.amount = 0;
        params.description = Some(String::new());

        let values = encode(&params);
        assert_eq!(values.get("amount"), Some("0"));
        assert_eq!(values.get("description"), Some(""));
    }

    #[test]
    fn test_present_empty_collection_emits_nothing() {
        let mut params = sample();
        params.metadata = Some(HashMap::new());
        params.payment_methods.clear();

        let values = encode(&params);
        assert!(!values.contains_prefix("metadata"));
        assert!(!values.contains_prefix("payment_methods"));
    }

    #[test]
    fn test_map_keys_are_sorted() {
        let mut params = sample();
        let mut metadata = HashMap::new();
        metadata.insert("zeta".to_string(), "1".to_string());
        metadata.insert("alpha".to_string(), "2".to_string());
        metadata.insert("mid".to_string(), "3".to_string());
        params.metadata = Some(metadata);

        let values = encode(&params);
        let metadata_keys: Vec<&str> = values
            .iter()
            .map(|(k, _)| k)
            .filter(|k| k.starts_with("metadata"))
            .collect();

        assert_eq!(
            metadata_keys,
            vec!["metadata[alpha]", "metadata[mid]", "metadata[zeta]"]
        );
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut params = sample();
        let mut metadata = HashMap::new();
        for i in 0..16 {
            metadata.insert(format!("key{i}"), i.to_string());
        }
        params.metadata = Some(metadata);

        assert_eq!(encode(&params).to_string(), encode(&params).to_string());
    }

    #[test]
    fn test_urlencoded_output() {
        let mut values = FormValues::new();
        values.add("amount", "10000");
        values.add("metadata[note]", "a b&c");

        assert_eq!(
            values.to_urlencoded(),
            "amount=10000&metadata%5Bnote%5D=a+b%26c"
        );
    }

    #[test]
    fn test_bool_and_negative_numbers() {
        let mut values = FormValues::new();
        true.encode_into("flag", &mut values);
        (-42i32).encode_into("delta", &mut values);

        assert_eq!(values.get("flag"), Some("true"));
        assert_eq!(values.get("delta"), Some("-42"));
    }

    #[test]
    fn test_wire_keys_descriptor() {
        assert_eq!(
            Params::WIRE_KEYS,
            &[
                "amount",
                "description",
                "payment_methods",
                "payment_method_options",
                "metadata"
            ]
        );
        assert_eq!(Card::WIRE_KEYS, &["capture_type", "allowed_bins"]);
    }

    #[test]
    fn test_unit_params_encode_nothing() {
        assert!(encode(&()).is_empty());
    }
}
