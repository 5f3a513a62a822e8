//! Property bundles: the syntactic feature values that drive inflection.
//!
//! A bundle is built per morph call by the caller and handed to a morpher by
//! reference; no morpher holds on to one.
//!
//! # Examples
//!
//! ```
//! use lex_morph::property::PropertyBundle;
//!
//! let mut properties = PropertyBundle::new();
//! properties.insert("TENSE", "present");
//! assert_eq!(properties.get("TENSE"), Some("present"));
//!
//! // Literal bundles can be built from an array of pairs.
//! let properties = PropertyBundle::from([("COUNT", "plu"), ("CASE", "dat")]);
//! assert_eq!(properties.get("CASE"), Some("dat"));
//! assert_eq!(properties.get("GENDER"), None);
//! ```

use std::collections::HashMap;

/// A `PropertyBundle` maps syntactic property names (`"PERSON"`, `"TENSE"`,
/// ...) to their values (`"3"`, `"present"`, ...) for a single word slot.
/// Property names are domain-specific; nothing in the code restricts them to
/// a fixed vocabulary. A morpher reads only the names it was keyed on and
/// ignores the rest of the bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyBundle(HashMap<String, String>);

impl PropertyBundle {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Sets the value for a property, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the value for a property, or `None` if the bundle has no
    /// value for it.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns whether the bundle has a value for the named property.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for PropertyBundle {
    fn from(pairs: [(&str, &str); N]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyBundle;

    #[test]
    fn insert_and_get() {
        let mut properties = PropertyBundle::new();
        assert!(!properties.contains("PERSON"));

        properties.insert("PERSON", "1");
        assert_eq!(properties.get("PERSON"), Some("1"));
        assert!(properties.contains("PERSON"));

        properties.insert("PERSON", "3");
        assert_eq!(properties.get("PERSON"), Some("3"));
    }

    #[test]
    fn from_pairs() {
        let properties = PropertyBundle::from([("GENDER", "f"), ("CASE", "acc")]);
        assert_eq!(properties.get("GENDER"), Some("f"));
        assert_eq!(properties.get("CASE"), Some("acc"));
        assert_eq!(properties.get("COUNT"), None);
    }
}
