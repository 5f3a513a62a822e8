//! Affix morphers: a single rule-table lookup applied to a stem as a prefix
//! or a suffix.
//!
//! An [AffixMorpher] is built from an ordered list of property names and a
//! rule table keyed on tuples of corresponding property values. German
//! adjectives, for instance, take suffixes driven by the gender and case of
//! the noun they modify:
//!
//! ```
//! use lex_morph::affix::{AffixMorpher, Attachment};
//! use lex_morph::morph::Morpher;
//! use lex_morph::property::PropertyBundle;
//!
//! let morpher = AffixMorpher::new(
//!     &["GENDER", "CASE"],
//!     &[
//!         (&["m", "acc"], "en"),
//!         (&["f", "acc"], "e"),
//!         (&["n", "acc"], "es"),
//!         (&["m", "dat"], "em"),
//!         (&["f", "dat"], "er"),
//!         (&["n", "dat"], "em"),
//!     ],
//!     Attachment::Suffix,
//! );
//!
//! let properties = PropertyBundle::from([("GENDER", "n"), ("CASE", "acc")]);
//! assert_eq!(morpher.morph("rot", &properties).unwrap(), "rotes");
//!
//! let properties = PropertyBundle::from([("GENDER", "m"), ("CASE", "dat")]);
//! assert_eq!(morpher.morph("rot", &properties).unwrap(), "rotem");
//! ```

use crate::{
    morph::{MorphError, Morpher},
    property::PropertyBundle,
};
use std::collections::HashMap;

/// Whether an affix attaches before or after the stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attachment {
    /// The affix is prepended: `morph` returns `affix + stem`.
    Prefix,
    /// The affix is appended: `morph` returns `stem + affix`.
    Suffix,
}

/// A rule-table key: one property value per configured property name, in
/// the declared order. Structured rather than string-concatenated so that
/// arity mismatches are caught when the table is built, not on lookup.
#[derive(Debug, Hash, PartialEq, Eq)]
struct RuleKey(Vec<String>);

impl RuleKey {
    fn display(&self) -> String {
        self.0.join(", ")
    }
}

/// An `AffixMorpher` attaches one table-driven affix to a word stem. The
/// table, the property-name order, and the attachment mode are fixed at
/// construction; `morph` never mutates anything.
#[derive(Debug)]
pub struct AffixMorpher {
    property_names: Vec<String>,
    rules: HashMap<RuleKey, String>,
    attachment: Attachment,
}

impl AffixMorpher {
    /// Builds a morpher from an ordered list of property names and a
    /// literal rule table mapping value tuples (in that property-name
    /// order) to affixes. The empty affix is legal and means "attach
    /// nothing".
    ///
    /// # Panics
    ///
    /// Panics if any rule's value tuple does not have exactly one value per
    /// property name. Rule tables are static literals, so an arity mismatch
    /// is an authoring bug rather than a runtime condition.
    pub fn new(
        property_names: &[&str],
        rules: &[(&[&str], &str)],
        attachment: Attachment,
    ) -> Self {
        let mut table = HashMap::with_capacity(rules.len());
        for (values, affix) in rules {
            assert!(
                values.len() == property_names.len(),
                "affix rule {:?} has {} value(s) but the morpher is keyed on {} property name(s)",
                values,
                values.len(),
                property_names.len(),
            );
            let key = RuleKey(values.iter().map(|v| (*v).to_string()).collect());
            table.insert(key, (*affix).to_string());
        }
        Self {
            property_names: property_names.iter().map(|n| (*n).to_string()).collect(),
            rules: table,
            attachment,
        }
    }

    /// Projects the bundle onto this morpher's property-name order. Only
    /// the configured names are read; extra properties in the bundle are
    /// ignored.
    fn project(&self, properties: &PropertyBundle) -> Result<RuleKey, MorphError> {
        let mut values = Vec::with_capacity(self.property_names.len());
        for name in &self.property_names {
            match properties.get(name) {
                Some(value) => values.push(value.to_string()),
                None => {
                    return Err(MorphError::MissingProperty { name: name.clone() });
                }
            }
        }
        Ok(RuleKey(values))
    }
}

impl Morpher for AffixMorpher {
    fn morph(&self, stem: &str, properties: &PropertyBundle) -> Result<String, MorphError> {
        let key = self.project(properties)?;
        let affix = self.rules.get(&key).ok_or_else(|| MorphError::UnknownRule {
            key: key.display(),
        })?;
        Ok(match self.attachment {
            Attachment::Prefix => format!("{}{}", affix, stem),
            Attachment::Suffix => format!("{}{}", stem, affix),
        })
    }
}
