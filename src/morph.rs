//! Provides the [Morpher] trait, which defines the one operation shared by
//! every word-transforming rule, and the errors a morph can fail with.

use crate::property::PropertyBundle;
use thiserror::Error;

/// The error returned when a morpher cannot inflect a stem. Neither variant
/// is ever defaulted away: a failed morph yields no best-effort word, and
/// the caller decides whether to retry with corrected properties or abort
/// the surrounding generation pipeline.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MorphError {
    /// The property bundle has no value for a property the morpher's rule
    /// table is keyed on. Usually a caller bug.
    #[error("property bundle has no value for `{name}`")]
    MissingProperty {
        /// The property name that was absent from the bundle.
        name: String,
    },
    /// The projected property values match no entry in the rule table. This
    /// is either a caller bug (an invalid property value) or an incomplete
    /// table (a catalog-author bug); the two are indistinguishable here and
    /// both are fatal to the call.
    #[error("no affix rule for property values ({key})")]
    UnknownRule {
        /// The projected value tuple, comma-joined for display.
        key: String,
    },
}

/// This trait is implemented by anything that can modify a word stem to
/// express syntactic properties: single affix rules, composites of them,
/// and whatever future rule kinds turn up.
///
/// Implementations must be immutable once built. `morph` is a pure function
/// of its arguments, so any number of threads may share one morpher without
/// coordination; the `Send + Sync` bounds hold every implementor to that.
pub trait Morpher: Send + Sync {
    /// Returns a declension of the word stem based on the provided
    /// syntactic properties.
    fn morph(&self, stem: &str, properties: &PropertyBundle) -> Result<String, MorphError>;
}
