//! Composite morphers: several morphers chained on one stem.
//!
//! # Examples
//!
//! ```
//! use lex_morph::affix::{AffixMorpher, Attachment};
//! use lex_morph::composite::CompositeMorpher;
//! use lex_morph::morph::Morpher;
//! use lex_morph::property::PropertyBundle;
//!
//! // A toy comparative: "great" -> "the greater".
//! let suffix = AffixMorpher::new(
//!     &["DEGREE"],
//!     &[(&["base"], ""), (&["comp"], "er")],
//!     Attachment::Suffix,
//! );
//! let article = AffixMorpher::new(
//!     &["DEGREE"],
//!     &[(&["base"], ""), (&["comp"], "the ")],
//!     Attachment::Prefix,
//! );
//! let morpher = CompositeMorpher::new(vec![Box::new(suffix), Box::new(article)]);
//!
//! let properties = PropertyBundle::from([("DEGREE", "comp")]);
//! assert_eq!(morpher.morph("great", &properties).unwrap(), "the greater");
//! ```

use crate::{
    morph::{MorphError, Morpher},
    property::PropertyBundle,
};

/// A `CompositeMorpher` threads a stem through an ordered sequence of
/// sub-morphers: each step receives the previous step's output stem and the
/// caller's original, unmodified property bundle. Composition affects only
/// the stem, never the properties.
///
/// Step order is significant. The catalog's English verb morpher applies
/// its tense/agreement suffix before its negation prefix, because the
/// multi-word negation marker must attach to the already-suffixed form.
pub struct CompositeMorpher {
    steps: Vec<Box<dyn Morpher>>,
}

impl CompositeMorpher {
    /// Builds a composite from an ordered sequence of sub-morphers. The
    /// steps may be any mix of morpher kinds, composites included.
    ///
    /// # Panics
    ///
    /// Panics if given fewer than two steps; like rule tables, step lists
    /// are literal wiring, and a one-step composite is an authoring bug.
    pub fn new(steps: Vec<Box<dyn Morpher>>) -> Self {
        assert!(
            steps.len() >= 2,
            "a composite morpher takes at least two sub-morphers, got {}",
            steps.len(),
        );
        Self { steps }
    }
}

impl Morpher for CompositeMorpher {
    /// Returns the stem after every step has applied, or the first error
    /// any step reports, verbatim. There is no partial result: a failing
    /// step discards the stems produced so far.
    fn morph(&self, stem: &str, properties: &PropertyBundle) -> Result<String, MorphError> {
        let mut word = stem.to_string();
        for step in &self.steps {
            word = step.morph(&word, properties)?;
        }
        Ok(word)
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeMorpher;
    use crate::affix::{AffixMorpher, Attachment};
    use crate::morph::{MorphError, Morpher};
    use crate::property::PropertyBundle;

    fn plural_suffix() -> AffixMorpher {
        AffixMorpher::new(
            &["COUNT"],
            &[(&["sng"], ""), (&["plu"], "s")],
            Attachment::Suffix,
        )
    }

    fn definite_article() -> AffixMorpher {
        AffixMorpher::new(
            &["DEFINITE"],
            &[(&["yes"], "the "), (&["no"], "")],
            Attachment::Prefix,
        )
    }

    #[test]
    fn composition_matches_manual_chaining() {
        let composite =
            CompositeMorpher::new(vec![Box::new(plural_suffix()), Box::new(definite_article())]);
        let first = plural_suffix();
        let second = definite_article();

        let properties = PropertyBundle::from([("COUNT", "plu"), ("DEFINITE", "yes")]);
        let chained = second
            .morph(&first.morph("dog", &properties).unwrap(), &properties)
            .unwrap();
        assert_eq!(composite.morph("dog", &properties).unwrap(), chained);
        assert_eq!(chained, "the dogs");
    }

    #[test]
    fn step_order_matters() {
        // With two suffix morphers the step order decides which affix lands
        // innermost.
        fn tag(affix: &str) -> AffixMorpher {
            AffixMorpher::new(&["A"], &[(&["x"], affix)], Attachment::Suffix)
        }

        let forward = CompositeMorpher::new(vec![Box::new(tag("-in")), Box::new(tag("-out"))]);
        let backward = CompositeMorpher::new(vec![Box::new(tag("-out")), Box::new(tag("-in"))]);

        let properties = PropertyBundle::from([("A", "x")]);
        assert_eq!(forward.morph("stem", &properties).unwrap(), "stem-in-out");
        assert_eq!(backward.morph("stem", &properties).unwrap(), "stem-out-in");
    }

    #[test]
    fn composites_nest() {
        let inner =
            CompositeMorpher::new(vec![Box::new(plural_suffix()), Box::new(definite_article())]);
        let exclaim = AffixMorpher::new(&["A"], &[(&["x"], "!")], Attachment::Suffix);
        let outer = CompositeMorpher::new(vec![Box::new(inner), Box::new(exclaim)]);

        let properties =
            PropertyBundle::from([("COUNT", "plu"), ("DEFINITE", "yes"), ("A", "x")]);
        assert_eq!(outer.morph("dog", &properties).unwrap(), "the dogs!");
    }

    #[test]
    fn first_failure_propagates_verbatim() {
        let composite =
            CompositeMorpher::new(vec![Box::new(plural_suffix()), Box::new(definite_article())]);

        // The first step fails before the second is consulted.
        let properties = PropertyBundle::from([("DEFINITE", "yes")]);
        assert_eq!(
            composite.morph("dog", &properties),
            Err(MorphError::MissingProperty {
                name: "COUNT".to_string()
            }),
        );

        // A failure in a later step surfaces unchanged too.
        let properties = PropertyBundle::from([("COUNT", "plu"), ("DEFINITE", "maybe")]);
        assert_eq!(
            composite.morph("dog", &properties),
            Err(MorphError::UnknownRule {
                key: "maybe".to_string()
            }),
        );
    }

    #[test]
    fn same_bundle_reaches_every_step() {
        // Both steps key on the same property; if composition rewrote the
        // bundle, the second lookup would not see the original value.
        let composite = CompositeMorpher::new(vec![
            Box::new(AffixMorpher::new(&["N"], &[(&["1"], "a")], Attachment::Suffix)),
            Box::new(AffixMorpher::new(&["N"], &[(&["1"], "b")], Attachment::Suffix)),
        ]);
        let properties = PropertyBundle::from([("N", "1")]);
        assert_eq!(composite.morph("stem", &properties).unwrap(), "stemab");
    }

    #[test]
    #[should_panic(expected = "at least two sub-morphers")]
    fn single_step_composite_panics() {
        CompositeMorpher::new(vec![Box::new(plural_suffix())]);
    }
}
