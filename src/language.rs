//! The language rule catalog: pre-built morphers for specific
//! language/part-of-speech pairs.
//!
//! Every entry is wired from the same [AffixMorpher](crate::affix::AffixMorpher)
//! and [CompositeMorpher](crate::composite::CompositeMorpher) machinery, so
//! extending the catalog to a new language means writing new tables, not
//! new code. Each entry is built once, on first use, and is safe to share
//! across threads.
//!
//! # Examples
//!
//! ```
//! use lex_morph::language;
//! use lex_morph::morph::Morpher;
//! use lex_morph::property::PropertyBundle;
//!
//! let properties = PropertyBundle::from([
//!     ("PERSON", "3"),
//!     ("COUNT", "sng"),
//!     ("TENSE", "present"),
//!     ("POLARITY", "pos"),
//! ]);
//! let morphed = language::english_verb().morph("walk", &properties).unwrap();
//! assert_eq!(morphed, "walks");
//! ```

use crate::affix::{AffixMorpher, Attachment};
use crate::composite::CompositeMorpher;
use once_cell::sync::Lazy;

static ENGLISH_VERB: Lazy<CompositeMorpher> = Lazy::new(|| {
    // Every negative-polarity row maps to the empty suffix: after a
    // negation auxiliary English uses the bare stem ("does not walk", not
    // "does not walks"). The rows are spelled out rather than collapsed;
    // the literal table is the authority on what is covered.
    let agreement = AffixMorpher::new(
        &["PERSON", "COUNT", "TENSE", "POLARITY"],
        &[
            (&["1", "sng", "present", "pos"], ""),
            (&["1", "plu", "present", "pos"], ""),
            (&["1", "sng", "perfect", "pos"], "d"),
            (&["1", "plu", "perfect", "pos"], "d"),
            (&["3", "sng", "present", "pos"], "s"),
            (&["3", "plu", "present", "pos"], ""),
            (&["3", "sng", "perfect", "pos"], "d"),
            (&["3", "plu", "perfect", "pos"], "d"),
            (&["1", "sng", "present", "neg"], ""),
            (&["1", "plu", "present", "neg"], ""),
            (&["1", "sng", "perfect", "neg"], ""),
            (&["1", "plu", "perfect", "neg"], ""),
            (&["3", "sng", "present", "neg"], ""),
            (&["3", "plu", "present", "neg"], ""),
            (&["3", "sng", "perfect", "neg"], ""),
            (&["3", "plu", "perfect", "neg"], ""),
        ],
        Attachment::Suffix,
    );
    let negation = AffixMorpher::new(
        &["PERSON", "COUNT", "TENSE", "POLARITY"],
        &[
            (&["1", "sng", "present", "pos"], ""),
            (&["1", "plu", "present", "pos"], ""),
            (&["1", "sng", "perfect", "pos"], ""),
            (&["1", "plu", "perfect", "pos"], ""),
            (&["3", "sng", "present", "pos"], ""),
            (&["3", "plu", "present", "pos"], ""),
            (&["3", "sng", "perfect", "pos"], ""),
            (&["3", "plu", "perfect", "pos"], ""),
            (&["1", "sng", "present", "neg"], "do not "),
            (&["1", "plu", "present", "neg"], "do not "),
            (&["1", "sng", "perfect", "neg"], "did not "),
            (&["1", "plu", "perfect", "neg"], "did not "),
            (&["3", "sng", "present", "neg"], "does not "),
            (&["3", "plu", "present", "neg"], "do not "),
            (&["3", "sng", "perfect", "neg"], "did not "),
            (&["3", "plu", "perfect", "neg"], "did not "),
        ],
        Attachment::Prefix,
    );
    // Agreement suffix first; the negation marker attaches to the
    // already-suffixed form.
    CompositeMorpher::new(vec![Box::new(agreement), Box::new(negation)])
});

static ENGLISH_NOUN: Lazy<AffixMorpher> = Lazy::new(|| {
    AffixMorpher::new(
        &["COUNT"],
        &[(&["sng"], ""), (&["plu"], "s")],
        Attachment::Suffix,
    )
});

static JAPANESE_VERB: Lazy<AffixMorpher> = Lazy::new(|| {
    // The polite -masu conjugation does not vary with person or count, but
    // the table is keyed on them anyway so callers supply the same bundles
    // they supply everywhere else.
    AffixMorpher::new(
        &["PERSON", "COUNT", "TENSE"],
        &[
            (&["1", "sng", "present"], "masu"),
            (&["1", "plu", "present"], "masu"),
            (&["1", "sng", "perfect"], "mashita"),
            (&["1", "plu", "perfect"], "mashita"),
            (&["3", "sng", "present"], "masu"),
            (&["3", "plu", "present"], "masu"),
            (&["3", "sng", "perfect"], "mashita"),
            (&["3", "plu", "perfect"], "mashita"),
        ],
        Attachment::Suffix,
    )
});

/// Conjugates an English verb stem for `PERSON` (`1`, `3`), `COUNT`
/// (`sng`, `plu`), `TENSE` (`present`, `perfect`), and `POLARITY` (`pos`,
/// `neg`). Negative forms come out as a negation auxiliary plus the bare
/// stem, e.g. "does not walk".
pub fn english_verb() -> &'static CompositeMorpher {
    &ENGLISH_VERB
}

/// Declines an English noun stem for `COUNT` (`sng`, `plu`).
pub fn english_noun() -> &'static AffixMorpher {
    &ENGLISH_NOUN
}

/// Conjugates a Japanese verb stem in the polite form for `PERSON` (`1`,
/// `3`), `COUNT` (`sng`, `plu`), and `TENSE` (`present`, `perfect`).
pub fn japanese_verb() -> &'static AffixMorpher {
    &JAPANESE_VERB
}
