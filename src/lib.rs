// #![deny(missing_docs)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Inflect abstract word stems into surface word forms.
//!
//! This crate is the morphology component of a synthetic-language text
//! generation toolkit. A caller holds an uninflected stem and a bundle of
//! syntactic property values (person, count, tense, polarity, gender, case,
//! and so on); a [Morpher](morph::Morpher) turns that pair into the
//! inflected word a downstream sentence-generation pipeline will emit.
//!
//! Two morpher kinds cover everything so far. An
//! [AffixMorpher](affix::AffixMorpher) projects the property bundle onto a
//! fixed property-name order, looks the resulting value tuple up in an
//! immutable rule table, and attaches the affix it finds to the stem as a
//! prefix or a suffix. A [CompositeMorpher](composite::CompositeMorpher)
//! chains morphers, feeding each one's output stem to the next while every
//! step sees the same property bundle. The [language] module ships worked
//! rule sets built from these two pieces; adding a language means writing
//! new tables, not new machinery.
//!
//! The shipped rule tables are illustrative rather than linguistically
//! complete, and affixes attach by literal concatenation with no
//! phonological adjustment (no consonant doubling, no vowel elision). A
//! lookup the tables do not cover is reported as a typed error, never
//! papered over with a default affix.
//!
//! The [corpus] module carries the toolkit's line and n-gram streaming
//! helpers. They feed unrelated downstream consumers and are not read by
//! the morphology core.

pub mod affix;
pub mod composite;
pub mod corpus;
pub mod language;
pub mod morph;
pub mod property;
