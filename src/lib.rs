//! Sentencer — mad-libs style sentence templating.
//!
//! Scans a template for `{{ placeholder }}` tokens and substitutes each with
//! the output of a registered generator action, with optional literal
//! arguments and word-list derived actions (direct selection, article-prefixed
//! selection, pluralized selection). Placeholder contents are parsed, never
//! evaluated.

pub mod core;
pub mod english;
pub mod schema;
