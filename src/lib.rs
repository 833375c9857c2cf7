//! Writing analytics for free-form documents.
//!
//! Text goes through [`engine::tokens`] and then any of the scorers in
//! [`engine`]; the chart adapters turn results into plain records for an
//! external renderer. Nothing in the engine keeps state between calls.

pub mod app;
pub mod engine;
pub mod input;
pub mod repl;
