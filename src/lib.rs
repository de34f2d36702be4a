//! Deterministic string analysis engine.
//!
//! `string-analysis` normalizes arbitrary text, computes a fixed property set
//! for it (length, palindrome flag, distinct characters, word count, SHA-256
//! content hash, character frequencies), stores one record per distinct
//! normalized value, and answers structured or heuristic free-text filter
//! queries over what it holds. All analysis is deterministic: identical
//! normalized inputs always produce identical properties and ids.
//!
//! The [`server`] module wraps the engine in a small HTTP API.

pub mod analysis;
pub mod engine;
pub mod filter;
pub mod interpret;
pub mod server;
pub mod store;
pub mod types;

pub use engine::{AnalysisEngine, EngineError};
