// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod api;
pub mod classify;
pub mod config;
pub mod decision;
pub mod engine;
pub mod history;
pub mod lexicon;
pub mod reading;
pub mod sentiment;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::api::create_router;
pub use crate::decision::{Analysis, Sentiment};
pub use crate::engine::analyze;
