//! Groupie Tracker
//!
//! A small web site over a public catalog of music artists: a home page
//! listing every artist, free-text search with live suggestions, a
//! structured filter and per-artist concert pages. The catalog is fetched
//! from an upstream JSON API and held as an immutable snapshot that is
//! swapped atomically on every reload.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod render;
pub mod search;
pub mod state;
pub mod upstream;

pub use error::{AppError, Result};
