//! The Netra statistical engine.
//!
//! Profiles a [`Frame`](netra_core::Frame) in three passes:
//!
//! 1. scalar statistics (null counts, distinct counts, moments, quantiles),
//! 2. histograms, which degrade to `_meta` warnings instead of failing the
//!    report,
//! 3. top-k frequent values.
//!
//! Pearson and Spearman correlation matrices are computed over the numeric
//! columns. The result serializes to the flat profile map documented on
//! [`flat::to_flat_json`].

pub mod correlation;
pub mod engine;
pub mod error;
pub mod flat;
pub mod histogram;
pub mod model;
pub mod stats;
pub mod topk;

pub use engine::ProfileEngine;
pub use error::{ProfileError, Result};
pub use flat::to_flat_json;
pub use model::{
    ColumnProfile, ColumnStats, Correlations, HistogramBin, NumericStats, Profile, ProfileMeta,
    ProfileOptions, TextStats, TopEntry,
};
