//! Core contracts and helpers for Netra Profiler.
//!
//! This crate defines the canonical in-memory columnar model shared by the
//! ingestion layer, the statistical engine, and the CLI.

pub mod error;
pub mod frame;
pub mod value;

pub use error::{CoreError, Result};
pub use frame::{Column, ColumnData, DType, Frame};
pub use value::Value;

/// Current contract version for the flat profile map emitted under `_meta`.
pub const PROFILE_VERSION: &str = "0.1";
