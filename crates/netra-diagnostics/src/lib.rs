//! Diagnostic rules for Netra Profiler.
//!
//! A pure logic layer: it reads a finished [`Profile`](netra_profile::Profile)
//! and emits [`Alert`] records. It never touches the underlying data.

pub mod config;
pub mod engine;
pub mod model;

pub use config::DiagnosticConfig;
pub use engine::DiagnosticEngine;
pub use model::{Alert, AlertLevel};
