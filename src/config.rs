//! Configuration for gap analysis.
//!
//! The transform itself is a pure function with a fixed weight table; the only
//! tunable behavior is how unrecognized file identifiers are treated.

use serde::{Deserialize, Serialize};

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Fail with [`crate::Error::UnknownSourceFile`] when the file identifier
    /// is outside the known TESDA publication set (indices 0-8).
    ///
    /// When false (the default), unrecognized identifiers silently fall back
    /// to the regional layout, matching the behavior of the published source
    /// data pipeline.
    pub strict_source_index: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strict_source_index: false,
        }
    }
}

impl AnalysisConfig {
    /// Configuration that rejects unrecognized file identifiers
    pub fn strict() -> Self {
        Self {
            strict_source_index: true,
        }
    }
}
