//! Record output configuration.

use serde::{Deserialize, Serialize};

/// Controls which optional columns appear in per-message records.
///
/// Author and body are always written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Include timestamps (default: true)
    pub include_timestamps: bool,
    /// Include the source line span (default: false)
    pub include_lines: bool,
    /// Include the placeholder tag for deleted/media bodies (default: false)
    pub include_placeholders: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            include_lines: false,
            include_placeholders: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Author and body only.
    pub fn minimal() -> Self {
        Self {
            include_timestamps: false,
            include_lines: false,
            include_placeholders: false,
        }
    }

    /// Every optional column.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_lines: true,
            include_placeholders: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    #[must_use]
    pub fn with_lines(mut self, include: bool) -> Self {
        self.include_lines = include;
        self
    }

    #[must_use]
    pub fn with_placeholders(mut self, include: bool) -> Self {
        self.include_placeholders = include;
        self
    }
}
