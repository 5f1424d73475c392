//! Computed value extraction from reference-program output
//!
//! The reference computation emits either a structured export stream
//! (`<bar_index> <v1> ... <vk>`, one line per bar) or an annotated free-form
//! log with per-indicator sections. Both shapes extract into the same
//! bar-indexed series the aligner produces, so the comparison engine never
//! knows which one it is looking at.
//!
//! - [`export_stream`] - direct positional parse of export lines
//! - [`log_scan`] - two-state scanner over annotated log text

pub mod export_stream;
pub mod log_scan;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use export_stream::ExportStreamParser;
pub use log_scan::LogScanner;

use serde::{Deserialize, Serialize};

/// Statistics for one extraction pass
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractStats {
    /// Lines read from the source
    pub lines_read: usize,

    /// Lines that contributed values
    pub lines_applied: usize,

    /// Lines that looked like data but could not be applied
    /// (wrong field count or unparsable bar index)
    pub lines_dropped: usize,

    /// Entries dropped because the bar index fell outside the primary range
    pub out_of_range: usize,

    /// Indicator sections entered (annotated log only)
    pub sections: usize,
}
