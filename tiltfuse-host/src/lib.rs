//! Host-side Consumer for the TiltFuse Report Stream
//!
//! ## Overview
//!
//! The firmware prints one report per interval on its serial console:
//!
//! ```text
//! 1.23, -0.45\r\n
//! , 1.31, -0.52\r\n
//! ```
//!
//! This crate turns that text back into records and runs an adaptive LMS
//! filter over the noisy channel, using the clean channel as the reference
//! signal, so the two can be compared downstream.
//!
//! ## Modules
//!
//! - [`telemetry`]: line parsing and two-line report reassembly
//! - [`lms`]: per-sample least-mean-squares filter
//! - [`denoise`]: one LMS filter per axis plus a rolling window
//!
//! Opening the serial port and plotting are left to the caller; anything
//! implementing `BufRead` can be fed to [`RecordReader`].
//!
//! ## Example Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use tiltfuse_host::{AdaptiveDenoiser, RecordReader};
//!
//! let console = "1.00, 2.00\r\n, 1.10, 2.20\r\n1.00, 2.00\r\n, 0.90, 1.80\r\n";
//! let mut denoiser = AdaptiveDenoiser::new();
//!
//! for record in RecordReader::new(Cursor::new(console)) {
//!     let filtered = denoiser.push(record?);
//!     println!("{}", filtered.to_json_line()?);
//! }
//! assert_eq!(denoiser.window().len(), 2);
//! # Ok::<(), tiltfuse_host::HostError>(())
//! ```

pub mod denoise;
pub mod lms;
pub mod telemetry;

pub use denoise::{AdaptiveDenoiser, FilteredRecord, WindowRms};
pub use lms::LmsFilter;
pub use telemetry::{parse_record, RecordReader, ReportAssembler, TiltRecord};

use thiserror::Error;

/// Host consumer errors
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Malformed line {line:?}: {reason}")]
    Parse { line: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HostError {
    pub(crate) fn parse(line: &str, reason: impl Into<String>) -> Self {
        HostError::Parse {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for host operations
pub type HostResult<T> = Result<T, HostError>;
