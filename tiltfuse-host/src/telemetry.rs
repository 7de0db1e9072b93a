//! Report stream parsing
//!
//! Two input shapes are accepted:
//!
//! - the firmware's two-line report, reassembled by [`ReportAssembler`]
//! - a single line carrying all four values, `p, r, np, nr`
//!
//! Values are positional; labels are never present.

use std::io::{BufRead, Lines};

use serde::{Deserialize, Serialize};
use tiltfuse_core::Report;

use crate::{HostError, HostResult};

/// One report: clean and noisy pitch/roll in degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TiltRecord {
    pub pitch: f32,
    pub roll: f32,
    pub noisy_pitch: f32,
    pub noisy_roll: f32,
}

impl From<Report> for TiltRecord {
    fn from(report: Report) -> Self {
        let [pitch, roll, noisy_pitch, noisy_roll] = report.values();
        Self {
            pitch,
            roll,
            noisy_pitch,
            noisy_roll,
        }
    }
}

fn parse_values(line: &str, text: &str, expected: usize) -> HostResult<Vec<f32>> {
    let values = text
        .split(',')
        .map(|field| {
            let field = field.trim();
            field
                .parse::<f32>()
                .map_err(|e| HostError::parse(line, format!("{:?}: {}", field, e)))
        })
        .collect::<HostResult<Vec<f32>>>()?;

    if values.len() != expected {
        return Err(HostError::parse(
            line,
            format!("expected {} values, found {}", expected, values.len()),
        ));
    }
    Ok(values)
}

/// Parse a single line of four comma-separated values
pub fn parse_record(line: &str) -> HostResult<TiltRecord> {
    let values = parse_values(line, line.trim(), 4)?;
    Ok(TiltRecord {
        pitch: values[0],
        roll: values[1],
        noisy_pitch: values[2],
        noisy_roll: values[3],
    })
}

/// Stitches the firmware's two report lines back into one record
///
/// A line starting with `,` is a continuation and needs a pending first
/// line. Any malformed line drops what is pending.
#[derive(Debug, Default)]
pub struct ReportAssembler {
    pending: Option<(f32, f32)>,
}

impl ReportAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a first line is waiting for its continuation
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Feed one line; returns a record once both halves have been seen
    pub fn feed(&mut self, line: &str) -> HostResult<Option<TiltRecord>> {
        let text = line.trim();
        if text.is_empty() {
            return Ok(None);
        }

        if let Some(rest) = text.strip_prefix(',') {
            let Some((pitch, roll)) = self.pending.take() else {
                return Err(HostError::parse(line, "continuation without a first line"));
            };
            let noisy = parse_values(line, rest, 2)?;
            return Ok(Some(TiltRecord {
                pitch,
                roll,
                noisy_pitch: noisy[0],
                noisy_roll: noisy[1],
            }));
        }

        if self.pending.take().is_some() {
            log::debug!("first line without continuation dropped");
        }

        if text.matches(',').count() == 3 {
            return parse_record(text).map(Some);
        }

        let clean = parse_values(line, text, 2)?;
        self.pending = Some((clean[0], clean[1]));
        Ok(None)
    }
}

/// Iterator over the records of a line-oriented reader
///
/// Parse errors are yielded and reading continues; an I/O error is yielded
/// once and ends the iteration.
pub struct RecordReader<R> {
    lines: Lines<R>,
    assembler: ReportAssembler,
    failed: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            assembler: ReportAssembler::new(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = HostResult<TiltRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e.into()));
                }
            };

            match self.assembler.feed(&line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("{}", e);
                    return Some(Err(e));
                }
            }
        }
    }
}
