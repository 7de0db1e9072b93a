//! Adaptive denoising of the noisy channel
//!
//! Pitch and roll each get their own [`LmsFilter`], trained on the clean
//! values of the same record. The last [`AdaptiveDenoiser::DEFAULT_WINDOW`]
//! results are kept for display and summary statistics.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::lms::LmsFilter;
use crate::telemetry::TiltRecord;
use crate::{HostError, HostResult};

/// A record with its LMS-filtered noisy values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilteredRecord {
    #[serde(flatten)]
    pub record: TiltRecord,
    pub filtered_pitch: f32,
    pub filtered_roll: f32,
}

impl FilteredRecord {
    /// One JSON object, no trailing newline
    pub fn to_json_line(&self) -> HostResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// RMS error against the clean channel over the current window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowRms {
    pub noisy_pitch: f32,
    pub filtered_pitch: f32,
    pub noisy_roll: f32,
    pub filtered_roll: f32,
}

pub struct AdaptiveDenoiser {
    pitch: LmsFilter,
    roll: LmsFilter,
    window: VecDeque<FilteredRecord>,
    capacity: usize,
}

impl AdaptiveDenoiser {
    pub const DEFAULT_WINDOW: usize = 50;

    pub fn new() -> Self {
        Self {
            pitch: LmsFilter::default(),
            roll: LmsFilter::default(),
            window: VecDeque::with_capacity(Self::DEFAULT_WINDOW),
            capacity: Self::DEFAULT_WINDOW,
        }
    }

    pub fn with_params(order: usize, learning_rate: f32, window: usize) -> HostResult<Self> {
        if window == 0 {
            return Err(HostError::Config("window must hold at least one record".into()));
        }
        Ok(Self {
            pitch: LmsFilter::new(order, learning_rate)?,
            roll: LmsFilter::new(order, learning_rate)?,
            window: VecDeque::with_capacity(window),
            capacity: window,
        })
    }

    pub fn push(&mut self, record: TiltRecord) -> FilteredRecord {
        let filtered = FilteredRecord {
            record,
            filtered_pitch: self.pitch.filter(record.noisy_pitch, record.pitch),
            filtered_roll: self.roll.filter(record.noisy_roll, record.roll),
        };

        if self.window.len() == self.capacity {
            self.window.pop_front();
        }
        self.window.push_back(filtered);
        filtered
    }

    /// Most recent results, oldest first
    pub fn window(&self) -> &VecDeque<FilteredRecord> {
        &self.window
    }

    pub fn window_rms(&self) -> Option<WindowRms> {
        if self.window.is_empty() {
            return None;
        }
        let n = self.window.len() as f32;
        let rms = |f: fn(&FilteredRecord) -> f32| {
            (self.window.iter().map(|r| f(r).powi(2)).sum::<f32>() / n).sqrt()
        };

        Some(WindowRms {
            noisy_pitch: rms(|r| r.record.noisy_pitch - r.record.pitch),
            filtered_pitch: rms(|r| r.filtered_pitch - r.record.pitch),
            noisy_roll: rms(|r| r.record.noisy_roll - r.record.roll),
            filtered_roll: rms(|r| r.filtered_roll - r.record.roll),
        })
    }

    pub fn reset(&mut self) {
        self.pitch.reset();
        self.roll.reset();
        self.window.clear();
    }
}

impl Default for AdaptiveDenoiser {
    fn default() -> Self {
        Self::new()
    }
}
