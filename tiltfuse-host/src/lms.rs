//! Per-sample adaptive LMS filter
//!
//! ```text
//! x = [x_n, x_{n-1}, …, x_{n-M+1}]   (noisy, newest first)
//! y = w · x
//! e = d_n − y                         (d = clean reference)
//! w ← w + 2·μ·e·x
//! ```
//!
//! Until `M` noisy samples have been seen the filter passes the newest one
//! through unchanged. Weights are not regularized; a large `μ` on large
//! inputs diverges.

use std::collections::VecDeque;

use crate::{HostError, HostResult};

/// Adaptive least-mean-squares FIR filter
#[derive(Debug, Clone)]
pub struct LmsFilter {
    weights: Vec<f32>,
    history: VecDeque<f32>,
    learning_rate: f32,
}

impl LmsFilter {
    pub const DEFAULT_ORDER: usize = 10;
    pub const DEFAULT_LEARNING_RATE: f32 = 0.001;

    pub fn new(order: usize, learning_rate: f32) -> HostResult<Self> {
        if order == 0 {
            return Err(HostError::Config("LMS order must be at least 1".into()));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(HostError::Config(format!(
                "LMS learning rate must be positive, got {}",
                learning_rate
            )));
        }
        Ok(Self {
            weights: vec![0.0; order],
            history: VecDeque::with_capacity(order),
            learning_rate,
        })
    }

    pub fn order(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Filter one noisy sample against its clean reference
    pub fn filter(&mut self, noisy: f32, reference: f32) -> f32 {
        if self.history.len() == self.order() {
            self.history.pop_back();
        }
        self.history.push_front(noisy);

        if self.history.len() < self.order() {
            return noisy;
        }

        let output: f32 = self
            .weights
            .iter()
            .zip(&self.history)
            .map(|(w, x)| w * x)
            .sum();
        let step = 2.0 * self.learning_rate * (reference - output);
        for (w, x) in self.weights.iter_mut().zip(&self.history) {
            *w += step * x;
        }
        output
    }

    /// Zero the weights and forget the history
    pub fn reset(&mut self) {
        self.weights.iter_mut().for_each(|w| *w = 0.0);
        self.history.clear();
    }
}

impl Default for LmsFilter {
    fn default() -> Self {
        Self {
            weights: vec![0.0; Self::DEFAULT_ORDER],
            history: VecDeque::with_capacity(Self::DEFAULT_ORDER),
            learning_rate: Self::DEFAULT_LEARNING_RATE,
        }
    }
}
