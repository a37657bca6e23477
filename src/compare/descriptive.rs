//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Xin.
//! The Xin project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! Moment and order statistics shared by the tests and the inspectors.

use std::fmt::Display;

use crate::errors::{Result, XinError};

/// Arithmetic mean. Returns `0.0` for an empty slice; callers check sizes
/// first.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sum of squared deviations from the mean.
pub fn sum_of_squares(values: &[f64], mean: f64) -> f64 {
    values.iter().map(|x| (x - mean).powi(2)).sum()
}

/// Unbiased sample variance (`n - 1` denominator).
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    sum_of_squares(values, mean(values)) / (values.len() - 1) as f64
}

/// Linearly interpolated quantile of ascending `sorted` values, `q` in
/// `[0, 1]`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let weight = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * weight
        }
    }
}

pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Collects the values whose parallel label equals `label`.
pub(crate) fn partition<L: PartialEq>(values: &[f64], labels: &[L], label: &L) -> Vec<f64> {
    values
        .iter()
        .zip(labels)
        .filter(|(_, l)| *l == label)
        .map(|(v, _)| *v)
        .collect()
}

pub(crate) fn ensure_same_len(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(XinError::dimension_mismatch(left, right));
    }
    Ok(())
}

pub(crate) fn ensure_finite(values: &[f64], what: impl Display) -> Result<()> {
    if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
        return Err(XinError::validation(format!(
            "{} contains a non-finite value at position {}",
            what, pos
        )));
    }
    Ok(())
}

/// Clamps a tail probability into `[0, 1]`.
pub(crate) fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        1.0
    } else {
        p.clamp(0.0, 1.0)
    }
}
