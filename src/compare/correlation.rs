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

//! # Xin Correlation Module
//!
//! Pearson's product-moment correlation between two row-paired numeric
//! columns, plus the least-squares moments shared with the regression line
//! drawn next to a scatter plot.

use crate::compare::descriptive::{ensure_finite, ensure_same_len, mean};
use crate::compare::result::XinCorrelationResult;
use crate::compare::tails::student_t_two_tailed;
use crate::config::XinCompareConfig;
use crate::errors::{Result, XinError};

const MIN_PAIRS: usize = 3;

/// Centered second moments of a paired sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PairedMoments {
    pub n: usize,
    pub mean_x: f64,
    pub mean_y: f64,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

impl PairedMoments {
    /// Checks the shared preconditions (equal lengths, at least three pairs,
    /// finite values, neither column constant) and accumulates the moments.
    pub(crate) fn compute(values_x: &[f64], values_y: &[f64]) -> Result<Self> {
        ensure_same_len(values_x.len(), values_y.len())?;
        let n = values_x.len();
        if n < MIN_PAIRS {
            return Err(XinError::insufficient_data(format!(
                "correlation needs at least {} pairs, got {}",
                MIN_PAIRS, n
            )));
        }
        ensure_finite(values_x, "x values")?;
        ensure_finite(values_y, "y values")?;

        let mean_x = mean(values_x);
        let mean_y = mean(values_y);

        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for (x, y) in values_x.iter().zip(values_y) {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }

        if sxx <= 0.0 || syy <= 0.0 {
            return Err(XinError::insufficient_data(
                "correlation is undefined for a constant column",
            ));
        }

        Ok(Self {
            n,
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        })
    }

    /// Least-squares slope of y on x.
    pub(crate) fn slope(&self) -> f64 {
        self.sxy / self.sxx
    }

    fn swapped(&self) -> Self {
        Self {
            mean_x: self.mean_y,
            mean_y: self.mean_x,
            sxx: self.syy,
            syy: self.sxx,
            ..*self
        }
    }

    /// True when every y lies on the fitted line up to rounding of the
    /// inputs, i.e. the relation is exactly linear.
    fn is_exactly_linear(&self, values_x: &[f64], values_y: &[f64]) -> bool {
        let slope = self.slope();
        let tolerance = 4.0 * self.n as f64 * f64::EPSILON;
        values_x.iter().zip(values_y).all(|(x, y)| {
            let residual = (y - self.mean_y) - slope * (x - self.mean_x);
            let scale = y.abs() + self.mean_y.abs() + slope.abs() * (x.abs() + self.mean_x.abs());
            residual.abs() <= tolerance * scale
        })
    }
}

/// Pearson's r between row-paired columns, with the two-tailed t-test of
/// zero correlation on `n - 2` degrees of freedom.
pub fn pearson(
    values_x: &[f64],
    values_y: &[f64],
    config: &XinCompareConfig,
) -> Result<XinCorrelationResult> {
    let moments = PairedMoments::compute(values_x, values_y)?;
    let n = moments.n;

    // Rounding leaves r a few ulps short of +-1 for exact linear relations.
    let exactly_linear = moments.is_exactly_linear(values_x, values_y)
        && moments.swapped().is_exactly_linear(values_y, values_x);
    let r = if exactly_linear {
        moments.sxy.signum()
    } else {
        (moments.sxy / (moments.sxx * moments.syy).sqrt()).clamp(-1.0, 1.0)
    };
    let df = (n - 2) as f64;
    let p_value = if r.abs() >= 1.0 {
        0.0
    } else {
        let t = r * (df / (1.0 - r * r)).sqrt();
        student_t_two_tailed(t, df)?
    };

    log::debug!("pearson correlation over {} pairs: r={:.4}, p={:.6}", n, r, p_value);

    Ok(XinCorrelationResult {
        r,
        p_value,
        significant: config.is_significant(p_value),
        n,
    })
}
