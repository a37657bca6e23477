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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Result, XinError};

/// Settings shared by every comparison a [`crate::compare::XinComparator`]
/// runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinCompareConfig {
    /// Significance level; a result is significant when `p_value < alpha`.
    pub alpha: f64,
    /// Expected cell frequency below which a chi-square result carries
    /// `low_expected_frequency_warning`.
    pub min_expected_frequency: f64,
    /// Apply Yates' continuity correction to tables with one degree of
    /// freedom.
    pub yates_correction: bool,
}

impl Default for XinCompareConfig {
    fn default() -> Self {
        XinCompareConfig {
            alpha: 0.05,
            min_expected_frequency: 5.0,
            yates_correction: false,
        }
    }
}

impl XinCompareConfig {
    pub fn is_significant(&self, p_value: f64) -> bool {
        p_value < self.alpha
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(XinError::validation(format!(
                "alpha must lie in (0, 1), got {}",
                self.alpha
            )));
        }
        if !(self.min_expected_frequency >= 0.0) || !self.min_expected_frequency.is_finite() {
            return Err(XinError::validation(format!(
                "min_expected_frequency must be a finite non-negative number, got {}",
                self.min_expected_frequency
            )));
        }
        Ok(())
    }
}

/// Partial configuration; unset fields fall back to
/// [`XinCompareConfig::default`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct XinCompareConfigBuilder {
    pub alpha: Option<f64>,
    pub min_expected_frequency: Option<f64>,
    pub yates_correction: Option<bool>,
}

impl XinCompareConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = Some(alpha);
        self
    }

    pub fn min_expected_frequency(mut self, threshold: f64) -> Self {
        self.min_expected_frequency = Some(threshold);
        self
    }

    pub fn yates_correction(mut self, enabled: bool) -> Self {
        self.yates_correction = Some(enabled);
        self
    }

    pub fn build(self) -> Result<XinCompareConfig> {
        let base = XinCompareConfig::default();
        let config = XinCompareConfig {
            alpha: self.alpha.unwrap_or(base.alpha),
            min_expected_frequency: self
                .min_expected_frequency
                .unwrap_or(base.min_expected_frequency),
            yates_correction: self.yates_correction.unwrap_or(base.yates_correction),
        };
        config.validate()?;
        Ok(config)
    }

    /// Builds a configuration from a JSON object such as
    /// `{"alpha": 0.01, "yates_correction": true}`.
    pub fn from_json(value: &Value) -> Result<XinCompareConfig> {
        if !value.is_object() {
            return Err(XinError::validation("compare config must be an object"));
        }
        let builder: XinCompareConfigBuilder = serde_json::from_value(value.clone())?;
        builder.build()
    }
}
