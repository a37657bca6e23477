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

//! # Xin Result Module
//!
//! Serializable results of the four tests and the tagged union a front end
//! receives from a comparator run.

use serde::{Deserialize, Serialize};

/// Which of the four tests produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XinTestKind {
    TwoSample,
    MultiGroup,
    Correlation,
    Association,
}

/// Welch's two-sample t-test.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinTwoGroupResult {
    pub t_statistic: f64,
    pub p_value: f64,
    pub significant: bool,
    pub mean_a: f64,
    pub mean_b: f64,
    /// Welch–Satterthwaite degrees of freedom.
    pub degrees_of_freedom: f64,
    pub n_a: usize,
    pub n_b: usize,
}

/// One-way ANOVA.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinMultiGroupResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub significant: bool,
    /// Group labels in the order they were requested.
    pub labels: Vec<String>,
    /// Means aligned with `labels`.
    pub group_means: Vec<f64>,
    pub group_sizes: Vec<usize>,
    pub df_between: usize,
    pub df_within: usize,
}

/// Pearson product-moment correlation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinCorrelationResult {
    pub r: f64,
    pub p_value: f64,
    pub significant: bool,
    pub n: usize,
}

/// Joint counts of two categorical variables.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinContingencyTable {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// `counts[row][column]`.
    pub counts: Vec<Vec<u64>>,
}

impl XinContingencyTable {
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    pub fn row_totals(&self) -> Vec<u64> {
        self.counts.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn column_totals(&self) -> Vec<u64> {
        let mut totals = vec![0u64; self.column_labels.len()];
        for row in &self.counts {
            for (total, count) in totals.iter_mut().zip(row) {
                *total += count;
            }
        }
        totals
    }
}

/// Pearson's chi-square test of independence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinAssociationResult {
    pub chi2_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: usize,
    pub significant: bool,
    pub table: XinContingencyTable,
    /// `expected_frequencies[row][column]` under independence.
    pub expected_frequencies: Vec<Vec<f64>>,
    /// Set when any expected cell falls below the configured minimum
    /// (5 by default); the chi-square approximation is then unreliable.
    pub low_expected_frequency_warning: bool,
    pub yates_corrected: bool,
}

/// Outcome of any comparison, tagged by test kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum XinComparisonResult {
    TwoSample(XinTwoGroupResult),
    MultiGroup(XinMultiGroupResult),
    Correlation(XinCorrelationResult),
    Association(XinAssociationResult),
}

impl XinComparisonResult {
    pub fn kind(&self) -> XinTestKind {
        match self {
            XinComparisonResult::TwoSample(_) => XinTestKind::TwoSample,
            XinComparisonResult::MultiGroup(_) => XinTestKind::MultiGroup,
            XinComparisonResult::Correlation(_) => XinTestKind::Correlation,
            XinComparisonResult::Association(_) => XinTestKind::Association,
        }
    }

    /// The test statistic: t, F, r or chi-square.
    pub fn statistic(&self) -> f64 {
        match self {
            XinComparisonResult::TwoSample(r) => r.t_statistic,
            XinComparisonResult::MultiGroup(r) => r.f_statistic,
            XinComparisonResult::Correlation(r) => r.r,
            XinComparisonResult::Association(r) => r.chi2_statistic,
        }
    }

    pub fn p_value(&self) -> f64 {
        match self {
            XinComparisonResult::TwoSample(r) => r.p_value,
            XinComparisonResult::MultiGroup(r) => r.p_value,
            XinComparisonResult::Correlation(r) => r.p_value,
            XinComparisonResult::Association(r) => r.p_value,
        }
    }

    pub fn significant(&self) -> bool {
        match self {
            XinComparisonResult::TwoSample(r) => r.significant,
            XinComparisonResult::MultiGroup(r) => r.significant,
            XinComparisonResult::Correlation(r) => r.significant,
            XinComparisonResult::Association(r) => r.significant,
        }
    }
}

impl From<XinTwoGroupResult> for XinComparisonResult {
    fn from(result: XinTwoGroupResult) -> Self {
        XinComparisonResult::TwoSample(result)
    }
}

impl From<XinMultiGroupResult> for XinComparisonResult {
    fn from(result: XinMultiGroupResult) -> Self {
        XinComparisonResult::MultiGroup(result)
    }
}

impl From<XinCorrelationResult> for XinComparisonResult {
    fn from(result: XinCorrelationResult) -> Self {
        XinComparisonResult::Correlation(result)
    }
}

impl From<XinAssociationResult> for XinComparisonResult {
    fn from(result: XinAssociationResult) -> Self {
        XinComparisonResult::Association(result)
    }
}
