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

//! # Xin Distribution Module
//!
//! Chart-ready data for the survey plots: boxplot summaries per group,
//! histograms, and the least-squares line drawn over a scatter plot.

use serde::{Deserialize, Serialize};

use crate::compare::correlation::PairedMoments;
use crate::compare::descriptive::{ensure_finite, ensure_same_len, partition};
use crate::dataset::{XinDataset, XinLabel};
use crate::errors::{Result, XinError};
use crate::inspect::profile::XinNumericSummary;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XinHistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XinHistogram {
    pub bins: Vec<XinHistogramBin>,
    pub total_count: usize,
}

/// Per-level summary of a numeric column, one box of a boxplot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinGroupSummary {
    pub label: XinLabel,
    pub summary: XinNumericSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinGroupHistogram {
    pub label: XinLabel,
    pub histogram: XinHistogram,
}

/// Least-squares line `y = intercept + slope * x` over row-paired columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinRegressionLine {
    pub slope: f64,
    pub intercept: f64,
    pub n: usize,
}

impl XinRegressionLine {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Chart-ready distributions. Nothing here is rendered; front ends draw
/// boxplots and histograms from the returned values.
pub struct XinDistribution;

impl XinDistribution {
    /// Summary of `value_column` for every level of `group_column`, in
    /// natural level order.
    pub fn group_summaries(
        dataset: &XinDataset,
        value_column: &str,
        group_column: &str,
    ) -> Result<Vec<XinGroupSummary>> {
        let values = dataset.numeric(value_column)?;
        let labels = dataset.labels(group_column)?;

        dataset
            .levels(group_column)?
            .into_iter()
            .map(|label| {
                let group = partition(values, &labels[..], &label);
                let summary = XinNumericSummary::from_values(&group).ok_or_else(|| {
                    XinError::internal(format!("level '{}' has no rows", label))
                })?;
                Ok(XinGroupSummary { label, summary })
            })
            .collect()
    }

    /// Equal-width histogram over the range of `values`. The last bin is
    /// closed so the maximum is counted.
    pub fn histogram(values: &[f64], bins: usize) -> Result<XinHistogram> {
        check_bins(bins)?;
        ensure_finite(values, "histogram values")?;
        Ok(match range_of(values) {
            Some((min, max)) => fill(values, &edges(min, max, bins)),
            None => XinHistogram::default(),
        })
    }

    /// Histograms of `values` split by `group_labels`, all sharing the bin
    /// edges of the pooled range so they can be overlaid.
    pub fn grouped_histogram(
        values: &[f64],
        group_labels: &[XinLabel],
        bins: usize,
    ) -> Result<Vec<XinGroupHistogram>> {
        check_bins(bins)?;
        ensure_same_len(values.len(), group_labels.len())?;
        ensure_finite(values, "histogram values")?;

        let (min, max) = range_of(values)
            .ok_or_else(|| XinError::insufficient_data("cannot bin an empty column"))?;
        let edges = edges(min, max, bins);

        let mut levels = group_labels.to_vec();
        levels.sort();
        levels.dedup();

        Ok(levels
            .into_iter()
            .map(|label| {
                let group = partition(values, group_labels, &label);
                XinGroupHistogram {
                    histogram: fill(&group, &edges),
                    label,
                }
            })
            .collect())
    }

    /// Ordinary least-squares fit of `values_y` on `values_x`. The inputs
    /// follow the same rules as a correlation: equal lengths, at least three
    /// pairs, finite values and no constant column.
    pub fn regression_line(values_x: &[f64], values_y: &[f64]) -> Result<XinRegressionLine> {
        let moments = PairedMoments::compute(values_x, values_y)?;
        let slope = moments.slope();
        Ok(XinRegressionLine {
            slope,
            intercept: moments.mean_y - slope * moments.mean_x,
            n: moments.n,
        })
    }

    /// Regression line of `y_column` on `x_column`, both read as numeric.
    pub fn paired_regression(
        dataset: &XinDataset,
        x_column: &str,
        y_column: &str,
    ) -> Result<XinRegressionLine> {
        Self::regression_line(dataset.numeric(x_column)?, dataset.numeric(y_column)?)
    }
}

fn check_bins(bins: usize) -> Result<()> {
    if bins == 0 {
        return Err(XinError::validation("histogram needs at least one bin"));
    }
    Ok(())
}

fn range_of(values: &[f64]) -> Option<(f64, f64)> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    Some((min, max))
}

fn edges(min: f64, max: f64, bins: usize) -> Vec<f64> {
    if max == min {
        return vec![min, max];
    }
    let width = (max - min) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| min + i as f64 * width).collect();
    edges.push(max);
    edges
}

fn fill(values: &[f64], edges: &[f64]) -> XinHistogram {
    let bin_count = edges.len() - 1;
    let mut bins: Vec<XinHistogramBin> = edges
        .windows(2)
        .map(|w| XinHistogramBin {
            start: w[0],
            end: w[1],
            ..XinHistogramBin::default()
        })
        .collect();

    let min = edges[0];
    let max = edges[bin_count];
    let width = (max - min) / bin_count as f64;
    for value in values {
        let idx = if width > 0.0 {
            (((value - min) / width) as usize).min(bin_count - 1)
        } else {
            0
        };
        bins[idx].count += 1;
    }

    let total_count = values.len();
    if total_count > 0 {
        for bin in &mut bins {
            bin.percentage = bin.count as f64 * 100.0 / total_count as f64;
        }
    }

    XinHistogram { bins, total_count }
}
