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

//! # Statistical Comparison Module
//!
//! Four standard group-comparison tests, applied uniformly to any pair of
//! columns:
//!
//! | Operation | Test | Statistic |
//! |-----------|------|-----------|
//! | [`compare_two_groups`] | Welch's two-sample t-test | t |
//! | [`compare_multi_groups`] | One-way ANOVA | F |
//! | [`correlate`] | Pearson correlation | r |
//! | [`test_association`] | Chi-square test of independence | chi-square |
//!
//! Every operation is pure. Shape and size preconditions are checked before
//! anything is computed and violations are returned as [`XinError`] values;
//! a result never contains NaN.
//!
//! The free functions use [`XinCompareConfig::default`] (alpha = 0.05).
//! [`XinComparator`] carries a custom configuration and can also resolve
//! columns from a [`XinDataset`] through a [`XinGroupSpec`].
//!
//! ```rust
//! use xin::compare::{compare_two_groups, correlate};
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0];
//! let groups = ["a", "a", "a", "a", "a", "b", "b", "b", "b", "b"];
//! let result = compare_two_groups(&values, &groups, &"a", &"b")?;
//! assert!(result.significant);
//!
//! let r = correlate(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
//! assert_eq!(r.r, 1.0);
//! # Ok::<(), xin::XinError>(())
//! ```

pub mod association;
pub mod correlation;
pub mod descriptive;
pub mod multi_groups;
pub mod result;
pub mod tails;
pub mod two_groups;

use std::fmt::Display;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analysis::{XinAnalysis, XinGroupSpec};
use crate::config::XinCompareConfig;
use crate::dataset::XinDataset;
use crate::errors::{Result, XinError};

pub use association::contingency_table;
pub use result::{
    XinAssociationResult, XinComparisonResult, XinContingencyTable, XinCorrelationResult,
    XinMultiGroupResult, XinTestKind, XinTwoGroupResult,
};

/// Runs comparisons under one configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XinComparator {
    config: XinCompareConfig,
}

impl XinComparator {
    /// Creates a comparator, rejecting a configuration `build()` would reject.
    pub fn new(config: XinCompareConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &XinCompareConfig {
        &self.config
    }

    /// Welch's t-test of `values` between `label_a` and `label_b`.
    pub fn compare_two_groups<L>(
        &self,
        values: &[f64],
        group_labels: &[L],
        label_a: &L,
        label_b: &L,
    ) -> Result<XinTwoGroupResult>
    where
        L: PartialEq + Display,
    {
        two_groups::welch_t_test(values, group_labels, label_a, label_b, &self.config)
    }

    /// One-way ANOVA of `values` across the groups named in `labels`,
    /// in that order.
    pub fn compare_multi_groups<L>(
        &self,
        values: &[f64],
        group_labels: &[L],
        labels: &[L],
    ) -> Result<XinMultiGroupResult>
    where
        L: PartialEq + Display,
    {
        multi_groups::one_way_anova(values, group_labels, labels, &self.config)
    }

    /// Pearson correlation between row-paired columns.
    pub fn correlate(&self, values_x: &[f64], values_y: &[f64]) -> Result<XinCorrelationResult> {
        correlation::pearson(values_x, values_y, &self.config)
    }

    /// Cross-tabulates two categorical columns and tests independence.
    pub fn test_association<X, Y>(
        &self,
        categorical_x: &[X],
        categorical_y: &[Y],
    ) -> Result<XinAssociationResult>
    where
        X: Ord + Display,
        Y: Ord + Display,
    {
        let table = association::contingency_table(categorical_x, categorical_y)?;
        self.test_contingency_table(table)
    }

    /// Chi-square test over counts that were tabulated elsewhere.
    pub fn test_contingency_table(
        &self,
        table: XinContingencyTable,
    ) -> Result<XinAssociationResult> {
        association::chi_square_independence(table, &self.config)
    }

    /// Resolves the columns named by `spec` in `dataset` and runs the
    /// matching test.
    pub fn run(&self, dataset: &XinDataset, spec: &XinGroupSpec) -> Result<XinComparisonResult> {
        let result: XinComparisonResult = match spec {
            XinGroupSpec::Binary {
                value_column,
                group_column,
                label_a,
                label_b,
            } => {
                let values = dataset.numeric(value_column)?;
                let groups = dataset.labels(group_column)?;
                self.compare_two_groups(values, &groups[..], label_a, label_b)?
                    .into()
            }
            XinGroupSpec::MultiGroup {
                value_column,
                group_column,
                labels,
            } => {
                let values = dataset.numeric(value_column)?;
                let groups = dataset.labels(group_column)?;
                self.compare_multi_groups(values, &groups[..], labels.as_slice())?
                    .into()
            }
            XinGroupSpec::Paired { x_column, y_column } => {
                let x = dataset.numeric(x_column)?;
                let y = dataset.numeric(y_column)?;
                self.correlate(x, y)?.into()
            }
            XinGroupSpec::Contingency {
                row_column,
                column_column,
            } => {
                let rows = dataset.labels(row_column)?;
                let cols = dataset.labels(column_column)?;
                self.test_association(&rows[..], &cols[..])?.into()
            }
        };
        Ok(result)
    }

    /// Runs one catalogued survey analysis. Schema errors are prefixed
    /// with the analysis title.
    pub fn run_analysis(
        &self,
        dataset: &XinDataset,
        analysis: XinAnalysis,
    ) -> Result<XinComparisonResult> {
        self.run(dataset, &analysis.group_spec())
            .map_err(|err| annotate(analysis, err))
    }

    /// Runs independent comparisons, in parallel when the `parallel`
    /// feature is enabled. Results keep the order of `specs`.
    pub fn run_many(
        &self,
        dataset: &XinDataset,
        specs: &[XinGroupSpec],
    ) -> Vec<Result<XinComparisonResult>> {
        #[cfg(feature = "parallel")]
        {
            specs.par_iter().map(|spec| self.run(dataset, spec)).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            specs.iter().map(|spec| self.run(dataset, spec)).collect()
        }
    }
}

// Schema errors name the analysis so a front end can point at the section.
fn annotate(analysis: XinAnalysis, err: XinError) -> XinError {
    match err {
        XinError::Schema { message } => {
            XinError::schema(format!("{}: {}", analysis.title(), message))
        }
        other => other,
    }
}

/// Welch's t-test between two labelled groups under the default
/// configuration.
pub fn compare_two_groups<L>(
    values: &[f64],
    group_labels: &[L],
    label_a: &L,
    label_b: &L,
) -> Result<XinTwoGroupResult>
where
    L: PartialEq + Display,
{
    XinComparator::default().compare_two_groups(values, group_labels, label_a, label_b)
}

/// One-way ANOVA across `labels` under the default configuration.
pub fn compare_multi_groups<L>(
    values: &[f64],
    group_labels: &[L],
    labels: &[L],
) -> Result<XinMultiGroupResult>
where
    L: PartialEq + Display,
{
    XinComparator::default().compare_multi_groups(values, group_labels, labels)
}

/// Pearson correlation under the default configuration.
pub fn correlate(values_x: &[f64], values_y: &[f64]) -> Result<XinCorrelationResult> {
    XinComparator::default().correlate(values_x, values_y)
}

/// Chi-square test of independence under the default configuration.
pub fn test_association<X, Y>(categorical_x: &[X], categorical_y: &[Y]) -> Result<XinAssociationResult>
where
    X: Ord + Display,
    Y: Ord + Display,
{
    XinComparator::default().test_association(categorical_x, categorical_y)
}
