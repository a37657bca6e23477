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

//! # Xin Multi-Group Module
//!
//! One-way ANOVA across three or more groups.

use std::fmt::Display;

use crate::compare::descriptive::{ensure_finite, ensure_same_len, mean, partition, sum_of_squares};
use crate::compare::result::XinMultiGroupResult;
use crate::compare::tails::fisher_upper_tail;
use crate::config::XinCompareConfig;
use crate::errors::{Result, XinError};

const MIN_GROUPS: usize = 3;

/// One-way ANOVA across the partitions named by `labels`.
///
/// Rows whose label is not listed are ignored. `group_means` in the result is
/// aligned with `labels`.
pub fn one_way_anova<L>(
    values: &[f64],
    group_labels: &[L],
    labels: &[L],
    config: &XinCompareConfig,
) -> Result<XinMultiGroupResult>
where
    L: PartialEq + Display,
{
    ensure_same_len(values.len(), group_labels.len())?;
    ensure_finite(values, "values")?;
    if labels.len() < MIN_GROUPS {
        return Err(XinError::validation(format!(
            "one-way ANOVA needs at least {} groups, got {}",
            MIN_GROUPS,
            labels.len()
        )));
    }
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            return Err(XinError::validation(format!(
                "group '{}' requested more than once",
                label
            )));
        }
    }

    let mut groups = Vec::with_capacity(labels.len());
    for label in labels {
        let group = partition(values, group_labels, label);
        if group.is_empty() {
            return Err(XinError::invalid_group_label(label));
        }
        groups.push(group);
    }

    let total: usize = groups.iter().map(Vec::len).sum();
    let k = groups.len();
    if total <= k {
        return Err(XinError::insufficient_data(format!(
            "{} observations across {} groups leave no within-group degrees of freedom",
            total, k
        )));
    }

    let group_means: Vec<f64> = groups.iter().map(|g| mean(g)).collect();
    let grand_mean = groups.iter().flatten().sum::<f64>() / total as f64;

    let ss_between: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, m)| g.len() as f64 * (m - grand_mean).powi(2))
        .sum();
    let ss_within: f64 = groups
        .iter()
        .zip(&group_means)
        .map(|(g, m)| sum_of_squares(g, *m))
        .sum();

    if ss_within <= 0.0 {
        return Err(XinError::insufficient_data(
            "every group has zero variance, the F statistic is undefined",
        ));
    }

    let df_between = k - 1;
    let df_within = total - k;
    let f_statistic = (ss_between / df_between as f64) / (ss_within / df_within as f64);
    let p_value = fisher_upper_tail(f_statistic, df_between as f64, df_within as f64)?;

    log::debug!(
        "one-way ANOVA over {} groups (n={}): F={:.4}, df=({}, {}), p={:.6}",
        k,
        total,
        f_statistic,
        df_between,
        df_within,
        p_value
    );

    Ok(XinMultiGroupResult {
        f_statistic,
        p_value,
        significant: config.is_significant(p_value),
        labels: labels.iter().map(ToString::to_string).collect(),
        group_means,
        group_sizes: groups.iter().map(Vec::len).collect(),
        df_between,
        df_within,
    })
}
