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

//! # Xin Two-Group Module
//!
//! Welch's unequal-variance t-test between two labelled groups of one
//! numeric column.

use std::fmt::Display;

use crate::compare::descriptive::{ensure_finite, ensure_same_len, mean, partition, sample_variance};
use crate::compare::result::XinTwoGroupResult;
use crate::compare::tails::student_t_two_tailed;
use crate::config::XinCompareConfig;
use crate::errors::{Result, XinError};

const MIN_GROUP_SIZE: usize = 2;

/// Welch's unequal-variance t-test between the rows labelled `label_a` and
/// the rows labelled `label_b`.
///
/// Degrees of freedom follow the Welch–Satterthwaite approximation and the
/// p-value is two-tailed. The statistic is positive when group A has the
/// larger mean.
pub fn welch_t_test<L>(
    values: &[f64],
    group_labels: &[L],
    label_a: &L,
    label_b: &L,
    config: &XinCompareConfig,
) -> Result<XinTwoGroupResult>
where
    L: PartialEq + Display,
{
    ensure_same_len(values.len(), group_labels.len())?;
    ensure_finite(values, "values")?;
    if label_a == label_b {
        return Err(XinError::validation(format!(
            "cannot compare group '{}' with itself",
            label_a
        )));
    }

    let group_a = partition(values, group_labels, label_a);
    let group_b = partition(values, group_labels, label_b);

    for (label, group) in [(label_a, &group_a), (label_b, &group_b)] {
        if group.is_empty() {
            return Err(XinError::invalid_group_label(label));
        }
        if group.len() < MIN_GROUP_SIZE {
            return Err(XinError::insufficient_data(format!(
                "group '{}' has {} observation(s), at least {} are required",
                label,
                group.len(),
                MIN_GROUP_SIZE
            )));
        }
    }

    let (n_a, n_b) = (group_a.len(), group_b.len());
    let (mean_a, mean_b) = (mean(&group_a), mean(&group_b));
    let se_a = sample_variance(&group_a) / n_a as f64;
    let se_b = sample_variance(&group_b) / n_b as f64;
    let se_sq = se_a + se_b;
    if se_sq <= 0.0 {
        return Err(XinError::insufficient_data(format!(
            "groups '{}' and '{}' both have zero variance",
            label_a, label_b
        )));
    }

    let t_statistic = (mean_a - mean_b) / se_sq.sqrt();
    let degrees_of_freedom =
        se_sq.powi(2) / (se_a.powi(2) / (n_a - 1) as f64 + se_b.powi(2) / (n_b - 1) as f64);
    let p_value = student_t_two_tailed(t_statistic, degrees_of_freedom)?;

    log::debug!(
        "welch t-test {} (n={}) vs {} (n={}): t={:.4}, df={:.2}, p={:.6}",
        label_a,
        n_a,
        label_b,
        n_b,
        t_statistic,
        degrees_of_freedom,
        p_value
    );

    Ok(XinTwoGroupResult {
        t_statistic,
        p_value,
        significant: config.is_significant(p_value),
        mean_a,
        mean_b,
        degrees_of_freedom,
        n_a,
        n_b,
    })
}
