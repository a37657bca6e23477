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

//! # Xin Association Module
//!
//! Cross-tabulation of two categorical columns and Pearson's chi-square
//! test of independence, with optional Yates continuity correction for
//! 2x2 tables.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use crate::compare::descriptive::ensure_same_len;
use crate::compare::result::{XinAssociationResult, XinContingencyTable};
use crate::compare::tails::chi_squared_upper_tail;
use crate::config::XinCompareConfig;
use crate::errors::{Result, XinError};

/// Cross-tabulates two row-aligned categorical columns.
///
/// Rows are the distinct values of `x` and columns the distinct values of
/// `y`, both in ascending order.
pub fn contingency_table<X, Y>(x: &[X], y: &[Y]) -> Result<XinContingencyTable>
where
    X: Ord + Display,
    Y: Ord + Display,
{
    ensure_same_len(x.len(), y.len())?;
    if x.is_empty() {
        return Err(XinError::insufficient_data(
            "cannot cross-tabulate empty columns",
        ));
    }

    let row_index: BTreeMap<&X, usize> = x
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();
    let column_index: BTreeMap<&Y, usize> = y
        .iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(i, v)| (v, i))
        .collect();

    let mut counts = vec![vec![0u64; column_index.len()]; row_index.len()];
    for (xv, yv) in x.iter().zip(y) {
        counts[row_index[xv]][column_index[yv]] += 1;
    }

    Ok(XinContingencyTable {
        row_labels: row_index.keys().map(ToString::to_string).collect(),
        column_labels: column_index.keys().map(ToString::to_string).collect(),
        counts,
    })
}

/// Pearson's chi-square test of independence over a contingency table.
pub fn chi_square_independence(
    table: XinContingencyTable,
    config: &XinCompareConfig,
) -> Result<XinAssociationResult> {
    validate_table(&table)?;

    let rows = table.row_labels.len();
    let cols = table.column_labels.len();
    let degrees_of_freedom = (rows - 1) * (cols - 1);
    let total = table.total() as f64;
    let row_totals = table.row_totals();
    let column_totals = table.column_totals();

    let expected_frequencies: Vec<Vec<f64>> = row_totals
        .iter()
        .map(|r| {
            column_totals
                .iter()
                .map(|c| *r as f64 * *c as f64 / total)
                .collect()
        })
        .collect();

    let yates_corrected = config.yates_correction && degrees_of_freedom == 1;
    let mut chi2_statistic = 0.0;
    for (observed_row, expected_row) in table.counts.iter().zip(&expected_frequencies) {
        for (observed, expected) in observed_row.iter().zip(expected_row) {
            let mut deviation = (*observed as f64 - expected).abs();
            if yates_corrected {
                deviation -= deviation.min(0.5);
            }
            chi2_statistic += deviation * deviation / expected;
        }
    }

    let p_value = chi_squared_upper_tail(chi2_statistic, degrees_of_freedom as f64)?;
    let low_expected_frequency_warning = expected_frequencies
        .iter()
        .flatten()
        .any(|e| *e < config.min_expected_frequency);

    if low_expected_frequency_warning {
        log::warn!(
            "chi-square test on a {}x{} table has expected frequencies below {}",
            rows,
            cols,
            config.min_expected_frequency
        );
    }
    log::debug!(
        "chi-square test on a {}x{} table (n={}): chi2={:.4}, df={}, p={:.6}",
        rows,
        cols,
        total,
        chi2_statistic,
        degrees_of_freedom,
        p_value
    );

    Ok(XinAssociationResult {
        chi2_statistic,
        p_value,
        degrees_of_freedom,
        significant: config.is_significant(p_value),
        table,
        expected_frequencies,
        low_expected_frequency_warning,
        yates_corrected,
    })
}

fn validate_table(table: &XinContingencyTable) -> Result<()> {
    let rows = table.row_labels.len();
    let cols = table.column_labels.len();

    if table.counts.len() != rows || table.counts.iter().any(|row| row.len() != cols) {
        return Err(XinError::validation(format!(
            "contingency counts do not form a {}x{} grid",
            rows, cols
        )));
    }
    if rows < 2 || cols < 2 {
        return Err(XinError::insufficient_data(format!(
            "a {}x{} table has no degrees of freedom, both variables need at least 2 levels",
            rows, cols
        )));
    }
    if let Some(i) = table.row_totals().iter().position(|t| *t == 0) {
        return Err(XinError::insufficient_data(format!(
            "row '{}' of the contingency table is empty",
            table.row_labels[i]
        )));
    }
    if let Some(j) = table.column_totals().iter().position(|t| *t == 0) {
        return Err(XinError::insufficient_data(format!(
            "column '{}' of the contingency table is empty",
            table.column_labels[j]
        )));
    }
    Ok(())
}
