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

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::compare::descriptive::{mean, quantile_sorted, sample_variance, sorted_copy};
use crate::dataset::{XinColumn, XinColumnKind, XinDataset, XinLabel};

/// Summary of a numeric column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XinNumericSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `0.0` for a single value.
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl XinNumericSummary {
    /// Summarizes `values`, `None` when empty.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sorted = sorted_copy(values);
        Some(Self {
            count: values.len(),
            mean: mean(values),
            std_dev: sample_variance(values).sqrt(),
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum XinColumnSummary {
    Numeric(XinNumericSummary),
    /// `(level, count)` pairs in natural level order.
    Categorical { level_counts: Vec<(XinLabel, usize)> },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinColumnProfile {
    pub name: String,
    pub kind: XinColumnKind,
    pub summary: XinColumnSummary,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct XinProfileReport {
    pub total_rows: usize,
    pub columns: Vec<XinColumnProfile>,
}

impl XinProfileReport {
    pub fn column(&self, name: &str) -> Option<&XinColumnProfile> {
        self.columns.iter().find(|profile| profile.name == name)
    }
}

/// Column-by-column overview of a dataset, in schema order.
#[derive(Clone, Debug, Default)]
pub struct XinProfiler;

impl XinProfiler {
    pub fn new() -> Self {
        Self
    }

    pub fn profile(&self, dataset: &XinDataset) -> XinProfileReport {
        let columns = dataset
            .schema()
            .columns()
            .iter()
            .filter_map(|spec| {
                let column = dataset.column(&spec.name).ok()?;
                Some(XinColumnProfile {
                    name: spec.name.clone(),
                    kind: spec.kind,
                    summary: summarize(column)?,
                })
            })
            .collect();

        XinProfileReport {
            total_rows: dataset.len(),
            columns,
        }
    }
}

fn summarize(column: &XinColumn) -> Option<XinColumnSummary> {
    match column {
        XinColumn::Numeric(values) => {
            XinNumericSummary::from_values(values).map(XinColumnSummary::Numeric)
        }
        XinColumn::Categorical(labels) => {
            let mut counts: BTreeMap<&XinLabel, usize> = BTreeMap::new();
            for label in labels {
                *counts.entry(label).or_insert(0) += 1;
            }
            Some(XinColumnSummary::Categorical {
                level_counts: counts
                    .into_iter()
                    .map(|(label, count)| (label.clone(), count))
                    .collect(),
            })
        }
    }
}
