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

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, XinError};

/// Column names of the work-life survey.
pub mod columns {
    pub const STRESS: &str = "Stress";
    pub const LIFE_SATISFACTION: &str = "LifeSatisf";
    pub const COMPANY_SIZE: &str = "CompanySize";
    pub const JOB_POSITION: &str = "JobPositionEmployeeManager";
    pub const INCOME: &str = "income1to7";
    pub const PERCEIVED_HEALTH: &str = "perceivedhealth1to7";
    pub const EXERCISE_HABIT: &str = "LeisureCompOrNoSport";
    pub const CHILDHOOD_SPORTS: &str = "Childhood7to16SportsYesNo";
}

/// Semantic type of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum XinColumnKind {
    /// Real-valued score.
    Continuous,
    /// Integer rating on a closed scale. Usable both as a number and as a
    /// grouping column.
    Ordinal { min: i64, max: i64 },
    /// Unordered category; `levels` pins the number of distinct values when
    /// known.
    Categorical { levels: Option<usize> },
}

impl XinColumnKind {
    /// Whether the column stores numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, XinColumnKind::Continuous | XinColumnKind::Ordinal { .. })
    }

    /// Whether the column can partition rows into groups.
    pub fn is_grouping(&self) -> bool {
        matches!(
            self,
            XinColumnKind::Categorical { .. } | XinColumnKind::Ordinal { .. }
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinColumnSpec {
    pub name: String,
    pub kind: XinColumnKind,
}

impl XinColumnSpec {
    pub fn continuous(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: XinColumnKind::Continuous,
        }
    }

    pub fn ordinal(name: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            name: name.into(),
            kind: XinColumnKind::Ordinal { min, max },
        }
    }

    pub fn categorical(name: impl Into<String>, levels: Option<usize>) -> Self {
        Self {
            name: name.into(),
            kind: XinColumnKind::Categorical { levels },
        }
    }
}

/// Ordered set of named, typed columns a dataset must provide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XinSchema {
    columns: Vec<XinColumnSpec>,
}

impl XinSchema {
    pub fn new(columns: Vec<XinColumnSpec>) -> Result<Self> {
        if columns.is_empty() {
            return Err(XinError::schema("schema must declare at least one column"));
        }

        let mut seen = HashSet::new();
        for spec in &columns {
            if spec.name.trim().is_empty() {
                return Err(XinError::schema("column names must not be empty"));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(XinError::schema(format!(
                    "column '{}' declared twice",
                    spec.name
                )));
            }
            match spec.kind {
                XinColumnKind::Ordinal { min, max } if min >= max => {
                    return Err(XinError::schema(format!(
                        "ordinal column '{}' has empty scale {}..={}",
                        spec.name, min, max
                    )));
                }
                XinColumnKind::Categorical { levels: Some(n) } if n < 2 => {
                    return Err(XinError::schema(format!(
                        "categorical column '{}' must declare at least 2 levels",
                        spec.name
                    )));
                }
                _ => {}
            }
        }

        Ok(Self { columns })
    }

    /// The work, stress and life-satisfaction survey.
    pub fn work_life() -> Self {
        Self {
            columns: vec![
                XinColumnSpec::continuous(columns::STRESS),
                XinColumnSpec::continuous(columns::LIFE_SATISFACTION),
                XinColumnSpec::categorical(columns::COMPANY_SIZE, Some(2)),
                XinColumnSpec::categorical(columns::JOB_POSITION, Some(2)),
                XinColumnSpec::ordinal(columns::INCOME, 1, 7),
                XinColumnSpec::ordinal(columns::PERCEIVED_HEALTH, 1, 7),
                XinColumnSpec::categorical(columns::EXERCISE_HABIT, Some(3)),
                XinColumnSpec::categorical(columns::CHILDHOOD_SPORTS, Some(2)),
            ],
        }
    }

    pub fn columns(&self) -> &[XinColumnSpec] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&XinColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Looks up a column, failing with a schema error that names it.
    pub fn require(&self, name: &str) -> Result<&XinColumnSpec> {
        self.column(name).ok_or_else(|| {
            XinError::schema(format!("unknown column '{}'", name))
        })
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
