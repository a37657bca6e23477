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

//! # Analysis Catalogue
//!
//! Group specifications and the fixed set of analyses offered over the
//! work-life survey.
//!
//! A [`XinGroupSpec`] names the columns a comparison reads and how rows are
//! partitioned; each variant maps to exactly one test. [`XinAnalysis`]
//! enumerates the survey's analysis sections and maps every section onto a
//! group specification, so a front end matches on a closed enum instead of
//! comparing menu strings.
//!
//! ```rust
//! use xin::analysis::XinAnalysis;
//! use xin::compare::XinComparator;
//!
//! let analysis: XinAnalysis = "Stress & Income".parse()?;
//! let result = XinComparator::default().run_analysis(&dataset, analysis)?;
//! println!("p = {:.5}", result.p_value());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::compare::XinTestKind;
use crate::dataset::{columns, XinLabel};
use crate::errors::{Result, XinError};

/// How rows are partitioned for a comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "split", rename_all = "snake_case")]
pub enum XinGroupSpec {
    /// Numeric column split by two labels of a grouping column.
    Binary {
        value_column: String,
        group_column: String,
        label_a: XinLabel,
        label_b: XinLabel,
    },
    /// Numeric column split by three or more labels of a grouping column.
    MultiGroup {
        value_column: String,
        group_column: String,
        labels: Vec<XinLabel>,
    },
    /// Two numeric columns paired by row.
    Paired { x_column: String, y_column: String },
    /// Two grouping columns cross-tabulated.
    Contingency {
        row_column: String,
        column_column: String,
    },
}

impl XinGroupSpec {
    /// Two-sample comparison of `value_column` between two levels of
    /// `group_column`.
    pub fn binary(
        value_column: impl Into<String>,
        group_column: impl Into<String>,
        label_a: impl Into<XinLabel>,
        label_b: impl Into<XinLabel>,
    ) -> Self {
        XinGroupSpec::Binary {
            value_column: value_column.into(),
            group_column: group_column.into(),
            label_a: label_a.into(),
            label_b: label_b.into(),
        }
    }

    /// ANOVA of `value_column` across the given levels of `group_column`.
    pub fn multi_group<L: Into<XinLabel>>(
        value_column: impl Into<String>,
        group_column: impl Into<String>,
        labels: impl IntoIterator<Item = L>,
    ) -> Self {
        XinGroupSpec::MultiGroup {
            value_column: value_column.into(),
            group_column: group_column.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Correlation between two numeric columns.
    pub fn paired(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        XinGroupSpec::Paired {
            x_column: x_column.into(),
            y_column: y_column.into(),
        }
    }

    /// Association between two grouping columns.
    pub fn contingency(row_column: impl Into<String>, column_column: impl Into<String>) -> Self {
        XinGroupSpec::Contingency {
            row_column: row_column.into(),
            column_column: column_column.into(),
        }
    }

    /// The test this specification runs.
    pub fn test_kind(&self) -> XinTestKind {
        match self {
            XinGroupSpec::Binary { .. } => XinTestKind::TwoSample,
            XinGroupSpec::MultiGroup { .. } => XinTestKind::MultiGroup,
            XinGroupSpec::Paired { .. } => XinTestKind::Correlation,
            XinGroupSpec::Contingency { .. } => XinTestKind::Association,
        }
    }

    /// Columns read by the comparison.
    pub fn columns(&self) -> [&str; 2] {
        match self {
            XinGroupSpec::Binary {
                value_column,
                group_column,
                ..
            }
            | XinGroupSpec::MultiGroup {
                value_column,
                group_column,
                ..
            } => [value_column.as_str(), group_column.as_str()],
            XinGroupSpec::Paired { x_column, y_column } => [x_column.as_str(), y_column.as_str()],
            XinGroupSpec::Contingency {
                row_column,
                column_column,
            } => [row_column.as_str(), column_column.as_str()],
        }
    }
}

/// Well-being score compared across company sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XinWellBeingMeasure {
    #[default]
    Stress,
    LifeSatisfaction,
}

impl XinWellBeingMeasure {
    pub fn column(&self) -> &'static str {
        match self {
            XinWellBeingMeasure::Stress => columns::STRESS,
            XinWellBeingMeasure::LifeSatisfaction => columns::LIFE_SATISFACTION,
        }
    }
}

/// Analysis sections of the work-life survey.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum XinAnalysis {
    /// Stress or life satisfaction, small (1) vs large (2) companies.
    CompanySizeWellBeing(XinWellBeingMeasure),
    StressIncome,
    LifeSatisfactionStress,
    /// Stress of employees (1) vs managers (2).
    EmploymentType,
    PerceivedHealthStress,
    /// Stress across the three exercise-habit groups.
    ExerciseStress,
    ExerciseLifeSatisfaction,
    /// Current exercise habit against childhood sports participation.
    ChildhoodSportsExercise,
}

const EXERCISE_GROUPS: [i64; 3] = [1, 2, 3];

impl XinAnalysis {
    /// Every analysis, with both well-being measures for the company-size
    /// section.
    pub fn all() -> Vec<XinAnalysis> {
        vec![
            XinAnalysis::CompanySizeWellBeing(XinWellBeingMeasure::Stress),
            XinAnalysis::CompanySizeWellBeing(XinWellBeingMeasure::LifeSatisfaction),
            XinAnalysis::StressIncome,
            XinAnalysis::LifeSatisfactionStress,
            XinAnalysis::EmploymentType,
            XinAnalysis::PerceivedHealthStress,
            XinAnalysis::ExerciseStress,
            XinAnalysis::ExerciseLifeSatisfaction,
            XinAnalysis::ChildhoodSportsExercise,
        ]
    }

    /// Section title shown in the menu and prefixed to schema errors.
    pub fn title(&self) -> &'static str {
        match self {
            XinAnalysis::CompanySizeWellBeing(_) => "Company Size & Well-Being",
            XinAnalysis::StressIncome => "Stress & Income",
            XinAnalysis::LifeSatisfactionStress => "Life Satisfaction & Stress",
            XinAnalysis::EmploymentType => "Employment Type Analysis",
            XinAnalysis::PerceivedHealthStress => "Perceived Health & Stress",
            XinAnalysis::ExerciseStress => "Exercise Habits & Stress",
            XinAnalysis::ExerciseLifeSatisfaction => "Exercise Habits & Life Satisfaction",
            XinAnalysis::ChildhoodSportsExercise => {
                "Current Exercise Habits vs Childhood Sports History"
            }
        }
    }

    pub fn group_spec(&self) -> XinGroupSpec {
        match self {
            XinAnalysis::CompanySizeWellBeing(measure) => {
                XinGroupSpec::binary(measure.column(), columns::COMPANY_SIZE, 1, 2)
            }
            XinAnalysis::StressIncome => XinGroupSpec::paired(columns::STRESS, columns::INCOME),
            XinAnalysis::LifeSatisfactionStress => {
                XinGroupSpec::paired(columns::STRESS, columns::LIFE_SATISFACTION)
            }
            XinAnalysis::EmploymentType => {
                XinGroupSpec::binary(columns::STRESS, columns::JOB_POSITION, 1, 2)
            }
            XinAnalysis::PerceivedHealthStress => {
                XinGroupSpec::paired(columns::STRESS, columns::PERCEIVED_HEALTH)
            }
            XinAnalysis::ExerciseStress => XinGroupSpec::multi_group(
                columns::STRESS,
                columns::EXERCISE_HABIT,
                EXERCISE_GROUPS,
            ),
            XinAnalysis::ExerciseLifeSatisfaction => XinGroupSpec::multi_group(
                columns::LIFE_SATISFACTION,
                columns::EXERCISE_HABIT,
                EXERCISE_GROUPS,
            ),
            XinAnalysis::ChildhoodSportsExercise => {
                XinGroupSpec::contingency(columns::EXERCISE_HABIT, columns::CHILDHOOD_SPORTS)
            }
        }
    }
}

impl fmt::Display for XinAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XinAnalysis::CompanySizeWellBeing(measure) => {
                write!(f, "{} ({})", self.title(), measure.column())
            }
            other => f.write_str(other.title()),
        }
    }
}

impl FromStr for XinAnalysis {
    type Err = XinError;

    /// Parses a section title. The company-size section accepts an optional
    /// `(Stress)` or `(LifeSatisf)` suffix and defaults to stress.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        XinAnalysis::all()
            .into_iter()
            .find(|analysis| analysis.to_string() == s)
            .or_else(|| {
                (s == XinAnalysis::CompanySizeWellBeing(XinWellBeingMeasure::Stress).title())
                    .then_some(XinAnalysis::CompanySizeWellBeing(XinWellBeingMeasure::default()))
            })
            .ok_or_else(|| XinError::validation(format!("unknown analysis '{}'", s)))
    }
}
