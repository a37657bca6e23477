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

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::dataset::label::XinLabel;
use crate::dataset::schema::{XinColumnKind, XinSchema};
use crate::errors::{Result, XinError};

/// Column storage. Continuous and ordinal columns are numeric; categorical
/// columns hold labels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "storage", content = "values", rename_all = "snake_case")]
pub enum XinColumn {
    Numeric(Vec<f64>),
    Categorical(Vec<XinLabel>),
}

impl XinColumn {
    pub fn len(&self) -> usize {
        match self {
            XinColumn::Numeric(values) => values.len(),
            XinColumn::Categorical(labels) => labels.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Immutable, schema-checked survey table with one row per respondent.
///
/// Every column named by the schema is present, fully populated and of the
/// declared type, so comparisons never re-validate column shape.
#[derive(Clone, Debug, PartialEq)]
pub struct XinDataset {
    schema: XinSchema,
    columns: Vec<XinColumn>,
    rows: usize,
}

impl XinDataset {
    /// Starts a dataset for `schema`; columns are checked once, in `build`.
    pub fn builder(schema: XinSchema) -> XinDatasetBuilder {
        XinDatasetBuilder::new(schema)
    }

    /// Schema the columns were validated against.
    pub fn schema(&self) -> &XinSchema {
        &self.schema
    }

    /// Number of respondents.
    pub fn len(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in schema order.
    pub fn column_names(&self) -> Vec<&str> {
        self.schema.columns().iter().map(|c| c.name.as_str()).collect()
    }

    /// Raw column, or a `Schema` error naming the unknown column.
    pub fn column(&self, name: &str) -> Result<&XinColumn> {
        let index = self
            .schema
            .columns()
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| XinError::schema(format!("unknown column '{}'", name)))?;
        Ok(&self.columns[index])
    }

    /// Numeric view of a continuous or ordinal column.
    pub fn numeric(&self, name: &str) -> Result<&[f64]> {
        match self.column(name)? {
            XinColumn::Numeric(values) => Ok(values),
            XinColumn::Categorical(_) => Err(XinError::schema(format!(
                "column '{}' is categorical, a numeric column is required",
                name
            ))),
        }
    }

    /// Grouping view of a categorical or ordinal column.
    pub fn labels(&self, name: &str) -> Result<Cow<'_, [XinLabel]>> {
        let spec = self.schema.require(name)?;
        match (self.column(name)?, spec.kind) {
            (XinColumn::Categorical(labels), _) => Ok(Cow::Borrowed(labels.as_slice())),
            (XinColumn::Numeric(values), XinColumnKind::Ordinal { .. }) => Ok(Cow::Owned(
                values.iter().map(|v| XinLabel::from(*v as i64)).collect(),
            )),
            (XinColumn::Numeric(_), _) => Err(XinError::schema(format!(
                "column '{}' is continuous and cannot be used to group rows",
                name
            ))),
        }
    }

    /// Distinct labels of a grouping column in natural order.
    pub fn levels(&self, name: &str) -> Result<Vec<XinLabel>> {
        let labels = self.labels(name)?;
        let distinct: BTreeSet<XinLabel> = labels.iter().cloned().collect();
        Ok(distinct.into_iter().collect())
    }
}

/// Collects columns and validates them against a schema.
#[derive(Debug)]
pub struct XinDatasetBuilder {
    schema: XinSchema,
    columns: HashMap<String, XinColumn>,
}

impl XinDatasetBuilder {
    pub fn new(schema: XinSchema) -> Self {
        Self {
            schema,
            columns: HashMap::new(),
        }
    }

    pub fn numeric(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.columns.insert(name.into(), XinColumn::Numeric(values));
        self
    }

    pub fn categorical<L: Into<XinLabel>>(mut self, name: impl Into<String>, labels: Vec<L>) -> Self {
        let labels = labels.into_iter().map(Into::into).collect();
        self.columns.insert(name.into(), XinColumn::Categorical(labels));
        self
    }

    pub fn column(mut self, name: impl Into<String>, column: XinColumn) -> Self {
        self.columns.insert(name.into(), column);
        self
    }

    /// Checks the columns against the schema. A dataset with no rows is
    /// `InsufficientData`.
    pub fn build(mut self) -> Result<XinDataset> {
        if let Some(extra) = self
            .columns
            .keys()
            .find(|name| self.schema.column(name).is_none())
        {
            return Err(XinError::schema(format!(
                "column '{}' is not declared in the schema",
                extra
            )));
        }

        let mut rows: Option<(usize, String)> = None;
        let mut ordered = Vec::with_capacity(self.schema.len());

        for spec in self.schema.columns() {
            let column = self.columns.remove(&spec.name).ok_or_else(|| {
                XinError::schema(format!("missing column '{}'", spec.name))
            })?;

            match &rows {
                None => rows = Some((column.len(), spec.name.clone())),
                Some((n, first)) if *n != column.len() => {
                    return Err(XinError::schema(format!(
                        "column '{}' has {} rows but '{}' has {}",
                        spec.name,
                        column.len(),
                        first,
                        n
                    )));
                }
                _ => {}
            }
            ordered.push(column);
        }

        let rows = rows.map(|(n, _)| n).unwrap_or(0);
        if rows == 0 {
            return Err(XinError::insufficient_data("dataset has no rows"));
        }
        for (spec, column) in self.schema.columns().iter().zip(&ordered) {
            validate_column(&spec.name, spec.kind, column)?;
        }

        log::debug!(
            "built dataset with {} rows and {} columns",
            rows,
            ordered.len()
        );

        Ok(XinDataset {
            schema: self.schema,
            columns: ordered,
            rows,
        })
    }
}

fn validate_column(name: &str, kind: XinColumnKind, column: &XinColumn) -> Result<()> {
    match (kind, column) {
        (XinColumnKind::Continuous, XinColumn::Numeric(values)) => {
            if let Some(row) = values.iter().position(|v| !v.is_finite()) {
                return Err(XinError::schema(format!(
                    "column '{}' row {}: value is not a finite number",
                    name,
                    row + 1
                )));
            }
        }
        (XinColumnKind::Ordinal { min, max }, XinColumn::Numeric(values)) => {
            for (row, v) in values.iter().enumerate() {
                if !v.is_finite() || v.fract() != 0.0 || *v < min as f64 || *v > max as f64 {
                    return Err(XinError::schema(format!(
                        "column '{}' row {}: {} is not an integer in {}..={}",
                        name,
                        row + 1,
                        v,
                        min,
                        max
                    )));
                }
            }
        }
        (XinColumnKind::Categorical { levels }, XinColumn::Categorical(labels)) => {
            if let Some(row) = labels.iter().position(XinLabel::is_empty) {
                return Err(XinError::schema(format!(
                    "column '{}' row {}: empty label",
                    name,
                    row + 1
                )));
            }
            if let Some(expected) = levels {
                let distinct: BTreeSet<&XinLabel> = labels.iter().collect();
                if distinct.len() != expected {
                    return Err(XinError::schema(format!(
                        "column '{}' declares {} levels but contains {}",
                        name,
                        expected,
                        distinct.len()
                    )));
                }
            }
        }
        (kind, _) => {
            return Err(XinError::schema(format!(
                "column '{}' storage does not match declared kind {:?}",
                name, kind
            )));
        }
    }
    Ok(())
}
