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

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::dataset::{XinColumn, XinDataset, XinLabel, XinSchema};
use crate::errors::{Result, XinError};

#[derive(Clone, Debug)]
pub struct XinReaderConfig {
    pub delimiter: u8,
    /// Strip surrounding whitespace from headers and cells.
    pub trim: bool,
}

impl Default for XinReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

/// Reads a survey export with a header row into a schema-checked dataset.
///
/// Columns not declared by the schema are skipped. Every declared column
/// must be present and every cell filled; the first violation is reported
/// with its data row number (1-based, header excluded).
#[derive(Clone, Debug, Default)]
pub struct XinCsvReader {
    config: XinReaderConfig,
}

impl XinCsvReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: XinReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read_path(&self, path: &Path, schema: &XinSchema) -> Result<XinDataset> {
        let file = File::open(path)?;
        let dataset = self.read_from(BufReader::new(file), schema)?;
        log::debug!(
            "loaded {} rows from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn read_from<R: Read>(&self, reader: R, schema: &XinSchema) -> Result<XinDataset> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .trim(if self.config.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();

        let mut indices = Vec::with_capacity(schema.len());
        for spec in schema.columns() {
            let idx = headers
                .iter()
                .position(|h| h == spec.name)
                .ok_or_else(|| {
                    XinError::schema(format!("csv is missing column '{}'", spec.name))
                })?;
            indices.push(idx);
        }
        for (idx, header) in headers.iter().enumerate() {
            if !indices.contains(&idx) {
                log::warn!("ignoring undeclared csv column '{}'", header);
            }
        }

        let mut columns: Vec<XinColumn> = schema
            .columns()
            .iter()
            .map(|spec| {
                if spec.kind.is_numeric() {
                    XinColumn::Numeric(Vec::new())
                } else {
                    XinColumn::Categorical(Vec::new())
                }
            })
            .collect();

        for (row_idx, result) in csv_reader.records().enumerate() {
            let row_number = row_idx + 1;
            let record = result?;

            for ((spec, idx), column) in schema.columns().iter().zip(&indices).zip(&mut columns) {
                let cell = record.get(*idx).unwrap_or("");
                if cell.trim().is_empty() {
                    return Err(XinError::schema(format!(
                        "row {}: column '{}' is empty",
                        row_number, spec.name
                    )));
                }

                match column {
                    XinColumn::Numeric(values) => {
                        let value = cell.trim().parse::<f64>().map_err(|_| {
                            XinError::schema(format!(
                                "row {}: column '{}' value '{}' is not a number",
                                row_number, spec.name, cell
                            ))
                        })?;
                        values.push(value);
                    }
                    XinColumn::Categorical(labels) => labels.push(XinLabel::new(cell)),
                }
            }
        }

        schema
            .columns()
            .iter()
            .zip(columns)
            .fold(XinDataset::builder(schema.clone()), |builder, (spec, column)| {
                builder.column(spec.name.clone(), column)
            })
            .build()
    }
}
