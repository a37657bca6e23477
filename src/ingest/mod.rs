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

//! # Data Ingestion Module
//!
//! Loads survey exports into a [`XinDataset`](crate::dataset::XinDataset),
//! checking every row against a [`XinSchema`](crate::dataset::XinSchema)
//! once, at load time.
//!
//! Spreadsheet exports are read as delimited text with a header row.
//! Available with the `csv` feature.
//!
//! ```rust
//! use xin::dataset::XinSchema;
//! use xin::ingest::{XinCsvReader, XinReaderConfig};
//!
//! let reader = XinCsvReader::new().with_config(XinReaderConfig {
//!     delimiter: b';',
//!     ..Default::default()
//! });
//! let dataset = reader.read_path(&path, &XinSchema::work_life())?;
//! ```

pub mod reader;

pub use reader::{XinCsvReader, XinReaderConfig};
