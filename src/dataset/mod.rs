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

//! # Dataset Module
//!
//! Typed, in-memory representation of the survey table.
//!
//! ## Module Components
//!
//! - **Schema** ([schema.rs](schema/index.html)): Named, typed column declarations
//! - **Label** ([label.rs](label/index.html)): Normalized categorical values
//! - **Table** ([table.rs](table/index.html)): The validated dataset and its builder
//!
//! A dataset is checked against its schema exactly once, when it is built.
//! Downstream comparisons can then assume every column is present, fully
//! populated and correctly typed.
//!
//! ```rust
//! use xin::dataset::{XinColumnSpec, XinDataset, XinSchema};
//!
//! let schema = XinSchema::new(vec![
//!     XinColumnSpec::continuous("Stress"),
//!     XinColumnSpec::categorical("CompanySize", Some(2)),
//! ])?;
//! let dataset = XinDataset::builder(schema)
//!     .numeric("Stress", vec![21.0, 30.0, 25.0])
//!     .categorical("CompanySize", vec![1, 2, 2])
//!     .build()?;
//! assert_eq!(dataset.len(), 3);
//! # Ok::<(), xin::XinError>(())
//! ```

pub mod label;
pub mod schema;
pub mod table;

pub use label::XinLabel;
pub use schema::{columns, XinColumnKind, XinColumnSpec, XinSchema};
pub use table::{XinColumn, XinDataset, XinDatasetBuilder};
