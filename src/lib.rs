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

//! # Xin Core Library
//!
//! Statistical group comparisons over the work-life survey: does a
//! well-being score differ between groups, do two scores move together, are
//! two categorical answers associated.
//!
//! ## Module Overview
//!
//! - **compare**: Welch's t-test, one-way ANOVA, Pearson correlation and the
//!   chi-square test of independence, plus [`XinComparator`] for running
//!   them against a dataset
//! - **dataset**: typed survey schema and the immutable, validated table
//! - **analysis**: group specifications and the catalogue of survey
//!   analyses
//! - **ingest**: CSV loading checked against a schema (`csv` feature)
//! - **inspect**: dataset profile, chart-ready distributions and
//!   regression lines for scatter plots
//! - **config**: significance level and test options
//!
//! ## Feature Flags
//!
//! - `csv`: CSV ingestion
//! - `parallel`: runs batches of comparisons on Rayon
//! - `full`: enables all features
//!
//! ## Quick Start
//!
//! ```rust
//! use xin::{XinAnalysis, XinComparator, XinSchema};
//! use xin::ingest::XinCsvReader;
//!
//! let dataset = XinCsvReader::new().read_path(&path, &XinSchema::work_life())?;
//! let comparator = XinComparator::default();
//!
//! for analysis in XinAnalysis::all() {
//!     let result = comparator.run_analysis(&dataset, analysis)?;
//!     println!("{}: p = {:.5}", analysis, result.p_value());
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return `Result<T, XinError>`. Precondition failures
//! (too few observations, mismatched lengths, unknown labels or columns)
//! are reported before any statistic is computed.

pub mod analysis;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod errors;
#[cfg(feature = "csv")]
pub mod ingest;
pub mod inspect;

pub use analysis::{XinAnalysis, XinGroupSpec, XinWellBeingMeasure};
pub use compare::{
    compare_multi_groups, compare_two_groups, correlate, test_association, XinAssociationResult,
    XinComparator, XinComparisonResult, XinContingencyTable, XinCorrelationResult,
    XinMultiGroupResult, XinTestKind, XinTwoGroupResult,
};
pub use config::{XinCompareConfig, XinCompareConfigBuilder};
pub use dataset::{XinColumn, XinColumnKind, XinColumnSpec, XinDataset, XinLabel, XinSchema};
pub use errors::{Result, XinError};
#[cfg(feature = "csv")]
pub use ingest::{XinCsvReader, XinReaderConfig};
pub use inspect::{XinDistribution, XinProfileReport, XinProfiler, XinRegressionLine};
