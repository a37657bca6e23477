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

//! # Xin Error Module
//!
//! This module defines the error type returned by every fallible operation
//! in Xin.
//!
//! ## Error Handling Philosophy
//!
//! - **Fail Fast**: Shape and size preconditions are checked before any
//!   statistic is computed, so a caller never sees a NaN result
//! - **Typed**: Each variant tells the caller what to do next (skip the
//!   comparison, fix the data alignment, fix the configuration)
//! - **Serde Support**: Errors can be serialized for presentation layers
//!
//! ## Error Categories
//!
//! - **InsufficientData**: A partition has too few observations, or the data
//!   is degenerate (zero variance) for the requested statistic
//! - **DimensionMismatch**: Paired columns have unequal lengths
//! - **InvalidGroupLabel**: A requested group label does not occur
//! - **Schema**: Missing or mistyped columns, malformed cells
//! - **Validation**: Malformed arguments or configuration
//! - **Io / Csv / Serde**: Wrapped external failures
//! - **Internal**: Unexpected internal failures
//!
//! ## Usage
//!
//! ```rust
//! use xin::errors::{Result, XinError};
//!
//! fn require_pairs(n: usize) -> Result<()> {
//!     if n < 3 {
//!         return Err(XinError::insufficient_data("need at least 3 pairs"));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Xin.
pub type Result<T> = std::result::Result<T, XinError>;

/// Canonical error enumeration for Xin.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum XinError {
    /// A required partition has too few observations to compute the
    /// requested statistic.
    #[error("insufficient data: {message}")]
    InsufficientData { message: String },

    /// Paired inputs have unequal lengths.
    #[error("dimension mismatch: {left} values paired with {right} values")]
    DimensionMismatch { left: usize, right: usize },

    /// A requested group label is not present in the categorical column.
    #[error("invalid group label '{label}'")]
    InvalidGroupLabel { label: String },

    /// Malformed schema, unknown column or incompatible column type.
    #[error("schema error: {message}")]
    Schema { message: String },

    /// Invalid parameters or configuration.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Errors originating from filesystem IO.
    #[error("io error: {0}")]
    Io(String),

    /// Errors raised by the CSV reader.
    #[error("csv error: {0}")]
    Csv(String),

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for XinError {
    fn from(err: io::Error) -> Self {
        XinError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for XinError {
    fn from(err: serde_json::Error) -> Self {
        XinError::Serde(err.to_string())
    }
}

#[cfg(feature = "csv")]
impl From<csv::Error> for XinError {
    fn from(err: csv::Error) -> Self {
        XinError::Csv(err.to_string())
    }
}

impl XinError {
    /// Helper to construct insufficient-data errors.
    pub fn insufficient_data<T: Into<String>>(message: T) -> Self {
        XinError::InsufficientData {
            message: message.into(),
        }
    }

    pub fn dimension_mismatch(left: usize, right: usize) -> Self {
        XinError::DimensionMismatch { left, right }
    }

    pub fn invalid_group_label(label: impl ToString) -> Self {
        XinError::InvalidGroupLabel {
            label: label.to_string(),
        }
    }

    /// Helper to construct schema errors.
    pub fn schema<T: Into<String>>(message: T) -> Self {
        XinError::Schema {
            message: message.into(),
        }
    }

    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        XinError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        XinError::Internal(message.into())
    }
}
