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

//! Tail probabilities of the reference distributions, backed by `statrs`.

use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

use crate::compare::descriptive::clamp_probability;
use crate::errors::{Result, XinError};

/// Two-tailed p-value of a Student t statistic.
pub fn student_t_two_tailed(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|err| XinError::internal(format!("student t with {} df: {}", df, err)))?;
    Ok(clamp_probability(2.0 * dist.sf(t.abs())))
}

/// Upper-tail p-value of an F statistic.
pub fn fisher_upper_tail(f: f64, df_between: f64, df_within: f64) -> Result<f64> {
    if f <= 0.0 {
        return Ok(1.0);
    }
    let dist = FisherSnedecor::new(df_between, df_within).map_err(|err| {
        XinError::internal(format!(
            "F distribution with ({}, {}) df: {}",
            df_between, df_within, err
        ))
    })?;
    Ok(clamp_probability(dist.sf(f)))
}

/// Upper-tail p-value of a chi-square statistic.
pub fn chi_squared_upper_tail(chi2: f64, dof: f64) -> Result<f64> {
    if chi2 <= 0.0 {
        return Ok(1.0);
    }
    let dist = ChiSquared::new(dof)
        .map_err(|err| XinError::internal(format!("chi-square with {} df: {}", dof, err)))?;
    Ok(clamp_probability(dist.sf(chi2)))
}
