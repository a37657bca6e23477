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

//! # Xin Dataset Tests
//!
//! Schema validation and CSV loading. The survey fixture lives in
//! `tests/fixtures/work_life_sample.csv`; malformed exports are written to
//! temporary files.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test dataset
//! ```

use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use xin::dataset::columns;
use xin::inspect::XinColumnSummary;
use xin::{XinCsvReader, XinError, XinLabel, XinProfiler, XinSchema};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/work_life_sample.csv")
}

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const HEADER: &str = "Stress,LifeSatisf,CompanySize,JobPositionEmployeeManager,income1to7,perceivedhealth1to7,LeisureCompOrNoSport,Childhood7to16SportsYesNo";

/// The fixture loads under the survey schema and extra columns are skipped.
#[test]
fn fixture_loads_under_the_survey_schema() {
    let dataset = XinCsvReader::new()
        .read_path(&fixture(), &XinSchema::work_life())
        .unwrap();

    assert_eq!(dataset.len(), 30);
    assert_eq!(dataset.column_names().len(), 8);
    assert!(dataset.column("Education").is_err());
    assert_eq!(
        dataset.levels(columns::EXERCISE_HABIT).unwrap(),
        vec![XinLabel::from(1), XinLabel::from(2), XinLabel::from(3)]
    );
    assert_eq!(dataset.numeric(columns::STRESS).unwrap()[0], 22.6);
}

/// Ordinal columns are numeric and can also group rows.
#[test]
fn ordinal_columns_serve_both_roles() {
    let dataset = XinCsvReader::new()
        .read_path(&fixture(), &XinSchema::work_life())
        .unwrap();

    let income = dataset.numeric(columns::INCOME).unwrap();
    assert!(income.iter().all(|v| (1.0..=7.0).contains(v)));
    assert_eq!(dataset.labels(columns::INCOME).unwrap()[0], XinLabel::from(1));
    assert!(matches!(
        dataset.labels(columns::STRESS),
        Err(XinError::Schema { .. })
    ));
}

#[test]
fn profile_of_the_fixture() {
    let dataset = XinCsvReader::new()
        .read_path(&fixture(), &XinSchema::work_life())
        .unwrap();

    let report = XinProfiler::new().profile(&dataset);

    assert_eq!(report.total_rows, 30);
    assert_eq!(report.columns.len(), 8);
    match &report.column(columns::COMPANY_SIZE).unwrap().summary {
        XinColumnSummary::Categorical { level_counts } => {
            assert_eq!(
                level_counts,
                &vec![(XinLabel::from(1), 15), (XinLabel::from(2), 15)]
            );
        }
        other => panic!("unexpected summary {:?}", other),
    }
    match &report.column(columns::STRESS).unwrap().summary {
        XinColumnSummary::Numeric(summary) => {
            assert_eq!(summary.count, 30);
            assert!(summary.min <= summary.q1 && summary.q1 <= summary.median);
            assert!(summary.median <= summary.q3 && summary.q3 <= summary.max);
        }
        other => panic!("unexpected summary {:?}", other),
    }
}

/// The older export names the childhood column differently; it is rejected
/// at load time instead of failing inside an analysis.
#[test]
fn renamed_childhood_column_is_a_schema_error() {
    let file = write_csv(
        "Stress,LifeSatisf,CompanySize,JobPositionEmployeeManager,income1to7,perceivedhealth1to7,LeisureCompOrNoSport,ExerciseChildhood\n\
         20,25,1,1,3,4,1,1\n\
         30,20,2,2,5,2,2,2\n",
    );

    let err = XinCsvReader::new()
        .read_path(file.path(), &XinSchema::work_life())
        .unwrap_err();

    assert_eq!(
        err,
        XinError::schema("csv is missing column 'Childhood7to16SportsYesNo'")
    );
}

#[test]
fn blank_cells_are_reported_with_their_row() {
    let file = write_csv(&format!(
        "{}\n20,25,1,1,3,4,1,1\n30,,2,2,5,2,2,2\n",
        HEADER
    ));

    let err = XinCsvReader::new()
        .read_path(file.path(), &XinSchema::work_life())
        .unwrap_err();

    assert_eq!(err, XinError::schema("row 2: column 'LifeSatisf' is empty"));
}

#[test]
fn out_of_range_ordinals_and_level_mismatches_are_rejected() {
    let file = write_csv(&format!(
        "{}\n20,25,1,1,9,4,1,1\n30,20,2,2,5,2,2,2\n",
        HEADER
    ));
    let err = XinCsvReader::new()
        .read_path(file.path(), &XinSchema::work_life())
        .unwrap_err();
    assert!(matches!(err, XinError::Schema { .. }));

    // Only one company size present where two are declared.
    let file = write_csv(&format!(
        "{}\n20,25,1,1,3,4,1,1\n30,20,1,2,5,2,2,2\n25,22,1,1,4,3,3,1\n",
        HEADER
    ));
    let err = XinCsvReader::new()
        .read_path(file.path(), &XinSchema::work_life())
        .unwrap_err();
    assert!(matches!(err, XinError::Schema { .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = XinCsvReader::new()
        .read_path(&fixture().with_file_name("absent.csv"), &XinSchema::work_life())
        .unwrap_err();
    assert!(matches!(err, XinError::Io(_)));
}

#[test]
fn header_only_file_has_no_rows() {
    let file = write_csv(&format!("{}\n", HEADER));
    let err = XinCsvReader::new()
        .read_path(file.path(), &XinSchema::work_life())
        .unwrap_err();
    assert!(matches!(err, XinError::InsufficientData { .. }));
}
