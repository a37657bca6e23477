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

//! # Xin Analysis Tests
//!
//! Every survey analysis run end to end over the fixture dataset, through
//! the same comparator a front end would use.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test analysis
//! ```

use std::path::PathBuf;

use serde_json::json;
use xin::dataset::{columns, XinColumnSpec};
use xin::inspect::XinDistribution;
use xin::{
    XinAnalysis, XinComparator, XinComparisonResult, XinCompareConfigBuilder, XinCsvReader,
    XinDataset, XinError, XinGroupSpec, XinLabel, XinSchema, XinTestKind, XinWellBeingMeasure,
};

fn survey() -> XinDataset {
    let path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/work_life_sample.csv");
    XinCsvReader::new()
        .read_path(&path, &XinSchema::work_life())
        .unwrap()
}

/// Stress is higher in large companies in the fixture.
#[test]
fn company_size_stress() {
    let result = XinComparator::default()
        .run_analysis(
            &survey(),
            XinAnalysis::CompanySizeWellBeing(XinWellBeingMeasure::Stress),
        )
        .unwrap();

    match result {
        XinComparisonResult::TwoSample(r) => {
            assert!((r.mean_a - 20.553_333_333).abs() < 1e-6);
            assert!((r.mean_b - 25.873_333_333).abs() < 1e-6);
            assert!((r.t_statistic + 4.679_279_89).abs() < 1e-6);
            assert!((r.degrees_of_freedom - 25.783_498_63).abs() < 1e-6);
            assert_eq!((r.n_a, r.n_b), (15, 15));
            assert!(r.p_value < 0.001);
            assert!(r.significant);
        }
        other => panic!("expected a two-sample result, got {:?}", other.kind()),
    }
}

#[test]
fn life_satisfaction_falls_with_stress() {
    let result = XinComparator::default()
        .run_analysis(&survey(), XinAnalysis::LifeSatisfactionStress)
        .unwrap();

    match result {
        XinComparisonResult::Correlation(r) => {
            assert!((r.r + 0.809_550_07).abs() < 1e-6);
            assert_eq!(r.n, 30);
            assert!(r.significant);
        }
        other => panic!("expected a correlation, got {:?}", other.kind()),
    }
}

/// Exercise habits separate life satisfaction but not stress.
#[test]
fn exercise_habit_groups() {
    let comparator = XinComparator::default();
    let dataset = survey();

    let stress = comparator
        .run_analysis(&dataset, XinAnalysis::ExerciseStress)
        .unwrap();
    assert!((stress.statistic() - 1.443_677_57).abs() < 1e-6);
    assert!(!stress.significant());

    match comparator
        .run_analysis(&dataset, XinAnalysis::ExerciseLifeSatisfaction)
        .unwrap()
    {
        XinComparisonResult::MultiGroup(r) => {
            assert!((r.f_statistic - 7.174_786_03).abs() < 1e-6);
            assert_eq!(r.labels, vec!["1", "2", "3"]);
            assert_eq!(r.group_sizes, vec![10, 10, 10]);
            assert_eq!((r.df_between, r.df_within), (2, 27));
            assert!(r.significant);
        }
        other => panic!("expected an ANOVA result, got {:?}", other.kind()),
    }
}

/// The fixture is balanced across exercise habit and childhood sports.
#[test]
fn childhood_sports_is_independent_of_exercise() {
    let result = XinComparator::default()
        .run_analysis(&survey(), XinAnalysis::ChildhoodSportsExercise)
        .unwrap();

    match result {
        XinComparisonResult::Association(r) => {
            assert_eq!(r.table.counts, vec![vec![5, 5], vec![5, 5], vec![5, 5]]);
            assert_eq!(r.degrees_of_freedom, 2);
            assert_eq!(r.chi2_statistic, 0.0);
            assert_eq!(r.p_value, 1.0);
            assert!(!r.low_expected_frequency_warning);
        }
        other => panic!("expected an association result, got {:?}", other.kind()),
    }
}

/// Every analysis runs and the batch keeps the requested order.
#[test]
fn every_analysis_runs_in_a_batch() {
    let dataset = survey();
    let analyses = XinAnalysis::all();
    let specs: Vec<XinGroupSpec> = analyses.iter().map(XinAnalysis::group_spec).collect();

    let results = XinComparator::default().run_many(&dataset, &specs);

    assert_eq!(results.len(), analyses.len());
    for (spec, result) in specs.iter().zip(results) {
        let result = result.unwrap();
        assert_eq!(result.kind(), spec.test_kind());
        assert!((0.0..=1.0).contains(&result.p_value()));
    }
}

#[test]
fn stricter_alpha_changes_the_verdict() {
    let dataset = survey();
    let lax = XinComparator::default()
        .run_analysis(&dataset, XinAnalysis::EmploymentType)
        .unwrap();
    let strict = XinComparator::new(XinCompareConfigBuilder::new().alpha(0.001).build().unwrap())
        .unwrap()
        .run_analysis(&dataset, XinAnalysis::EmploymentType)
        .unwrap();

    assert_eq!(lax.p_value(), strict.p_value());
    assert!(!strict.significant());
}

/// A dataset without the childhood column fails that analysis with a schema
/// error naming the section.
#[test]
fn missing_column_names_the_analysis() {
    let schema = XinSchema::new(vec![
        XinColumnSpec::continuous(columns::STRESS),
        XinColumnSpec::categorical(columns::EXERCISE_HABIT, Some(3)),
    ])
    .unwrap();
    let dataset = XinDataset::builder(schema)
        .numeric(columns::STRESS, vec![20.0, 22.0, 25.0, 27.0, 30.0, 31.0])
        .categorical(columns::EXERCISE_HABIT, vec![1, 1, 2, 2, 3, 3])
        .build()
        .unwrap();

    let err = XinComparator::default()
        .run_analysis(&dataset, XinAnalysis::ChildhoodSportsExercise)
        .unwrap_err();

    assert_eq!(
        err,
        XinError::schema(
            "Current Exercise Habits vs Childhood Sports History: unknown column 'Childhood7to16SportsYesNo'"
        )
    );
    assert!(XinComparator::default()
        .run_analysis(&dataset, XinAnalysis::ExerciseStress)
        .is_ok());
}

#[test]
fn custom_group_specs_run_against_the_dataset() {
    let dataset = survey();
    let spec = XinGroupSpec::binary(columns::LIFE_SATISFACTION, columns::CHILDHOOD_SPORTS, 1, 2);

    let result = XinComparator::default().run(&dataset, &spec).unwrap();
    assert_eq!(result.kind(), XinTestKind::TwoSample);

    let absent = XinGroupSpec::binary(columns::STRESS, columns::COMPANY_SIZE, 1, 3);
    assert!(matches!(
        XinComparator::default().run(&dataset, &absent),
        Err(XinError::InvalidGroupLabel { .. })
    ));
}

#[test]
fn boxplot_data_for_company_size() {
    let summaries =
        XinDistribution::group_summaries(&survey(), columns::STRESS, columns::COMPANY_SIZE)
            .unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].label, XinLabel::from(1));
    assert!((summaries[0].summary.mean - 20.553_333_333).abs() < 1e-6);
    assert!(summaries[1].summary.median > summaries[0].summary.median);
}

/// The fitted line drawn over the stress and life satisfaction scatter.
#[test]
fn regression_lines_for_scatter_plots() {
    let dataset = survey();

    let line =
        XinDistribution::paired_regression(&dataset, columns::STRESS, columns::LIFE_SATISFACTION)
            .unwrap();
    assert!((line.slope + 0.472_784_230_924).abs() < 1e-9);
    assert!((line.intercept - 34.181_564_613_849).abs() < 1e-9);
    assert_eq!(line.n, 30);

    let income = XinDistribution::regression_line(
        dataset.numeric(columns::INCOME).unwrap(),
        dataset.numeric(columns::STRESS).unwrap(),
    )
    .unwrap();
    assert!((income.slope + 0.497_626_033_609).abs() < 1e-9);
    assert!((income.intercept - 25.187_249_933_316).abs() < 1e-9);

    assert!(matches!(
        XinDistribution::paired_regression(&dataset, columns::STRESS, columns::COMPANY_SIZE),
        Err(XinError::Schema { .. })
    ));
}

#[test]
fn results_serialize_with_their_kind() {
    let result = XinComparator::default()
        .run_analysis(&survey(), XinAnalysis::StressIncome)
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["kind"], json!("correlation"));
    assert_eq!(value["n"], json!(30));
}
