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

//! # Xin Comparison Tests
//!
//! Worked examples for the four comparison tests, together with the
//! properties every test must satisfy (symmetry, bounded p-values,
//! calibrated p-values under the null).
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test compare
//! ```

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use xin::{
    compare_multi_groups, compare_two_groups, correlate, test_association, XinComparator,
    XinCompareConfigBuilder, XinContingencyTable, XinError,
};

fn two_group_labels(n_a: usize, n_b: usize) -> Vec<&'static str> {
    let mut labels = vec!["a"; n_a];
    labels.extend(std::iter::repeat("b").take(n_b));
    labels
}

/// Two clearly separated groups give a large negative t and a tiny p-value.
#[test]
fn two_groups_well_separated() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 11.0, 12.0, 13.0, 14.0];
    let labels = two_group_labels(5, 5);

    let result = compare_two_groups(&values, &labels, &"a", &"b").unwrap();

    assert_eq!(result.mean_a, 3.0);
    assert_eq!(result.mean_b, 12.0);
    assert!(result.t_statistic < -8.0);
    assert!(result.p_value < 0.001);
    assert!(result.significant);
}

/// Identical groups have no mean difference to detect.
#[test]
fn two_groups_identical_distributions() {
    let values = [1.0, 2.0, 3.0, 1.0, 2.0, 3.0];
    let labels = two_group_labels(3, 3);

    let result = compare_two_groups(&values, &labels, &"a", &"b").unwrap();

    assert_eq!(result.t_statistic, 0.0);
    assert!((result.p_value - 1.0).abs() < 1e-12);
    assert!(!result.significant);
}

/// Labels can be any comparable type, integers included.
#[test]
fn two_groups_with_integer_codes() {
    let values = [20.0, 22.0, 21.0, 30.0, 31.0, 29.0];
    let sizes = [1, 1, 1, 2, 2, 2];

    let result = compare_two_groups(&values, &sizes, &1, &2).unwrap();

    assert_eq!(result.n_a, 3);
    assert_eq!(result.n_b, 3);
    assert!(result.significant);
}

#[test]
fn two_groups_reject_missing_and_tiny_groups() {
    let values = [1.0, 2.0, 3.0];
    let labels = ["a", "a", "b"];

    assert!(matches!(
        compare_two_groups(&values, &labels, &"a", &"c"),
        Err(XinError::InvalidGroupLabel { .. })
    ));
    assert!(matches!(
        compare_two_groups(&values, &labels, &"a", &"b"),
        Err(XinError::InsufficientData { .. })
    ));
    assert!(matches!(
        compare_two_groups(&values, &labels[..2], &"a", &"b"),
        Err(XinError::DimensionMismatch { left: 3, right: 2 })
    ));
}

/// Three groups with separated means.
#[test]
fn multi_groups_separated_means() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
    let labels = [1, 1, 1, 2, 2, 2, 3, 3, 3];

    let result = compare_multi_groups(&values, &labels, &[1, 2, 3]).unwrap();

    assert!((result.f_statistic - 27.0).abs() < 1e-9);
    assert!((result.p_value - 0.001).abs() < 1e-9);
    assert_eq!(result.group_means, vec![2.0, 5.0, 8.0]);
    assert_eq!(result.group_sizes, vec![3, 3, 3]);
    assert_eq!(result.labels, vec!["1", "2", "3"]);
    assert!(result.significant);
}

#[test]
fn multi_groups_need_three_labels() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let labels = ["a", "a", "b", "b"];

    assert!(matches!(
        compare_multi_groups(&values, &labels, &["a", "b"]),
        Err(XinError::Validation { .. })
    ));
}

#[test]
fn correlation_of_identical_columns() {
    let x = [1.0, 2.0, 3.0, 4.0, 5.0];

    let result = correlate(&x, &x).unwrap();

    assert_eq!(result.r, 1.0);
    assert!(result.p_value < 1e-12);
    assert!(result.significant);
}

/// Fractional data on an exact line still reports r = -1 and p = 0.
#[test]
fn correlation_of_fractional_linear_data() {
    let x = [-3.3, 1.7, 2.2, 5.9];
    let y: Vec<f64> = x.iter().map(|v| -0.7 * v + 1.1).collect();

    let result = correlate(&x, &y).unwrap();

    assert_eq!(result.r, -1.0);
    assert_eq!(result.p_value, 0.0);
}

#[test]
fn correlation_rejects_short_columns() {
    assert!(matches!(
        correlate(&[1.0, 2.0], &[2.0, 1.0]),
        Err(XinError::InsufficientData { .. })
    ));
}

/// A perfectly balanced table carries no evidence of association.
#[test]
fn association_of_balanced_table() {
    let table = XinContingencyTable {
        row_labels: vec!["yes".into(), "no".into()],
        column_labels: vec!["yes".into(), "no".into()],
        counts: vec![vec![10, 10], vec![10, 10]],
    };

    let result = XinComparator::default().test_contingency_table(table).unwrap();

    assert_eq!(result.chi2_statistic, 0.0);
    assert_eq!(result.p_value, 1.0);
    assert!(!result.significant);
}

/// Cross-tabulating raw answers matches testing the table directly.
#[test]
fn association_from_raw_columns() {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (a, b, count) in [("1", "1", 10), ("1", "2", 20), ("2", "1", 30), ("2", "2", 40)] {
        for _ in 0..count {
            x.push(a);
            y.push(b);
        }
    }

    let result = test_association(&x, &y).unwrap();

    assert_eq!(result.table.counts, vec![vec![10, 20], vec![30, 40]]);
    assert_eq!(result.degrees_of_freedom, 1);
    assert!(!result.yates_corrected);

    let corrected = XinComparator::new(
        XinCompareConfigBuilder::new()
            .yates_correction(true)
            .build()
            .unwrap(),
    )
    .unwrap()
    .test_association(&x, &y)
    .unwrap();
    assert!(corrected.yates_corrected);
    assert!(corrected.chi2_statistic < result.chi2_statistic);
}

/// Under independence the p-value is roughly uniform: about alpha of the
/// tests reject and the mean p-value sits near one half.
#[test]
fn association_p_values_are_calibrated_under_independence() {
    let mut rng = StdRng::seed_from_u64(20240607);
    let trials = 500;
    let mut rejections = 0;
    let mut p_sum = 0.0;

    for _ in 0..trials {
        let x: Vec<u8> = (0..120).map(|_| rng.gen_range(0..2)).collect();
        let y: Vec<u8> = (0..120).map(|_| rng.gen_range(0..3)).collect();
        let result = test_association(&x, &y).unwrap();
        if result.significant {
            rejections += 1;
        }
        p_sum += result.p_value;
    }

    let rejection_rate = rejections as f64 / trials as f64;
    let mean_p = p_sum / trials as f64;
    assert!(rejection_rate > 0.01 && rejection_rate < 0.10, "rate {}", rejection_rate);
    assert!(mean_p > 0.42 && mean_p < 0.58, "mean p {}", mean_p);
}

fn sample(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-100.0f64..100.0, min_len..24)
}

proptest! {
    /// Swapping the two labels negates t and leaves p unchanged.
    #[test]
    fn two_groups_label_swap_negates_t(a in sample(2), b in sample(2)) {
        let values: Vec<f64> = a.iter().chain(&b).copied().collect();
        let labels = two_group_labels(a.len(), b.len());

        let ab = compare_two_groups(&values, &labels, &"a", &"b");
        let ba = compare_two_groups(&values, &labels, &"b", &"a");
        if let (Ok(ab), Ok(ba)) = (ab, ba) {
            prop_assert_eq!(ab.t_statistic, -ba.t_statistic);
            prop_assert_eq!(ab.p_value, ba.p_value);
            prop_assert!((0.0..=1.0).contains(&ab.p_value));
        }
    }

    /// Correlation is symmetric and bounded.
    #[test]
    fn correlation_is_symmetric_and_bounded(pairs in prop::collection::vec((-50.0f64..50.0, -50.0f64..50.0), 3..40)) {
        let x: Vec<f64> = pairs.iter().map(|p| p.0).collect();
        let y: Vec<f64> = pairs.iter().map(|p| p.1).collect();

        if let (Ok(xy), Ok(yx)) = (correlate(&x, &y), correlate(&y, &x)) {
            prop_assert_eq!(xy.r, yx.r);
            prop_assert_eq!(xy.p_value, yx.p_value);
            prop_assert!((-1.0..=1.0).contains(&xy.r));
            prop_assert!((0.0..=1.0).contains(&xy.p_value));
        }
    }

    /// An exact linear relation gives r = +1 or -1 exactly, with p = 0,
    /// for fractional inputs and slopes as well as integer ones.
    #[test]
    fn correlation_of_linear_relation_is_extreme(
        x in prop::collection::vec(-25.0f64..25.0, 3..30),
        slope in prop_oneof![Just(-3.7f64), Just(-0.7), Just(0.3), Just(2.5), Just(11.0)],
        intercept in -5.0f64..5.0,
    ) {
        let y: Vec<f64> = x.iter().map(|v| slope * v + intercept).collect();

        if let Ok(result) = correlate(&x, &y) {
            prop_assert_eq!(result.r, slope.signum());
            prop_assert_eq!(result.p_value, 0.0);
        }
    }

    /// ANOVA p-values stay within [0, 1] and F is never negative.
    #[test]
    fn multi_group_results_are_bounded(a in sample(2), b in sample(2), c in sample(2)) {
        let values: Vec<f64> = a.iter().chain(&b).chain(&c).copied().collect();
        let labels: Vec<u8> = std::iter::repeat(0).take(a.len())
            .chain(std::iter::repeat(1).take(b.len()))
            .chain(std::iter::repeat(2).take(c.len()))
            .collect();

        if let Ok(result) = compare_multi_groups(&values, &labels, &[0, 1, 2]) {
            prop_assert!(result.f_statistic >= 0.0);
            prop_assert!((0.0..=1.0).contains(&result.p_value));
        }
    }
}
