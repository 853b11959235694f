//! Testing helpers.

use assert_float_eq::*;

/// Compares two slices element-wise, treating `NaN` as equal to `NaN`.
pub fn assert_slice_f64_nan_eq(expected: &[f64], actual: &[f64]) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (index, &expected) in expected.iter().enumerate() {
        let actual = actual[index];
        if expected.is_nan() || actual.is_nan() {
            assert!(
                expected.is_nan() && actual.is_nan(),
                "mismatch at index {index}: {expected} ≠ {actual}"
            );
        } else if actual != expected {
            assert_f64_near!(expected, actual);
        }
    }
}
