#![cfg(feature = "dev")]
//! Tests for parameter validation.

use vectoragg::internals::engine::validator::Validator;
use vectoragg::internals::math::index::{QueryWindow, TimeGrid};
use vectoragg::internals::primitives::errors::AggError;

#[test]
fn test_validate_grid_accepts_finite() {
    assert!(Validator::validate_grid(&TimeGrid::new(0.0, 9.0)).is_ok());
    assert!(Validator::validate_grid(&TimeGrid::new(5.0, 5.0)).is_ok());
    assert!(Validator::validate_grid(&TimeGrid::new(9.0, 0.0)).is_ok());
}

#[test]
fn test_validate_grid_rejects_non_finite() {
    let err = Validator::validate_grid(&TimeGrid::new(f64::NAN, 9.0)).unwrap_err();
    assert_eq!(err, AggError::InvalidNumericValue("tstart=NaN".to_string()));

    let err = Validator::validate_grid(&TimeGrid::new(0.0, f64::INFINITY)).unwrap_err();
    assert_eq!(err, AggError::InvalidNumericValue("tend=inf".to_string()));
}

#[test]
fn test_validate_window_allows_infinities() {
    let window = QueryWindow::new(f64::NEG_INFINITY, f64::INFINITY);
    assert!(Validator::validate_window(&window).is_ok());

    // Inverted windows are valid, just empty
    assert!(Validator::validate_window(&QueryWindow::new(6.0, 2.0)).is_ok());
}

#[test]
fn test_validate_window_rejects_nan() {
    let err = Validator::validate_window(&QueryWindow::new(1.0, f64::NAN)).unwrap_err();
    assert_eq!(err, AggError::InvalidNumericValue("aend=NaN".to_string()));

    let err = Validator::validate_window(&QueryWindow::new(f64::NAN, f64::NAN)).unwrap_err();
    assert_eq!(err, AggError::InvalidNumericValue("astart=NaN".to_string()));
}

#[test]
fn test_validate_required() {
    assert_eq!(Validator::validate_required(Some(3), "grid"), Ok(3));
    assert_eq!(
        Validator::validate_required::<u8>(None, "grid"),
        Err(AggError::MissingParameter { parameter: "grid" })
    );
}

#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("query")),
        Err(AggError::DuplicateParameter { parameter: "query" })
    );
}
