#![cfg(test)]

use super::*;

#[test]
fn test_chained_checks() {
    let value = Validator::validate(Some(5))
        .is_some()
        .and_then(|v| v.test(|n| n.is_some_and(|n| n > 3)))
        .map(Validator::complete);
    assert_eq!(value, Ok(Some(5)));

    assert_eq!(
        Validator::validate(Some(5)).is_none().err(),
        Some(SomeValueError.into()),
        "A present value should fail is_none."
    );
    assert_eq!(
        Validator::validate(None::<u8>).is_some().err(),
        Some(NoneValueError.into()),
        "A missing value should fail is_some."
    );
    assert!(Validator::validate(None::<u8>).is_none().is_ok());
}

#[test]
fn test_predicate() {
    let failed = Validator::validate("hello")
        .test(|s| s.starts_with('h'))
        .and_then(|v| v.test(|s| s.len() > 10));
    assert!(failed.is_err_and(|e| e.is_predicate_failed()));
    assert_eq!(PredicateError.to_string(), "validation predicate returned false");

    let mut calls = 0;
    let result = Validator::validate(1)
        .test(|_| false)
        .and_then(|v| {
            calls += 1;
            v.test(|_| true)
        });
    assert!(result.is_err());
    assert_eq!(calls, 0, "Checks after a failure shouldn't run.");
}
