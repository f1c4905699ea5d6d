use owp_curves::*;
use owp_curves::bezier;

#[test]
fn small_factorials() {
    assert!(bezier::factorial(0) == Ok(1.0));
    assert!(bezier::factorial(1) == Ok(1.0));
    assert!(bezier::factorial(5) == Ok(120.0));
}

#[test]
fn largest_factorial() {
    assert!(bezier::factorial(16) == Ok(20922789888000.0));
}

#[test]
fn factorial_out_of_range() {
    assert!(bezier::factorial(17) == Err(CurveError::FactorialOutOfRange(17)));
}

#[test]
fn choose_values() {
    assert!(bezier::choose(4, 2) == Ok(6.0));
    assert!(bezier::choose(3, 0) == Ok(1.0));
    assert!(bezier::choose(16, 8) == Ok(12870.0));
}

#[test]
fn choose_out_of_range() {
    assert!(bezier::choose(20, 2).is_err());
    assert!(bezier::choose(2, 3).is_err());
}
