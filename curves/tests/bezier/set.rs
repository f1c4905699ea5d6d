use super::*;

fn points(points: &[(f64, f64)]) -> Vec<Coord2> {
    points.iter().map(|point| Coord2::from(*point)).collect()
}

#[test]
fn raw_points_without_breaks_make_one_curve() {
    let set = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)])).unwrap();

    assert!(set.len() == 1);
    assert!(set.curves()[0].degree() == 2);
}

#[test]
fn repeated_point_starts_a_new_curve() {
    let set = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)])).unwrap();

    assert!(set.len() == 2);
    assert!(set.curves()[0].points() == &[Coord2(0.0, 0.0), Coord2(10.0, 0.0)]);
    assert!(set.curves()[1].points() == &[Coord2(10.0, 0.0), Coord2(10.0, 10.0), Coord2(20.0, 10.0)]);
}

#[test]
fn nearly_repeated_point_starts_a_new_curve() {
    let set = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0001, 0.0), (10.0, 10.0)])).unwrap();

    assert!(set.len() == 2);
}

#[test]
fn single_raw_point_is_an_error() {
    assert!(BezierSet::from_raw_points(&points(&[(0.0, 0.0)])) == Err(CurveError::TooFewControlPoints(1)));
}

#[test]
fn trailing_repeated_point_is_an_error() {
    assert!(BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0)])) == Err(CurveError::TooFewControlPoints(1)));
}

#[test]
fn no_raw_points_is_an_empty_set() {
    let set = BezierSet::from_raw_points(&[]).unwrap();

    assert!(set.is_empty());
    assert!(set.first().is_none());
}

#[test]
fn reverse_set() {
    let set         = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0), (20.0, 10.0)])).unwrap();
    let reversed    = set.reverse();

    assert!(reversed.len() == 2);
    assert!(reversed.curves()[0].points() == &[Coord2(20.0, 10.0), Coord2(10.0, 10.0), Coord2(10.0, 0.0)]);
    assert!(reversed.curves()[1].points() == &[Coord2(10.0, 0.0), Coord2(0.0, 0.0)]);
    assert!(reversed.reverse() == set);
}

#[test]
fn set_position_from_parameter() {
    assert!(SetPosition::from_set_parameter(0.0, 2) == Ok(SetPosition { curve: 0, t: 0.0 }));
    assert!(SetPosition::from_set_parameter(1.25, 2) == Ok(SetPosition { curve: 1, t: 0.25 }));
    assert!(SetPosition::from_set_parameter(2.0, 2) == Ok(SetPosition { curve: 1, t: 1.0 }));
    assert!(SetPosition::from_set_parameter(1.25, 2).unwrap().to_set_parameter() == 1.25);
}

#[test]
fn invalid_set_positions() {
    assert!(SetPosition::from_set_parameter(-0.5, 2) == Err(CurveError::InvalidParameter(-0.5)));
    assert!(SetPosition::from_set_parameter(2.5, 2) == Err(CurveError::InvalidParameter(2.5)));
    assert!(SetPosition::from_set_parameter(0.0, 0) == Err(CurveError::InvalidParameter(0.0)));
    assert!(SetPosition::from_set_parameter(f64::NAN, 2).is_err());
}

#[test]
fn point_at_set_position() {
    let set = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();

    assert!(set.point_at(SetPosition { curve: 1, t: 0.5 }).unwrap().distance_to(&Coord2(10.0, 5.0)) < 0.0001);
    assert!(set.point_at(SetPosition { curve: 2, t: 0.5 }).is_err());
}

#[test]
fn truncate_set() {
    let set         = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0)])).unwrap();
    let truncated   = set.truncate_at(SetPosition { curve: 1, t: 0.5 });

    assert!(truncated.len() == 2);
    assert!(truncated.curves()[0] == set.curves()[0]);
    assert!(truncated.curves()[1].end_point().distance_to(&Coord2(10.0, 5.0)) < 0.0001);
}

#[test]
fn translate_set() {
    let set         = BezierSet::from_raw_points(&points(&[(0.0, 0.0), (10.0, 0.0)])).unwrap();
    let translated  = set.translate(Coord2(1.0, 1.0));

    assert!(translated.curves()[0].points() == &[Coord2(1.0, 1.0), Coord2(11.0, 1.0)]);
}
