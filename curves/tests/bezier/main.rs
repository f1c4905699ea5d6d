use owp_curves::*;

mod combinatorics;
mod basis;
mod subdivide;
mod offset;
mod set;

pub fn approx_equal(a: f64, b: f64) -> bool {
    f64::floor(f64::abs(a-b)*10000.0) == 0.0
}

pub fn curve(points: &[(f64, f64)]) -> Bezier {
    Bezier::new(points.iter().map(|point| Coord2::from(*point)).collect()).unwrap()
}

#[test]
fn read_curve_control_points() {
    let curve = curve(&[(1.0, 1.0), (3.0, 3.0), (4.0, 4.0), (2.0, 2.0)]);

    assert!(curve.start_point() == Coord2(1.0, 1.0));
    assert!(curve.end_point() == Coord2(2.0, 2.0));
    assert!(curve.points() == &[Coord2(1.0, 1.0), Coord2(3.0, 3.0), Coord2(4.0, 4.0), Coord2(2.0, 2.0)]);
    assert!(curve.degree() == 3);
}

#[test]
fn single_point_is_not_a_curve() {
    assert!(Bezier::new(vec![Coord2(1.0, 1.0)]) == Err(CurveError::TooFewControlPoints(1)));
    assert!(Bezier::new(vec![]) == Err(CurveError::TooFewControlPoints(0)));
}

#[test]
fn too_many_points_is_not_a_curve() {
    let points = (0..18).map(|x| Coord2(x as f64, 0.0)).collect();

    assert!(Bezier::new(points) == Err(CurveError::TooManyControlPoints(18)));
}

#[test]
fn reverse_curve() {
    let curve = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);

    assert!(curve.reverse().points() == &[Coord2(50.0, 50.0), Coord2(50.0, 0.0), Coord2(0.0, 0.0)]);
}

#[test]
fn translate_curve() {
    let curve = curve(&[(0.0, 0.0), (50.0, 0.0)]);

    assert!(curve.translate(Coord2(1.0, 2.0)).points() == &[Coord2(1.0, 2.0), Coord2(51.0, 2.0)]);
}
