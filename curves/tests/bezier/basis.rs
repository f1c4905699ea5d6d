use super::*;

use owp_curves::bezier;

#[test]
fn bernstein_weights_sum_to_one() {
    for x in 0..10 {
        let t   = (x as f64)/10.0;
        let sum = (0..=3).map(|v| bezier::bernstein(3, v, t).unwrap()).sum::<f64>();

        assert!(approx_equal(sum, 1.0));
    }
}

#[test]
fn curve_starts_and_ends_at_control_points() {
    let curves = vec![
        curve(&[(1.0, 2.0), (10.0, 3.0)]),
        curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]),
        curve(&[(0.0, 2.0), (0.0, 20.0), (10.0, -10.0), (10.0, 8.0)]),
        curve(&[(0.0, 0.0), (10.0, 30.0), (20.0, -30.0), (30.0, 30.0), (40.0, 0.0), (50.0, 10.0)])
    ];

    for curve in curves {
        assert!(curve.point_at_pos(0.0).distance_to(&curve.start_point()) < 0.0001);
        assert!(curve.point_at_pos(1.0).distance_to(&curve.end_point()) < 0.0001);
    }
}

#[test]
fn quadratic_matches_general_formula() {
    let quadratic   = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    let points      = quadratic.points();

    for x in 0..=20 {
        let t       = (x as f64)/20.0;
        let general = points.iter()
            .enumerate()
            .fold(Coord2(0.0, 0.0), |pos, (v, point)| pos + *point*bezier::bernstein(2, v, t).unwrap());

        assert!(quadratic.point_at_pos(t).distance_to(&general) < 0.0001);
    }
}

#[test]
fn cubic_midpoint() {
    let cubic = curve(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);

    assert!(cubic.point_at_pos(0.5).distance_to(&Coord2(5.0, 7.5)) < 0.0001);
}

#[test]
fn line_is_linear() {
    let line = curve(&[(0.0, 0.0), (10.0, 20.0)]);

    assert!(line.point_at_pos(0.25).distance_to(&Coord2(2.5, 5.0)) < 0.0001);
}
