use super::*;

use owp_curves::bezier;

fn distance_to_curve(point: Coord2, curve: &Bezier) -> f64 {
    (0..=4000)
        .map(|idx| curve.point_at_pos((idx as f64)/4000.0))
        .map(|sample| sample.distance_to(&point))
        .fold(f64::MAX, f64::min)
}

#[test]
fn offset_line_to_the_left() {
    let line    = curve(&[(0.0, 0.0), (10.0, 0.0)]);
    let offset  = bezier::offset_naive(&line, 5.0);

    assert!(offset.start_point().distance_to(&Coord2(0.0, 5.0)) < 0.0001);
    assert!(offset.end_point().distance_to(&Coord2(10.0, 5.0)) < 0.0001);
}

#[test]
fn offset_line_to_the_right() {
    let line    = curve(&[(0.0, 0.0), (10.0, 0.0)]);
    let offset  = bezier::offset_naive(&line, -5.0);

    assert!(offset.start_point().distance_to(&Coord2(0.0, -5.0)) < 0.0001);
    assert!(offset.end_point().distance_to(&Coord2(10.0, -5.0)) < 0.0001);
}

#[test]
fn offset_diagonal_line_is_parallel() {
    let line    = curve(&[(0.0, 0.0), (30.0, 40.0)]);
    let offset  = bezier::offset_naive(&line, 2.0);

    let original_direction  = (line.end_point() - line.start_point()).to_unit_vector();
    let offset_direction    = (offset.end_point() - offset.start_point()).to_unit_vector();

    assert!(original_direction.distance_to(&offset_direction) < 0.0001);
    assert!(approx_equal(offset.start_point().distance_to(&offset.end_point()), 50.0));
    assert!(approx_equal(offset.start_point().distance_to(&line.start_point()), 2.0));
}

#[test]
fn offset_point_stays_put() {
    let point   = curve(&[(3.0, 4.0), (3.0, 4.0)]);
    let offset  = bezier::offset_naive(&point, 5.0);

    assert!(offset.points() == &[Coord2(3.0, 4.0), Coord2(3.0, 4.0)]);
}

#[test]
fn offset_with_overlapping_control_point_uses_the_chord() {
    let quadratic   = curve(&[(0.0, 0.0), (0.0, 0.0), (10.0, 0.0)]);
    let offset      = bezier::offset_naive(&quadratic, 1.0);

    assert!(offset.start_point().distance_to(&Coord2(0.0, 1.0)) < 0.0001);
    assert!(offset.end_point().distance_to(&Coord2(10.0, 1.0)) < 0.0001);
}

#[test]
fn adaptive_offset_is_the_right_distance_from_the_curve() {
    let quadratic   = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);

    for distance in vec![5.0, -5.0] {
        let offset = bezier::offset_adaptive(&quadratic, distance, &CurveSettings::with_tolerance(1.0)).unwrap();

        assert!(offset.len() > 1);

        for piece in offset.iter() {
            for idx in 0..=20 {
                let point = piece.point_at_pos((idx as f64)/20.0);
                let error = (distance_to_curve(point, &quadratic) - 5.0).abs();

                assert!(error < 0.1);
            }
        }
    }
}

#[test]
fn adaptive_offset_pieces_join_up() {
    let cubic   = curve(&[(0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0)]);
    let offset  = bezier::offset_adaptive(&cubic, 10.0, &CurveSettings::with_tolerance(1.0)).unwrap();

    for pair in offset.windows(2) {
        assert!(pair[0].end_point().is_near_to(&pair[1].start_point()));
    }
}

#[test]
fn adaptive_offset_starts_at_the_normal() {
    let quadratic   = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    let offset      = bezier::offset_adaptive(&quadratic, 5.0, &CurveSettings::with_tolerance(1.0)).unwrap();

    assert!(offset[0].start_point().distance_to(&Coord2(0.0, 5.0)) < 0.0001);
    assert!(offset[offset.len()-1].end_point().distance_to(&Coord2(45.0, 50.0)) < 0.0001);
}

#[test]
fn adaptive_offset_gives_up_when_too_deep() {
    let quadratic   = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    let settings    = CurveSettings { max_subdivision_depth: 1, ..CurveSettings::with_tolerance(1.0) };

    assert!(bezier::offset_adaptive(&quadratic, 5.0, &settings) == Err(CurveError::SubdivisionTooDeep { operation: "offset", depth: 1 }));
}
