use super::*;

#[test]
fn subdivided_halves_meet_at_t() {
    let cubic = curve(&[(0.0, 2.0), (0.0, 20.0), (10.0, -10.0), (10.0, 8.0)]);

    for x in 1..10 {
        let t               = (x as f64)/10.0;
        let (left, right)   = cubic.subdivide(t);
        let split_point     = cubic.point_at_pos(t);

        assert!(left.point_at_pos(1.0).distance_to(&split_point) < 0.0001);
        assert!(right.point_at_pos(0.0).distance_to(&split_point) < 0.0001);
    }
}

#[test]
fn left_half_follows_original_curve() {
    let cubic           = curve(&[(1.0, 1.0), (2.0, 5.0), (3.0, -2.0), (4.0, 4.0)]);
    let (left, _right)  = cubic.subdivide(0.33);

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = cubic.point_at_pos(t*0.33);
        let subdivision = left.point_at_pos(t);

        assert!(original.distance_to(&subdivision) < 0.0001);
    }
}

#[test]
fn right_half_follows_original_curve() {
    let cubic           = curve(&[(1.0, 1.0), (2.0, 5.0), (3.0, -2.0), (4.0, 4.0)]);
    let (_left, right)  = cubic.subdivide(0.33);

    for x in 0..100 {
        let t = (x as f64)/100.0;

        let original    = cubic.point_at_pos(0.33+(t*(1.0-0.33)));
        let subdivision = right.point_at_pos(t);

        assert!(original.distance_to(&subdivision) < 0.0001);
    }
}

#[test]
fn subdivided_halves_keep_degree() {
    let quintic         = curve(&[(0.0, 0.0), (10.0, 30.0), (20.0, -30.0), (30.0, 30.0), (40.0, 0.0)]);
    let (left, right)   = quintic.subdivide(0.5);

    assert!(left.num_points() == 5);
    assert!(right.num_points() == 5);
    assert!(left.start_point() == quintic.start_point());
    assert!(right.end_point() == quintic.end_point());
}

///
/// Checks that the pieces from subdivide_many trace out the original curve
///
fn check_subdivide_many(original: &Bezier, t_values: &[f64]) {
    let pieces = original.subdivide_many(t_values);
    assert!(pieces.len() == t_values.len()+1);

    let mut sorted = t_values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let bounds = Some(0.0).into_iter().chain(sorted.iter().copied()).chain(Some(1.0)).collect::<Vec<_>>();

    for (piece, range) in pieces.iter().zip(bounds.windows(2)) {
        let (t_min, t_max) = (range[0], range[1]);

        for x in 0..=10 {
            let t           = (x as f64)/10.0;
            let original_t  = t_min + t*(t_max-t_min);

            assert!(piece.point_at_pos(t).distance_to(&original.point_at_pos(original_t)) < 0.0001);
        }
    }
}

#[test]
fn subdivide_many_sorted() {
    let cubic = curve(&[(0.0, 2.0), (0.0, 20.0), (10.0, -10.0), (10.0, 8.0)]);

    check_subdivide_many(&cubic, &[]);
    check_subdivide_many(&cubic, &[0.5]);
    check_subdivide_many(&cubic, &[0.33, 0.66]);
    check_subdivide_many(&cubic, &[0.1, 0.5, 0.75]);
}

#[test]
fn subdivide_many_unsorted() {
    let quadratic = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);

    check_subdivide_many(&quadratic, &[0.66, 0.33]);
    check_subdivide_many(&quadratic, &[0.75, 0.1, 0.5]);
}

#[test]
fn subdivide_many_at_zero_and_one() {
    let quadratic   = curve(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)]);
    let pieces      = quadratic.subdivide_many(&[0.0, 1.0]);

    assert!(pieces.len() == 3);
    assert!(pieces[0].points().iter().all(|point| point.distance_to(&Coord2(0.0, 0.0)) < 0.0001));
    assert!(pieces[1].points().iter().zip(quadratic.points()).all(|(a, b)| a.distance_to(b) < 0.0001));
}
