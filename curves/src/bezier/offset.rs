use super::curve::*;
use super::super::error::*;
use super::super::settings::*;

///
/// Moves every control point of a curve along the curve's normal, without subdividing it
///
/// Control point `i` of a curve with `n` points is moved along the normal at t = i/(n-1). This is only a good
/// approximation of the offset curve when the curve is nearly straight, as the normal changes along a real
/// curve. A positive distance moves the curve to the left of its direction of travel (with the y axis
/// pointing up). Where the normal is undefined (the derivative has no length) the direction from the start
/// to the end of the curve is used instead, and a curve that is just a point is not moved at all.
///
pub fn offset_naive(curve: &Bezier, distance: f64) -> Bezier {
    let last_idx    = (curve.num_points() - 1) as f64;
    let chord       = (curve.end_point() - curve.start_point()).to_unit_vector();

    let points      = curve.points().iter()
        .enumerate()
        .map(|(idx, point)| {
            let t       = (idx as f64) / last_idx;
            let tangent = curve.tangent_at_pos(t).unwrap_or(chord);

            *point + tangent.perpendicular()*distance
        })
        .collect();

    Bezier::from_valid_points(points)
}

///
/// Computes a series of curves that approximate the offset of a curve
///
/// This subdivides the curve in the same way as `flatten`, except that a piece is only offset once both the
/// piece itself and its naive offset have best-fit bounding boxes that are thinner than the tolerance.
///
pub fn offset_adaptive(curve: &Bezier, distance: f64, settings: &CurveSettings) -> CurveResult<Vec<Bezier>> {
    let mut offset_curves   = vec![];
    let mut pending         = vec![(curve.clone(), 0)];

    while let Some((piece, depth)) = pending.pop() {
        if piece.best_fit_bounding_box().is_thin(settings.tolerance) {
            let offset_piece = offset_naive(&piece, distance);

            if offset_piece.best_fit_bounding_box().is_thin(settings.tolerance) {
                offset_curves.push(offset_piece);
                continue;
            }
        }

        if depth >= settings.max_subdivision_depth {
            warn!("Gave up offsetting curve from {:?} after {} subdivisions", curve.start_point(), depth);
            return Err(CurveError::SubdivisionTooDeep { operation: "offset", depth: depth });
        }

        let (left, right) = piece.subdivide(0.5);

        pending.push((right, depth+1));
        pending.push((left, depth+1));
    }

    trace!("Offset curve from {:?} by {} using {} pieces", curve.start_point(), distance, offset_curves.len());

    Ok(offset_curves)
}
