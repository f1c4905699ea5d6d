use super::line::*;
use super::super::coordinate::*;

///
/// Returns the t values along each line where two line segments cross (if they cross)
///
/// The ends of the segments count as part of the segment. Parallel lines (including lines where one
/// end is the same as the other) never intersect.
///
pub fn line_intersection_parameters<L1: Line, L2: Line>(line1: &L1, line2: &L2) -> Option<(f64, f64)> {
    let (Coord2(x1, y1), Coord2(x2, y2)) = line1.points();
    let (Coord2(x3, y3), Coord2(x4, y4)) = line2.points();

    let denominator = (y4-y3)*(x2-x1) - (x4-x3)*(y2-y1);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((x4-x3)*(y1-y3) - (y4-y3)*(x1-x3)) / denominator;
    let ub = ((x2-x1)*(y1-y3) - (y2-y1)*(x1-x3)) / denominator;

    if ua >= 0.0 && ua <= 1.0 && ub >= 0.0 && ub <= 1.0 {
        Some((ua, ub))
    } else {
        None
    }
}

///
/// Returns the point at which two line segments intersect (if they intersect)
///
pub fn line_intersects_line<L1: Line, L2: Line>(line1: &L1, line2: &L2) -> Option<Coord2> {
    line_intersection_parameters(line1, line2)
        .map(|(ua, _ub)| line1.point_at_pos(ua))
}
