use super::set::*;
use super::curve::*;
use super::super::line::*;
use super::super::error::*;
use super::super::settings::*;

///
/// A pair of curves that might intersect, along with how to map their t values back to the original curves
///
struct CurvePair {
    curve1: Bezier,
    curve2: Bezier,

    /// (offset, scale) such that a t value on curve1 is at offset + t*scale on the original curve
    range1: (f64, f64),

    /// (offset, scale) for curve2
    range2: (f64, f64),

    /// Number of times these curves have been subdivided
    depth:  usize
}

///
/// Finds the t values where two curves intersect, using their bounding boxes to discard pieces that can't intersect
///
/// Both curves are split in half until their bounding boxes have a squared diagonal smaller than
/// `settings.intersection_area`, at which point they are treated as lines between their end points. The return
/// value is the list of t values for the first curve and the list of t values for the second, with the values at
/// the same index describing the same intersection.
///
/// The search stops refining once both pieces are small, so the results are approximate: they are within a
/// piece's length of the true intersection. Curves that overlap along part of their length produce one result
/// for every piece in the overlapping region.
///
pub fn curve_intersection_parameters(curve1: &Bezier, curve2: &Bezier, settings: &CurveSettings) -> CurveResult<(Vec<f64>, Vec<f64>)> {
    let mut curve1_t    = vec![];
    let mut curve2_t    = vec![];
    let mut pending     = vec![CurvePair {
        curve1: curve1.clone(),
        curve2: curve2.clone(),
        range1: (0.0, 1.0),
        range2: (0.0, 1.0),
        depth:  0
    }];

    while let Some(pair) = pending.pop() {
        let bounds1 = pair.curve1.bounding_box();
        let bounds2 = pair.curve2.bounding_box();

        if !bounds1.overlaps(&bounds2) {
            continue;
        }

        if bounds1.diagonal_squared() <= settings.intersection_area && bounds2.diagonal_squared() <= settings.intersection_area {
            // Both pieces are small enough to treat as lines
            let line1 = (pair.curve1.start_point(), pair.curve1.end_point());
            let line2 = (pair.curve2.start_point(), pair.curve2.end_point());

            if let Some((t1, t2)) = line_intersection_parameters(&line1, &line2) {
                curve1_t.push(pair.range1.0 + t1*pair.range1.1);
                curve2_t.push(pair.range2.0 + t2*pair.range2.1);
            }

            continue;
        }

        if pair.depth >= settings.max_subdivision_depth {
            warn!("Gave up intersecting curves after {} subdivisions", pair.depth);
            return Err(CurveError::SubdivisionTooDeep { operation: "intersect", depth: pair.depth });
        }

        let (curve1a, curve1b)  = pair.curve1.subdivide(0.5);
        let (curve2a, curve2b)  = pair.curve2.subdivide(0.5);
        let half1               = pair.range1.1 * 0.5;
        let half2               = pair.range2.1 * 0.5;
        let range1a             = (pair.range1.0, half1);
        let range1b             = (pair.range1.0 + half1, half1);
        let range2a             = (pair.range2.0, half2);
        let range2b             = (pair.range2.0 + half2, half2);
        let depth               = pair.depth + 1;

        // Pushed in reverse so the pairs are searched in the order (a, a), (a, b), (b, a), (b, b)
        pending.push(CurvePair { curve1: curve1b.clone(), curve2: curve2b.clone(), range1: range1b, range2: range2b, depth: depth });
        pending.push(CurvePair { curve1: curve1b, curve2: curve2a.clone(), range1: range1b, range2: range2a, depth: depth });
        pending.push(CurvePair { curve1: curve1a.clone(), curve2: curve2b, range1: range1a, range2: range2b, depth: depth });
        pending.push(CurvePair { curve1: curve1a, curve2: curve2a, range1: range1a, range2: range2a, depth: depth });
    }

    Ok((curve1_t, curve2_t))
}

///
/// Finds the first point where two sets of curves cross, and cuts both sets short at that point
///
/// 'First' means the intersection with the lowest position along `set1`: the position along `set2` is whatever
/// position matches that intersection. If the sets don't intersect, they're returned unchanged.
///
pub fn clip_at_first_intersection(set1: &BezierSet, set2: &BezierSet, settings: &CurveSettings) -> CurveResult<(BezierSet, BezierSet)> {
    let mut first_intersection: Option<(f64, f64)> = None;

    for (idx1, curve1) in set1.iter().enumerate() {
        for (idx2, curve2) in set2.iter().enumerate() {
            let (curve1_t, curve2_t) = curve_intersection_parameters(curve1, curve2, settings)?;

            for (t1, t2) in curve1_t.into_iter().zip(curve2_t) {
                let pos1 = (idx1 as f64) + t1;
                let pos2 = (idx2 as f64) + t2;

                if first_intersection.map(|(first1, _)| pos1 < first1).unwrap_or(true) {
                    first_intersection = Some((pos1, pos2));
                }
            }
        }
    }

    match first_intersection {
        None                => {
            debug!("Curve sets of {} and {} curves do not cross, leaving them unclipped", set1.len(), set2.len());
            Ok((set1.clone(), set2.clone()))
        }
        Some((pos1, pos2))  => {
            trace!("Clipping curve sets at {} and {}", pos1, pos2);

            let clipped1 = set1.truncate_at(SetPosition::from_set_parameter(pos1, set1.len())?);
            let clipped2 = set2.truncate_at(SetPosition::from_set_parameter(pos2, set2.len())?);

            Ok((clipped1, clipped2))
        }
    }
}
