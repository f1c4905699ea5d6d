use super::curve::*;
use super::super::coordinate::*;

use std::cmp::Ordering;

///
/// Subdivides the bezier curve described by a set of control points at t, returning the control points of the two halves
///
/// This is de Casteljau's algorithm: each pass interpolates between neighbouring points, leaving one fewer point.
/// The first point of each pass belongs to the left-hand curve and the last point to the right-hand curve. The
/// single point left at the end is where the two curves join.
///
pub(crate) fn subdivide_points(points: &[Coord2], t: f64) -> (Vec<Coord2>, Vec<Coord2>) {
    let mut left    = Vec::with_capacity(points.len());
    let mut right   = Vec::with_capacity(points.len());
    let mut weights = points.to_vec();
    let one_minus_t = 1.0-t;

    for len in (1..=weights.len()).rev() {
        left.push(weights[0]);
        right.push(weights[len-1]);

        for idx in 0..(len-1) {
            weights[idx] = weights[idx]*one_minus_t + weights[idx+1]*t;
        }
    }

    // The right-hand curve was collected from its end
    right.reverse();

    (left, right)
}

impl Bezier {
    ///
    /// Given a value t from 0 to 1, finds a point on this curve and subdivides it, returning the two resulting curves
    ///
    pub fn subdivide(&self, t: f64) -> (Bezier, Bezier) {
        let (left, right) = subdivide_points(self.points(), t);

        (Bezier::from_valid_points(left), Bezier::from_valid_points(right))
    }

    ///
    /// Subdivides this curve at several t values at once, returning the pieces in order from the start of the curve
    ///
    /// The t values can be supplied in any order and are clamped to the range 0..1. There is always one more piece
    /// than there are t values (a t value of 0 or 1 produces a piece that is just a point).
    ///
    pub fn subdivide_many(&self, t_values: &[f64]) -> Vec<Bezier> {
        let mut t_values = t_values.iter()
            .filter(|t| !t.is_nan())
            .map(|t| t.max(0.0).min(1.0))
            .collect::<Vec<_>>();
        t_values.sort_by(|t1, t2| t1.partial_cmp(t2).unwrap_or(Ordering::Equal));

        let mut pieces      = Vec::with_capacity(t_values.len()+1);
        let mut remaining   = self.clone();
        let mut last_t      = 0.0;

        for t in t_values {
            // After each subdivision, the remaining curve covers last_t..1 of the original, so rescale t into that range
            let span        = 1.0-last_t;
            let relative_t  = if span > 0.0 { (t-last_t)/span } else { 0.0 };

            let (piece, rest) = remaining.subdivide(relative_t);
            pieces.push(piece);

            remaining   = rest;
            last_t      = t;
        }

        pieces.push(remaining);
        pieces
    }
}
