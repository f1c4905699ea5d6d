use super::curve::*;
use super::super::error::*;
use super::super::coordinate::*;

use std::slice;

///
/// An ordered list of bezier curves that together describe a path
///
/// Neighbouring curves usually share an end point, but they don't have to: a break between two curves
/// is a real discontinuity rather than a join.
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct BezierSet {
    curves: Vec<Bezier>
}

///
/// A position along a `BezierSet`: the index of a curve and a t value within that curve
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetPosition {
    /// The index of the curve within the set
    pub curve: usize,

    /// The t value (from 0 to 1) along the curve
    pub t: f64
}

impl SetPosition {
    ///
    /// Converts a parameter along a whole set (the curve index plus the t value along that curve) into a position
    ///
    /// `num_curves` is the number of curves in the set. The end of the last curve is represented by the parameter
    /// `num_curves` (which becomes t=1 on the last curve); anything negative or past that is an error.
    ///
    pub fn from_set_parameter(parameter: f64, num_curves: usize) -> CurveResult<SetPosition> {
        let end = num_curves as f64;

        if !(parameter >= 0.0 && parameter <= end) || num_curves == 0 {
            Err(CurveError::InvalidParameter(parameter))
        } else if parameter == end {
            Ok(SetPosition { curve: num_curves-1, t: 1.0 })
        } else {
            let curve = parameter.floor();
            Ok(SetPosition { curve: curve as usize, t: parameter - curve })
        }
    }

    ///
    /// Converts this position back to a parameter along the whole set
    ///
    #[inline]
    pub fn to_set_parameter(&self) -> f64 {
        (self.curve as f64) + self.t
    }
}

impl BezierSet {
    ///
    /// Creates a set from a list of curves
    ///
    pub fn from_curves(curves: Vec<Bezier>) -> BezierSet {
        BezierSet { curves }
    }

    ///
    /// Creates a set from the anchor points of a slider
    ///
    /// Each run of points becomes the control points of one curve. A new curve starts wherever a point is
    /// approximately the same as the point before it (so the repeated point ends one curve and starts the next).
    /// Every curve must end up with at least two points: a set ending in a repeated point is an error.
    ///
    pub fn from_raw_points(raw_points: &[Coord2]) -> CurveResult<BezierSet> {
        let mut curves          = vec![];
        let mut current_curve   = vec![];
        let mut last_point      = None;

        for point in raw_points.iter() {
            let is_break = last_point.map(|last: Coord2| last.is_near_to(point)).unwrap_or(false);

            if is_break && !current_curve.is_empty() {
                curves.push(Bezier::new(current_curve)?);
                current_curve = vec![];
            }

            current_curve.push(*point);
            last_point = Some(*point);
        }

        if !current_curve.is_empty() {
            curves.push(Bezier::new(current_curve)?);
        }

        Ok(BezierSet { curves })
    }

    ///
    /// The curves in this set
    ///
    #[inline]
    pub fn curves(&self) -> &[Bezier] {
        &self.curves
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Bezier> {
        self.curves.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<&Bezier> {
        self.curves.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Bezier> {
        self.curves.last()
    }

    ///
    /// Returns the same path running in the opposite direction (each curve is reversed, as is their order)
    ///
    pub fn reverse(&self) -> BezierSet {
        BezierSet {
            curves: self.curves.iter().rev().map(|curve| curve.reverse()).collect()
        }
    }

    ///
    /// Returns a copy of this set moved by an offset
    ///
    pub fn translate(&self, offset: Coord2) -> BezierSet {
        BezierSet {
            curves: self.curves.iter().map(|curve| curve.translate(offset)).collect()
        }
    }

    ///
    /// Returns the point at a position along this set
    ///
    pub fn point_at(&self, position: SetPosition) -> CurveResult<Coord2> {
        self.curves.get(position.curve)
            .map(|curve| curve.point_at_pos(position.t))
            .ok_or_else(|| CurveError::InvalidParameter(position.to_set_parameter()))
    }

    ///
    /// Returns the part of this set before a position (the curve at the position is cut short)
    ///
    pub fn truncate_at(&self, position: SetPosition) -> BezierSet {
        if position.curve >= self.curves.len() {
            return self.clone();
        }

        let mut curves      = self.curves[0..position.curve].to_vec();
        let (last_curve, _) = self.curves[position.curve].subdivide(position.t);
        curves.push(last_curve);

        BezierSet { curves }
    }
}

impl<'a> IntoIterator for &'a BezierSet {
    type Item       = &'a Bezier;
    type IntoIter   = slice::Iter<'a, Bezier>;

    fn into_iter(self) -> Self::IntoIter {
        self.curves.iter()
    }
}

impl From<Vec<Bezier>> for BezierSet {
    fn from(curves: Vec<Bezier>) -> BezierSet {
        BezierSet::from_curves(curves)
    }
}
