use super::super::consts::*;
use super::super::error::*;
use super::super::coordinate::*;

///
/// A bezier curve of any supported order
///
/// The curve is described by its control points: the first and last are the ends of the curve and
/// the others pull it towards them. A curve with 2 points is a straight line, 3 points is a
/// quadratic curve and 4 points is a cubic curve. The number of points is checked when the curve
/// is created, so every `Bezier` has between 2 and `MAX_FACTORIAL+1` control points.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier {
    points: Vec<Coord2>
}

impl Bezier {
    ///
    /// Creates a new bezier curve from its control points
    ///
    pub fn new(points: Vec<Coord2>) -> CurveResult<Bezier> {
        if points.len() < 2 {
            Err(CurveError::TooFewControlPoints(points.len()))
        } else if points.len() > MAX_FACTORIAL+1 {
            Err(CurveError::TooManyControlPoints(points.len()))
        } else {
            Ok(Bezier { points })
        }
    }

    ///
    /// Creates the curve representing a straight line between two points
    ///
    pub fn line(start: Coord2, end: Coord2) -> Bezier {
        Bezier { points: vec![start, end] }
    }

    ///
    /// Creates a curve from points produced by transforming another curve's points (so the count is already known to be valid)
    ///
    #[inline]
    pub(crate) fn from_valid_points(points: Vec<Coord2>) -> Bezier {
        debug_assert!(points.len() >= 2 && points.len() <= MAX_FACTORIAL+1);

        Bezier { points }
    }

    ///
    /// The control points for this curve
    ///
    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    ///
    /// The number of control points in this curve
    ///
    #[inline]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    ///
    /// The order of the polynomial describing this curve (1 for a line, 2 for a quadratic, 3 for a cubic)
    ///
    #[inline]
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    ///
    /// The start point of this curve
    ///
    #[inline]
    pub fn start_point(&self) -> Coord2 {
        self.points[0]
    }

    ///
    /// The end point of this curve
    ///
    #[inline]
    pub fn end_point(&self) -> Coord2 {
        self.points[self.points.len()-1]
    }

    ///
    /// Returns the same curve running in the opposite direction
    ///
    pub fn reverse(&self) -> Bezier {
        Bezier::from_valid_points(self.points.iter().rev().copied().collect())
    }

    ///
    /// Returns a copy of this curve with a transformation applied to every control point
    ///
    pub fn map_points<TransformFn: Fn(Coord2) -> Coord2>(&self, transform: TransformFn) -> Bezier {
        Bezier::from_valid_points(self.points.iter().map(|point| transform(*point)).collect())
    }

    ///
    /// Returns a copy of this curve moved by an offset
    ///
    pub fn translate(&self, offset: Coord2) -> Bezier {
        self.map_points(|point| point + offset)
    }
}
