use super::super::coordinate::*;

use serde::{Serialize, Deserialize};

///
/// An axis-aligned bounding box
///
/// Unlike a normal point tuple this always represents its bounds in minimum/maximum order. Boxes with a
/// zero width or height are valid (a horizontal line has a bounding box with no height)
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Coord2,
    max: Coord2
}

impl Bounds {
    ///
    /// Returns a bounding box with the specified corners (which are sorted so that min is less than max)
    ///
    #[inline]
    pub fn from_min_max(min: Coord2, max: Coord2) -> Bounds {
        Bounds {
            min: Coord2::from_smallest_components(min, max),
            max: Coord2::from_biggest_components(min, max)
        }
    }

    ///
    /// Returns an empty bounding box at the origin
    ///
    #[inline]
    pub fn empty() -> Bounds {
        Bounds::from_min_max(Coord2::origin(), Coord2::origin())
    }

    ///
    /// Creates the bounding box that contains all of a set of points (an empty box at the origin if there are none)
    ///
    pub fn bounds_for_points<PointIter: IntoIterator<Item=Coord2>>(points: PointIter) -> Bounds {
        let mut points = points.into_iter();

        match points.next() {
            None        => Bounds::empty(),
            Some(first) => points.fold(Bounds { min: first, max: first }, |bounds, point| {
                Bounds {
                    min: Coord2::from_smallest_components(bounds.min, point),
                    max: Coord2::from_biggest_components(bounds.max, point)
                }
            })
        }
    }

    ///
    /// Returns the minimum point of this bounding box
    ///
    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    ///
    /// Returns the maximum point of this bounding box
    ///
    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }

    ///
    /// The area covered by this bounding box
    ///
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    ///
    /// The square of the length of the diagonal of this bounding box
    ///
    /// Unlike the area, this is only small when both sides are small: a long horizontal line has no area
    /// but a large diagonal.
    ///
    #[inline]
    pub fn diagonal_squared(&self) -> f64 {
        let diagonal = self.max - self.min;
        diagonal.dot(&diagonal)
    }

    ///
    /// True if this box is thinner than the tolerance in either direction
    ///
    #[inline]
    pub fn is_thin(&self, tolerance: f64) -> bool {
        self.width() < tolerance || self.height() < tolerance
    }

    ///
    /// Returns true if this bounding box overlaps another (boxes that are just touching count as overlapping)
    ///
    #[inline]
    pub fn overlaps(&self, target: &Bounds) -> bool {
        self.min.x() <= target.max.x()
            && self.max.x() >= target.min.x()
            && self.min.y() <= target.max.y()
            && self.max.y() >= target.min.y()
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    pub fn union(self, target: Bounds) -> Bounds {
        Bounds::from_min_max(Coord2::from_smallest_components(self.min, target.min), Coord2::from_biggest_components(self.max, target.max))
    }
}
