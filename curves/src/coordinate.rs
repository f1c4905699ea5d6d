use super::consts::*;

use serde::{Serialize, Deserialize};

use std::ops::*;

///
/// Represents a 2D point in game-world coordinates
///
/// Serializes as a `[x, y]` pair, which is how anchor points are written in slider definitions.
///
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// Returns the origin coordinate
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    ///
    /// X component of this coordinate
    ///
    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    ///
    /// Y component of this coordinate
    ///
    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Returns a point made up of the biggest components of the two points
    ///
    #[inline]
    pub fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    ///
    /// Returns a point made up of the smallest components of the two points
    ///
    #[inline]
    pub fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    ///
    /// Computes the dot product for this vector along with another vector
    ///
    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0*target.0 + self.1*target.1
    }

    ///
    /// Computes the z component of the cross product of this vector and another (treating both as lying in the xy plane)
    ///
    #[inline]
    pub fn cross(&self, target: &Coord2) -> f64 {
        self.0*target.1 - self.1*target.0
    }

    ///
    /// Computes the distance between this coordinate and another
    ///
    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        let dist_x = target.0-self.0;
        let dist_y = target.1-self.1;

        f64::sqrt(dist_x*dist_x + dist_y*dist_y)
    }

    ///
    /// Computes the magnitude of this vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    ///
    /// Treating this as a vector, returns a unit vector in the same direction
    ///
    /// The zero vector has no direction, so this returns the origin for it
    ///
    #[inline]
    pub fn to_unit_vector(&self) -> Coord2 {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            Coord2::origin()
        } else {
            *self * (1.0/magnitude)
        }
    }

    ///
    /// Treating this as a vector, returns the vector rotated by 90 degrees anticlockwise
    ///
    #[inline]
    pub fn perpendicular(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// The angle of this vector from the x axis (in radians, in the range -pi..pi)
    ///
    #[inline]
    pub fn angle(&self) -> f64 {
        f64::atan2(self.1, self.0)
    }

    ///
    /// Rotates this point about the origin by an angle (in radians)
    ///
    #[inline]
    pub fn rotate(&self, angle: f64) -> Coord2 {
        let (sin, cos) = angle.sin_cos();

        Coord2(self.0*cos - self.1*sin, self.0*sin + self.1*cos)
    }

    ///
    /// True if this point is approximately the same as another one
    ///
    /// Points are the same if both of their components are within `SMALL_DISTANCE` of each other.
    ///
    #[inline]
    pub fn is_near_to(&self, target: &Coord2) -> bool {
        (self.0-target.0).abs() < SMALL_DISTANCE && (self.1-target.1).abs() < SMALL_DISTANCE
    }
}

impl Add<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Sub<Coord2> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl Mul<f64> for Coord2 {
    type Output=Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}

impl Neg for Coord2 {
    type Output=Coord2;

    #[inline]
    fn neg(self) -> Coord2 {
        Coord2(-self.0, -self.1)
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

///
/// Removes points that are approximately the same as the point before them
///
/// Each point is compared to its predecessor in the input, so a run of points that creeps
/// along in steps smaller than `SMALL_DISTANCE` collapses to its first point.
///
pub fn unique_points(points: &[Coord2]) -> Vec<Coord2> {
    use itertools::Itertools;

    points.first().copied().into_iter()
        .chain(points.iter()
            .tuple_windows()
            .filter(|(last, next)| !last.is_near_to(next))
            .map(|(_, next)| *next))
        .collect()
}

///
/// Computes the signed area of a closed polygon (positive when the points run anticlockwise with the y axis pointing up)
///
pub fn contour_area(contour: &[Coord2]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for idx in 0..contour.len() {
        let this_point = contour[idx];
        let next_point = contour[(idx+1) % contour.len()];

        area += this_point.cross(&next_point);
    }

    area / 2.0
}
