use owp_curves::*;

///
/// The distance along a polyline to each of its points
///
/// The distances are measured along the polyline itself. For a slider this is the geometric length of the
/// flattened centre line, which isn't necessarily the same as the length set by the map author.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ArcLengthTable {
    points:     Vec<Coord2>,
    lengths:    Vec<f64>
}

impl ArcLengthTable {
    ///
    /// Measures a polyline
    ///
    pub fn from_points(points: Vec<Coord2>) -> ArcLengthTable {
        let mut lengths     = Vec::with_capacity(points.len());
        let mut total       = 0.0;
        let mut last_point  = None;

        for point in points.iter() {
            if let Some(last_point) = last_point {
                total += point.distance_to(&last_point);
            }

            lengths.push(total);
            last_point = Some(*point);
        }

        ArcLengthTable { points, lengths }
    }

    #[inline]
    pub fn points(&self) -> &[Coord2] {
        &self.points
    }

    ///
    /// The distance from the start of the polyline to each point (this never decreases)
    ///
    #[inline]
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    ///
    /// The length of the whole polyline
    ///
    pub fn total_length(&self) -> f64 {
        self.lengths.last().copied().unwrap_or(0.0)
    }

    ///
    /// Finds the index of the point that starts the line segment containing the specified length
    ///
    /// This is the last point before the first one that's further than `length` along the polyline. Lengths
    /// at or beyond the end of the polyline have no segment and return `None`.
    ///
    pub fn index_for_length(&self, length: f64) -> Option<usize> {
        let first_beyond = self.lengths.partition_point(|point_length| *point_length <= length);

        if first_beyond >= self.lengths.len() {
            None
        } else {
            Some(first_beyond.max(1) - 1)
        }
    }

    ///
    /// Finds the point that's a particular distance along the polyline
    ///
    /// Distances before the start or after the end are clamped to the ends of the line. There's no point
    /// if the polyline is empty.
    ///
    pub fn point_at_distance(&self, distance: f64) -> Option<Coord2> {
        let last_point = *self.points.last()?;

        let idx = match self.index_for_length(distance) {
            Some(idx)   => idx,
            None        => { return Some(last_point); }
        };

        let start = self.points[idx];
        if idx+1 >= self.points.len() {
            return Some(start);
        }

        let start_length    = self.lengths[idx];
        let segment_length  = self.lengths[idx+1] - start_length;
        let end             = self.points[idx+1];

        if segment_length <= 0.0 {
            return Some(start);
        }

        let t = ((distance - start_length) / segment_length).max(0.0);
        Some(start + (end - start)*t)
    }
}
