use super::settings::*;
use super::arc_length::*;

use owp_curves::*;
use owp_curves::bezier;

///
/// The path followed by a slider
///
/// This is created from the slider's anchor points: every run of points becomes the control points of one bezier
/// curve, and a point that's repeated starts a new curve. Once created a slider curve doesn't change, so the
/// polylines it generates can be cached by whatever is drawing it.
///
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCurve {
    /// The anchor points that this curve was created from
    raw_points: Vec<Coord2>,

    /// The length of the slider set by the map author (which isn't necessarily the length of the path)
    length: f64,

    /// The curves generated from the anchor points
    curves: BezierSet,

    /// Settings used when generating polylines
    settings: SliderSettings
}

impl SliderCurve {
    ///
    /// Creates a slider curve from its anchor points and its length, using the default settings
    ///
    pub fn new(raw_points: Vec<Coord2>, length: f64) -> CurveResult<SliderCurve> {
        SliderCurve::with_settings(raw_points, length, SliderSettings::default())
    }

    ///
    /// Creates a slider curve with specific settings for flattening and offsetting
    ///
    pub fn with_settings(raw_points: Vec<Coord2>, length: f64, settings: SliderSettings) -> CurveResult<SliderCurve> {
        if raw_points.is_empty() {
            return Err(CurveError::EmptyCurve);
        }

        let curves = BezierSet::from_raw_points(&raw_points)?;
        debug!("Slider with {} anchor points has {} curves", raw_points.len(), curves.len());

        Ok(SliderCurve {
            raw_points: raw_points,
            length:     length,
            curves:     curves,
            settings:   settings
        })
    }

    #[inline]
    pub fn raw_points(&self) -> &[Coord2] {
        &self.raw_points
    }

    ///
    /// The length of this slider as set by the map author
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }

    #[inline]
    pub fn curves(&self) -> &BezierSet {
        &self.curves
    }

    #[inline]
    pub fn settings(&self) -> &SliderSettings {
        &self.settings
    }

    ///
    /// The first anchor point of the slider
    ///
    pub fn start_point(&self) -> Coord2 {
        self.raw_points[0]
    }

    ///
    /// The last anchor point of the slider
    ///
    pub fn end_point(&self) -> Coord2 {
        self.raw_points[self.raw_points.len()-1]
    }

    ///
    /// Flattens the centre line of the slider into a polyline
    ///
    pub fn flatten_centre_points(&self) -> CurveResult<Vec<Coord2>> {
        bezier::flatten_set(&self.curves, &self.settings.curve)
    }

    ///
    /// Generates the outline of the slider, `radius` away from the centre line on both sides
    ///
    /// The outline is one side of the slider followed by the other, with round ends. It's a closed polygon
    /// suitable for drawing the body of the slider or hit-testing against it.
    ///
    pub fn flatten_contour_points(&self, radius: f64) -> CurveResult<Vec<Coord2>> {
        bezier::offset_contour(&self.curves, radius, &self.settings.curve)
    }

    ///
    /// The bounding box of the centre line of this slider
    ///
    pub fn bounding_box(&self) -> Bounds {
        self.curves.iter()
            .map(|curve| curve.bounding_box())
            .reduce(|bounds, curve_bounds| bounds.union(curve_bounds))
            .unwrap_or_else(Bounds::empty)
    }

    ///
    /// Builds the table of distances along the flattened centre line
    ///
    pub fn arc_length_table(&self) -> CurveResult<ArcLengthTable> {
        Ok(ArcLengthTable::from_points(self.flatten_centre_points()?))
    }
}
