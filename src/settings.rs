use super::slider_curve::*;

use owp_curves::*;

use serde::{Serialize, Deserialize};

///
/// Settings used when generating the polylines for a slider
///
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderSettings {
    /// Settings for flattening and offsetting the curves that make up the slider
    pub curve: CurveSettings
}

///
/// The definition of a slider as it's stored in a JSON file
///
/// For example: `{ "points": [[0,0], [50,0], [50,50]], "length": 80.0 }`. The settings are optional and any
/// values left out use their defaults.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderDefinition {
    /// The anchor points of the slider
    pub points: Vec<Coord2>,

    /// The length of the slider, as set by the map author
    pub length: f64,

    #[serde(default)]
    pub settings: SliderSettings
}

impl SliderDefinition {
    ///
    /// Reads a slider definition from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<SliderDefinition, serde_json::Error> {
        serde_json::from_str(json)
    }

    ///
    /// Creates the slider curve described by this definition
    ///
    pub fn to_slider_curve(&self) -> CurveResult<SliderCurve> {
        SliderCurve::with_settings(self.points.clone(), self.length, self.settings)
    }
}
