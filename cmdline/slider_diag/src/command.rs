use super::error::*;

use owp_slider::*;

use serde::{Serialize};

///
/// A command that can be run against a slider
///
#[derive(Clone, Debug, PartialEq)]
pub enum SliderCommand {
    /// Writes out the flattened centre line
    Centre,

    /// Writes out the outline of the slider at the specified radius
    Contour(f64),

    /// Writes out the bounding box of the centre line
    Bounds,

    /// Compares the authored length of the slider with the length of its centre line
    Length
}

///
/// The output of the 'length' command
///
#[derive(Serialize)]
struct LengthSummary {
    authored:   f64,
    geometric:  f64,
    points:     usize
}

impl SliderCommand {
    ///
    /// Runs this command against a slider, returning the JSON it generates
    ///
    pub fn run(&self, slider: &SliderCurve) -> Result<String, DiagError> {
        use self::SliderCommand::*;

        debug!("Running {:?}", self);

        let json = match self {
            Centre          => serde_json::to_string_pretty(&slider.flatten_centre_points()?)?,
            Contour(radius) => serde_json::to_string_pretty(&slider.flatten_contour_points(*radius)?)?,
            Bounds          => serde_json::to_string_pretty(&slider.bounding_box())?,
            Length          => {
                let table = slider.arc_length_table()?;

                serde_json::to_string_pretty(&LengthSummary {
                    authored:   slider.length(),
                    geometric:  table.total_length(),
                    points:     table.points().len()
                })?
            }
        };

        Ok(json)
    }
}
