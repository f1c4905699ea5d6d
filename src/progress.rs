use owp_curves::*;

///
/// Works out how far along a slider the ball is
///
/// `repeat_length` is the time taken to travel the length of the slider once, and `time_offset` is the time since
/// the slider started. The result is a fraction from 0 (the start of the slider) to 1 (the end). The ball travels
/// forwards on even-numbered repeats and backwards on odd-numbered ones, so it goes back and forth along the
/// slider.
///
pub fn repeat_progress(repeat_length: f64, time_offset: f64) -> CurveResult<f64> {
    if !(repeat_length > 0.0) || !repeat_length.is_finite() {
        return Err(CurveError::InvalidParameter(repeat_length));
    }

    if !time_offset.is_finite() {
        return Err(CurveError::InvalidParameter(time_offset));
    }

    let repeats     = time_offset / repeat_length;
    let repeat_num  = repeats.floor();
    let fraction    = repeats - repeat_num;

    if repeat_num.rem_euclid(2.0) == 1.0 {
        Ok(1.0 - fraction)
    } else {
        Ok(fraction)
    }
}
