//! Radial-meter animation math.

/// Fixed sweep duration for the meter animation.
pub const GAUGE_DURATION_MS: u64 = 1000;

/// Ease-out-quadratic interpolation: fast start, gentle settle.
pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Meter value for one animation frame.
///
/// Sweeps from 0 to `score` over `duration_ms`; progress past the end of
/// the duration pins at the final score.
pub fn frame_value(score: u8, elapsed_ms: u64, duration_ms: u64) -> u8 {
    if duration_ms == 0 {
        return score;
    }
    let progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    (f64::from(score) * ease_out_quad(progress)).floor() as u8
}
