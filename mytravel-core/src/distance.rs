//! Great-circle distance between two coordinates.

use geo::Coord;

/// Mean Earth radius used by [`haversine_km`], in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance in kilometres between `from` and `to`.
///
/// Coordinates are degrees with `x = longitude` and `y = latitude`. Inputs
/// are not range-checked: out-of-range values propagate through the formula
/// and non-finite values yield `NaN`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use mytravel_core::haversine_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let east = Coord { x: 1.0, y: 0.0 };
///
/// assert_eq!(haversine_km(origin, origin), 0.0);
/// assert!((haversine_km(origin, east) - 111.195).abs() < 0.001);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is inherently floating-point"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + from.y.to_radians().cos() * to.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push near-antipodal inputs just past 1.0; NaN must survive.
    let bounded = if half_chord > 1.0 { 1.0 } else { half_chord };
    2.0 * EARTH_RADIUS_KM * bounded.sqrt().asin()
}
