//! Elliptical (WGS84) Mercator projection into meters.
//!
//! Used to turn feature coordinates into the projected screen space that the
//! extent accumulates over. +Y points north.

use super::Vec2;

const R_MAJOR: f64 = 6_378_137.0;
const R_MINOR: f64 = 6_356_752.3142;

/// Latitudes beyond this are clamped; the projection diverges at the poles.
pub const MAX_LATITUDE: f64 = 89.5;

#[inline]
pub fn lon_to_x(lon: f64) -> f64 {
    R_MAJOR * lon.to_radians()
}

/// Northing of `lat`: `a * (atanh(sin phi) - e * atanh(e * sin phi))`.
///
/// Exactly zero at the equator and odd in `lat`.
pub fn lat_to_y(lat: f64) -> f64 {
    let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let ratio = R_MINOR / R_MAJOR;
    let eccent = (1.0 - ratio * ratio).sqrt();

    let sin_phi = phi.sin();
    R_MAJOR * (sin_phi.atanh() - eccent * (eccent * sin_phi).atanh())
}

/// Projects a latitude/longitude pair (degrees) to screen space.
#[inline]
pub fn project(lat: f64, lon: f64) -> Vec2 {
    Vec2::new(lon_to_x(lon) as f32, lat_to_y(lat) as f32)
}
