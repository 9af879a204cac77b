//! Plane and geographic geometry.
//!
//! Euclidean and great-circle distances, axis-aligned collision testing,
//! and circular placement. Value types are plain `Copy` records with no
//! identity; geographic ranges are not validated, callers own their
//! coordinates.

/// Earth radius in metres (WGS-84 equatorial), used by [`geo_distance`].
pub const EARTH_RADIUS_M: f64 = 6378137.0;

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A geographic coordinate in degrees.
///
/// Longitude is conventionally within `[-180, 180]` and latitude within
/// `[-90, 90]`, but neither is enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

/// An axis-aligned box; `width`/`height` are assumed non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Euclidean distance between two points.
///
/// # Examples
/// ```
/// use kitbag::geom::{distance, Point};
/// let d = distance(Point { x: 0.0, y: 0.0 }, Point { x: 3.0, y: 4.0 });
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt()
}

/// Square root of the sum of squares, short-circuiting on infinities.
///
/// Any `±∞` component makes the result `+∞` immediately, before the
/// accumulation runs.
pub fn hypot(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    for &v in values {
        if v.is_infinite() {
            return f64::INFINITY;
        }
        sum += v * v;
    }
    sum.sqrt()
}

/// Haversine great-circle distance between two geographic points, in
/// metres.
///
/// Inputs are in degrees and converted to radians internally; the sphere
/// radius is [`EARTH_RADIUS_M`].
///
/// # Examples
/// ```
/// use kitbag::geom::{geo_distance, GeoPoint};
/// let shenzhen = GeoPoint { lng: 114.05787, lat: 22.543099 };
/// let guangzhou = GeoPoint { lng: 113.26453, lat: 23.129163 };
/// let d = geo_distance(shenzhen, guangzhou);
/// assert!((d - 104_000.0).abs() < 2_000.0); // ~104 km
/// ```
pub fn geo_distance(g1: GeoPoint, g2: GeoPoint) -> f64 {
    let lat1 = g1.lat.to_radians();
    let lat2 = g2.lat.to_radians();
    let delta_lat = lat1 - lat2;
    let delta_lng = g1.lng.to_radians() - g2.lng.to_radians();
    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    2.0 * h.sqrt().asin() * EARTH_RADIUS_M
}

/// Point on a circle of `radius` around the origin, `deg` degrees
/// clockwise from north (the positive-y "up" direction).
///
/// Both coordinates are rounded to the nearest integer; the intended
/// consumers place things on pixel grids, and the rounding is part of
/// the contract.
///
/// # Examples
/// ```
/// use kitbag::geom::{circular_position, Point};
/// assert_eq!(circular_position(0.0, 100.0), Point { x: 0.0, y: 100.0 });
/// assert_eq!(circular_position(90.0, 100.0), Point { x: 100.0, y: 0.0 });
/// ```
pub fn circular_position(deg: f64, radius: f64) -> Point {
    let rad = deg.to_radians();
    Point {
        x: (radius * rad.sin()).round(),
        y: (radius * rad.cos()).round(),
    }
}

/// Whether two axis-aligned boxes overlap.
///
/// The test is strict on every edge: boxes that merely touch do **not**
/// collide.
///
/// # Examples
/// ```
/// use kitbag::geom::{collides, Rect};
/// let a = Rect { left: 0.0, top: 0.0, width: 10.0, height: 10.0 };
/// let touching = Rect { left: 10.0, top: 0.0, width: 10.0, height: 10.0 };
/// let overlapping = Rect { left: 9.0, top: 0.0, width: 10.0, height: 10.0 };
/// assert!(!collides(&a, &touching));
/// assert!(collides(&a, &overlapping));
/// ```
pub fn collides(a: &Rect, b: &Rect) -> bool {
    a.left + a.width > b.left
        && a.left < b.left + b.width
        && a.top + a.height > b.top
        && a.top < b.top + b.height
}
