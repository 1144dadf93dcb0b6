use std::{fmt, ops::Add};

use thiserror::Error;

/// Fixed-point scaling factor for geographic coordinates.
///
/// 1e-7 degrees correspond to a resolution of approx. 11mm at the
/// equator, which is more than sufficient and keeps coordinates
/// comparable by `Eq`/`Ord` without any floating-point pitfalls.
const RAW_COORD_SCALE: i64 = 10_000_000;

const COORD_SCALE: f64 = RAW_COORD_SCALE as f64;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

const METERS_PER_LAT_DEG: f64 = EARTH_RADIUS_METERS * std::f64::consts::PI / 180.0;

#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("Coordinate out of range")]
pub struct CoordRangeError;

/// Geographic latitude in the range [-90, 90] degrees.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LatCoord(i64);

impl LatCoord {
    pub const fn min() -> Self {
        Self(-90 * RAW_COORD_SCALE)
    }

    pub const fn max() -> Self {
        Self(90 * RAW_COORD_SCALE)
    }

    pub fn from_deg(deg: f64) -> Self {
        let new = Self((deg * COORD_SCALE).round() as i64);
        debug_assert!(new.is_valid());
        new
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        let new = Self((deg * COORD_SCALE).round() as i64);
        if new.is_valid() {
            Ok(new)
        } else {
            Err(CoordRangeError)
        }
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / COORD_SCALE
    }

    pub fn to_rad(self) -> f64 {
        self.to_deg().to_radians()
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

/// Geographic longitude in the range [-180, 180] degrees.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LngCoord(i64);

impl LngCoord {
    pub const fn min() -> Self {
        Self(-180 * RAW_COORD_SCALE)
    }

    pub const fn max() -> Self {
        Self(180 * RAW_COORD_SCALE)
    }

    pub fn from_deg(deg: f64) -> Self {
        let new = Self((deg * COORD_SCALE).round() as i64);
        debug_assert!(new.is_valid());
        new
    }

    pub fn try_from_deg(deg: f64) -> Result<Self, CoordRangeError> {
        let new = Self((deg * COORD_SCALE).round() as i64);
        if new.is_valid() {
            Ok(new)
        } else {
            Err(CoordRangeError)
        }
    }

    pub fn to_deg(self) -> f64 {
        self.0 as f64 / COORD_SCALE
    }

    pub fn to_rad(self) -> f64 {
        self.to_deg().to_radians()
    }

    pub fn is_valid(self) -> bool {
        self >= Self::min() && self <= Self::max()
    }
}

/// A point on the map.
///
/// The default value (0, 0) is located in the Gulf of Guinea and
/// serves as the well-known placeholder for an unset position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub fn from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Self {
        Self::new(LatCoord::from_deg(lat_deg), LngCoord::from_deg(lng_deg))
    }

    pub fn try_from_lat_lng_deg(lat_deg: f64, lng_deg: f64) -> Result<Self, CoordRangeError> {
        Ok(Self::new(
            LatCoord::try_from_deg(lat_deg)?,
            LngCoord::try_from_deg(lng_deg)?,
        ))
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    /// Great-circle distance between two points (haversine formula).
    pub fn distance(self, other: Self) -> Distance {
        let lat1 = self.lat.to_rad();
        let lat2 = other.lat.to_rad();
        let dlat = lat2 - lat1;
        let dlng = other.lng.to_rad() - self.lng.to_rad();
        let a = (dlat / 2.0).sin() * (dlat / 2.0).sin()
            + lat1.cos() * lat2.cos() * (dlng / 2.0).sin() * (dlng / 2.0).sin();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::from_meters(EARTH_RADIUS_METERS * c)
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.lat.to_deg(), self.lng.to_deg())
    }
}

/// A geodesic distance in meters.
#[derive(Default, Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(km: f64) -> Self {
        Self(km * 1_000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// A rectangular area on the map spanned by its south-west and
/// north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn is_empty(&self) -> bool {
        self.sw.lat() == self.ne.lat() || self.sw.lng() == self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }

    /// A box that covers at least the circle around `center` with
    /// radius `radius`.
    ///
    /// Longitudes are clamped at the antimeridian instead of wrapping
    /// around the map edge. Callers that filter by this box and then
    /// refine with [`MapPoint::distance`] obtain correct results for
    /// all practical trip distances.
    pub fn centered_around(center: MapPoint, radius: Distance) -> Self {
        debug_assert!(center.is_valid());
        debug_assert!(radius.is_valid());
        let lat_delta_deg = radius.to_meters() / METERS_PER_LAT_DEG;
        let sw_lat_deg = (center.lat().to_deg() - lat_delta_deg).max(LatCoord::min().to_deg());
        let ne_lat_deg = (center.lat().to_deg() + lat_delta_deg).min(LatCoord::max().to_deg());
        // Meters per degree of longitude shrink towards the poles.
        let lng_scale = center.lat().to_rad().cos().max(0.01);
        let lng_delta_deg = radius.to_meters() / (METERS_PER_LAT_DEG * lng_scale);
        let sw_lng_deg = (center.lng().to_deg() - lng_delta_deg).max(LngCoord::min().to_deg());
        let ne_lng_deg = (center.lng().to_deg() + lng_delta_deg).min(LngCoord::max().to_deg());
        Self::new(
            MapPoint::from_lat_lng_deg(sw_lat_deg, sw_lng_deg),
            MapPoint::from_lat_lng_deg(ne_lat_deg, ne_lng_deg),
        )
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}
