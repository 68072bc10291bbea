//! The nearest storm reported on a `currently` data point, and the great-circle
//! projection that places it on the map.

use crate::forecast::LatLon;
use crate::types::bearing::Bearing;
use crate::types::measurement::Distance;
use crate::types::units::{DistanceUnit, UnitConversion};
use crate::weather_data::extractor::{get_opt_f64, JsonObject};
use serde::{Deserialize, Serialize};

/// Mean Earth radius used for storm projection, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6372.7976;

impl LatLon {
    /// The point reached by travelling `distance_km` from `self` along the initial
    /// `bearing_degrees` on a sphere of radius [`EARTH_RADIUS_KM`].
    pub fn destination(&self, distance_km: f64, bearing_degrees: f64) -> LatLon {
        let angular_distance = distance_km / EARTH_RADIUS_KM;
        let origin_lat = self.0.to_radians();
        let origin_lon = self.1.to_radians();
        let bearing = bearing_degrees.to_radians();

        let lat = (origin_lat.sin() * angular_distance.cos()
            + origin_lat.cos() * angular_distance.sin() * bearing.cos())
        .asin();
        let lon = origin_lon
            + (bearing.sin() * angular_distance.sin() * origin_lat.cos())
                .atan2(angular_distance.cos() - origin_lat.sin() * lat.sin());

        LatLon(lat.to_degrees(), lon.to_degrees())
    }
}

/// Where the nearest storm can be found relative to the requested location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storm {
    pub bearing: Option<Bearing>,
    /// A distance of zero does not necessarily mean the storm is at the requested
    /// location, only in its vicinity.
    pub distance: Option<Distance>,
    /// Projected position of the storm; known only when bearing, distance and the
    /// forecast location are all known.
    pub location: Option<LatLon>,
}

impl Storm {
    pub fn new(bearing: Option<Bearing>, distance: Option<Distance>, origin: Option<LatLon>) -> Self {
        let location = match (bearing, distance, origin) {
            (Some(bearing), Some(distance), Some(origin)) => Some(origin.destination(
                distance.value_as(DistanceUnit::Kilometer),
                f64::from(bearing.degrees),
            )),
            _ => None,
        };
        Self {
            bearing,
            distance,
            location,
        }
    }

    pub(crate) fn from_json(
        json: &JsonObject,
        units: &UnitConversion,
        origin: Option<LatLon>,
    ) -> Option<Self> {
        let storm = Self::new(
            get_opt_f64(json, "nearestStormBearing").map(Bearing::new),
            get_opt_f64(json, "nearestStormDistance").map(|d| units.distance(d)),
            origin,
        );
        storm.has_data().then_some(storm)
    }

    fn has_data(&self) -> bool {
        self.bearing.is_some() || self.distance.is_some()
    }
}
