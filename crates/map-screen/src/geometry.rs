// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Geographic points and distance helpers.

use std::fmt;

use thiserror::Error;

const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Errors produced when constructing geometry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("coordinate out of range: latitude {latitude}, longitude {longitude}")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationPoint {
    /// Latitude in degrees, -90 to 90.
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180.
    pub longitude: f64,
}

impl LocationPoint {
    /// Create a point, rejecting non-finite or out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeometryError> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if valid {
            Ok(Self { latitude, longitude })
        } else {
            Err(GeometryError::OutOfRange { latitude, longitude })
        }
    }

    /// Great-circle distance to another point in statute miles.
    #[must_use]
    pub fn distance_miles(&self, other: &LocationPoint) -> f64 {
        distance_miles(self, other)
    }
}

impl fmt::Display for LocationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Haversine distance between two points in statute miles.
#[must_use]
pub fn distance_miles(a: &LocationPoint, b: &LocationPoint) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}
