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

//! Popover and alert content plus the alert presentation state machine.

use std::time::Duration;

use log::{info, warn};
use thiserror::Error;

use crate::geometry::LocationPoint;
use crate::location::{LocationError, LocationService};

/// Duration of overlay present/dismiss animations.
pub const OVERLAY_ANIMATION: Duration = Duration::from_millis(200);

pub const LOCATION_HEADER: &str = "Your Location";
pub const ERROR_HEADER: &str = "Error";
pub const ERROR_MESSAGE: &str = "Unable to find your location.";
pub const OK_BUTTON: &str = "OK";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverlayError {
    #[error("cannot {action} an alert that is {from}")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
}

/// Static informational panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popover {
    pub header: String,
    pub message: String,
    pub translucent: bool,
}

impl Popover {
    /// The "Information" panel shown from the toolbar.
    #[must_use]
    pub fn information() -> Self {
        Self {
            header: "Information".to_string(),
            message: "This is the map to locate places easily using GPS.".to_string(),
            translucent: true,
        }
    }
}

/// Content of a modal alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertConfig {
    pub header: String,
    pub message: String,
    pub buttons: Vec<String>,
}

impl AlertConfig {
    /// Alert reporting a position fix.
    #[must_use]
    pub fn location(point: &LocationPoint) -> Self {
        Self {
            header: LOCATION_HEADER.to_string(),
            message: format_location_message(point),
            buttons: vec![OK_BUTTON.to_string()],
        }
    }

    /// Alert shown when no position could be obtained.
    #[must_use]
    pub fn location_error() -> Self {
        Self {
            header: ERROR_HEADER.to_string(),
            message: ERROR_MESSAGE.to_string(),
            buttons: vec![OK_BUTTON.to_string()],
        }
    }
}

/// `Longitude: <lon>, Latitude: <lat>` with shortest round-trip number formatting.
#[must_use]
pub fn format_location_message(point: &LocationPoint) -> String {
    format!(
        "Longitude: {}, Latitude: {}",
        format_coordinate(point.longitude),
        format_coordinate(point.latitude)
    )
}

/// Negative zero prints as `0` and magnitudes below 1e-6 use exponent notation.
fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() < 1e-6 {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Where a find-location alert is in its lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AlertState {
    #[default]
    Idle,
    Fetching,
    SuccessPresented(AlertConfig),
    ErrorPresented(AlertConfig),
    Dismissed,
}

impl AlertState {
    fn name(&self) -> &'static str {
        match self {
            AlertState::Idle => "idle",
            AlertState::Fetching => "fetching",
            AlertState::SuccessPresented(_) => "presenting a location",
            AlertState::ErrorPresented(_) => "presenting an error",
            AlertState::Dismissed => "dismissed",
        }
    }
}

/// State machine for one find-location alert.
///
/// `Idle -> Fetching -> SuccessPresented | ErrorPresented -> Dismissed`.
#[derive(Debug, Clone, Default)]
pub struct AlertFlow {
    state: AlertState,
}

impl AlertFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &AlertState {
        &self.state
    }

    /// Alert content while presented.
    #[must_use]
    pub fn presented(&self) -> Option<&AlertConfig> {
        match &self.state {
            AlertState::SuccessPresented(config) | AlertState::ErrorPresented(config) => Some(config),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_dismissed(&self) -> bool {
        self.state == AlertState::Dismissed
    }

    pub fn begin_fetch(&mut self) -> Result<(), OverlayError> {
        match self.state {
            AlertState::Idle => {
                self.state = AlertState::Fetching;
                Ok(())
            }
            _ => Err(self.invalid("start fetching for")),
        }
    }

    /// Present the outcome of the fetch.
    pub fn resolve(
        &mut self,
        result: Result<LocationPoint, LocationError>,
    ) -> Result<&AlertConfig, OverlayError> {
        if self.state != AlertState::Fetching {
            return Err(self.invalid("resolve"));
        }

        self.present(result);
        self.presented().ok_or_else(|| self.invalid("present"))
    }

    fn present(&mut self, result: Result<LocationPoint, LocationError>) {
        self.state = match result {
            Ok(point) => {
                info!("Find location: {}", point);
                AlertState::SuccessPresented(AlertConfig::location(&point))
            }
            Err(e) => {
                warn!("Find location failed: {}", e);
                AlertState::ErrorPresented(AlertConfig::location_error())
            }
        };
    }

    pub fn dismiss(&mut self) -> Result<(), OverlayError> {
        match self.state {
            AlertState::SuccessPresented(_) | AlertState::ErrorPresented(_) => {
                self.state = AlertState::Dismissed;
                Ok(())
            }
            _ => Err(self.invalid("dismiss")),
        }
    }

    fn invalid(&self, action: &'static str) -> OverlayError {
        OverlayError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }
}

/// Fetch a fresh position and present it, or an error, in a new alert.
pub async fn find_location(service: &dyn LocationService) -> AlertFlow {
    let mut flow = AlertFlow {
        state: AlertState::Fetching,
    };
    flow.present(service.current_position().await);
    flow
}
