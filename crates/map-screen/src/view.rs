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

//! Map view: binds a [`Map`] to a rendering surface.

use thiserror::Error;

use crate::geometry::LocationPoint;
use crate::graphics::GraphicsCollection;
use crate::map::Map;

pub const MIN_ZOOM: f64 = 0.0;
pub const MAX_ZOOM: f64 = 20.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ViewError {
    #[error("rendering surface identifier is empty")]
    ContainerMissing,

    #[error("zoom level {0} outside 0..=20")]
    InvalidZoom(f64),
}

/// A map bound to a named rendering surface, with a center, zoom and graphics.
#[derive(Debug, Clone)]
pub struct MapView {
    pub map: Map,
    container: String,
    zoom: f64,
    center: Option<LocationPoint>,
    pub graphics: GraphicsCollection,
}

impl MapView {
    /// Bind `map` to the surface named `container` at `zoom`.
    pub fn new(map: Map, container: &str, zoom: f64) -> Result<Self, ViewError> {
        let container = container.trim();
        if container.is_empty() {
            return Err(ViewError::ContainerMissing);
        }
        validate_zoom(zoom)?;

        Ok(Self {
            map,
            container: container.to_string(),
            zoom,
            center: None,
            graphics: GraphicsCollection::new(),
        })
    }

    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), ViewError> {
        validate_zoom(zoom)?;
        self.zoom = zoom;
        Ok(())
    }

    /// Center point, `None` until the first fix has been placed.
    #[must_use]
    pub fn center(&self) -> Option<LocationPoint> {
        self.center
    }

    pub fn set_center(&mut self, center: LocationPoint) {
        self.center = Some(center);
    }
}

fn validate_zoom(zoom: f64) -> Result<(), ViewError> {
    if zoom.is_finite() && (MIN_ZOOM..=MAX_ZOOM).contains(&zoom) {
        Ok(())
    } else {
        Err(ViewError::InvalidZoom(zoom))
    }
}
