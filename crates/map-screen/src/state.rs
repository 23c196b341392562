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

//! Mutable per-screen state shared between the UI and the refresh task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use log::debug;

use crate::geometry::LocationPoint;
use crate::graphics::{Graphic, GraphicId, GraphicRole};
use crate::location::LocationError;
use crate::symbol::MarkerSymbol;
use crate::view::MapView;

/// Where the position shown by the user marker came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixSource {
    /// A real answer from the location service.
    Device,
    /// The configured default location, used after a failed fetch.
    Fallback,
}

impl FixSource {
    fn symbol(self) -> MarkerSymbol {
        match self {
            FixSource::Device => MarkerSymbol::user_location(),
            FixSource::Fallback => MarkerSymbol::fallback(),
        }
    }
}

/// Handle to the single user-location graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMarker {
    pub id: GraphicId,
    pub source: FixSource,
}

/// Counters and last-known values for location fetches.
#[derive(Debug, Clone, Default)]
pub struct FixStats {
    /// Successful device fixes applied to the marker.
    pub fixes: u64,
    /// Failed fetches (initial or refresh).
    pub failures: u64,
    /// Times the fallback location was used.
    pub fallbacks: u64,
    pub last_fix: Option<LocationPoint>,
    pub last_fix_at: Option<DateTime<Utc>>,
    pub last_error: Option<LocationError>,
    pub last_error_at: Option<DateTime<Utc>>,
}

/// Everything a mounted screen mutates.
#[derive(Debug)]
pub struct ScreenState {
    pub view: MapView,
    user_marker: Option<UserMarker>,
    pub stats: FixStats,
}

/// Screen state shared with background tasks.
pub type SharedScreenState = Arc<Mutex<ScreenState>>;

/// Lock shared state, recovering the guard if a previous holder panicked.
pub fn lock(state: &SharedScreenState) -> MutexGuard<'_, ScreenState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ScreenState {
    #[must_use]
    pub fn new(view: MapView) -> Self {
        Self {
            view,
            user_marker: None,
            stats: FixStats::default(),
        }
    }

    #[must_use]
    pub fn into_shared(self) -> SharedScreenState {
        Arc::new(Mutex::new(self))
    }

    #[must_use]
    pub fn user_marker(&self) -> Option<UserMarker> {
        self.user_marker
    }

    /// Show `point` with the user marker.
    ///
    /// The first call creates the graphic. Later calls replace its geometry in
    /// place, and its symbol when the source changes, so the view never holds
    /// more than one user-location graphic.
    pub fn place_user_marker(&mut self, point: LocationPoint, source: FixSource) -> GraphicId {
        match source {
            FixSource::Device => {
                self.stats.fixes += 1;
                self.stats.last_fix = Some(point);
                self.stats.last_fix_at = Some(Utc::now());
            }
            FixSource::Fallback => self.stats.fallbacks += 1,
        }

        if let Some(marker) = self.user_marker {
            if let Some(previous) = self.view.graphics.get(marker.id).map(|g| g.geometry) {
                self.view.graphics.set_geometry(marker.id, point);
                if marker.source != source {
                    self.view.graphics.set_symbol(marker.id, source.symbol());
                    self.user_marker = Some(UserMarker { id: marker.id, source });
                }
                debug!("User marker moved {:.3} mi to {}", previous.distance_miles(&point), point);
                return marker.id;
            }
        }

        let id = self
            .view
            .graphics
            .add(Graphic::new(GraphicRole::UserLocation, point, source.symbol()));
        self.user_marker = Some(UserMarker { id, source });
        debug!("User marker created at {} ({:?})", point, source);
        id
    }

    /// Add a reference marker. Every call adds a new graphic.
    pub fn place_reference_marker(&mut self, point: LocationPoint) -> GraphicId {
        self.view
            .graphics
            .add(Graphic::new(GraphicRole::Reference, point, MarkerSymbol::reference()))
    }

    pub fn record_failure(&mut self, error: &LocationError) {
        self.stats.failures += 1;
        self.stats.last_error = Some(error.clone());
        self.stats.last_error_at = Some(Utc::now());
    }

    /// Copy of the graphics in draw order.
    #[must_use]
    pub fn graphics_snapshot(&self) -> Vec<Graphic> {
        self.view.graphics.iter().cloned().collect()
    }
}
