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

//! Screen model for a map that follows the user's location.
//!
//! The crate owns everything about the screen except drawing pixels: the map
//! (basemap style and imagery layers), the view it is bound to, the graphics
//! shown on it, the periodic user-location refresh, and the content and state
//! of the popover and the find-location alert. Renderers read the shared
//! [`ScreenState`] and draw it however they like.
//!
//! - **Model**: [`LocationPoint`], [`MarkerSymbol`], [`Graphic`], [`Map`], [`MapView`]
//! - **Location**: the [`LocationService`] trait plus [`FixedLocation`] and [`ProviderChain`]
//! - **Lifecycle**: [`MapScreen`] configured by [`ScreenConfig`], with a single
//!   cancellable [`RefreshTask`] for periodic updates
//! - **Overlays**: [`Popover`] and the [`AlertFlow`] state machine
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use map_screen::{FixedLocation, LocationPoint, MapScreen, ScreenConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let screen = MapScreen::new(ScreenConfig::one_shot_with_fallback()).unwrap();
//! let service = Arc::new(FixedLocation::new(LocationPoint::new(40.0, -75.0).unwrap()));
//!
//! let outcome = screen.mount(service).await.unwrap();
//! assert_eq!(screen.center(), Some(outcome.location));
//! assert_eq!(screen.graphics().len(), 2); // user marker + reference marker
//! # }
//! ```

pub mod error;
pub mod geometry;
pub mod graphics;
pub mod location;
pub mod map;
pub mod overlay;
pub mod refresh;
pub mod screen;
pub mod state;
pub mod symbol;
pub mod view;

#[cfg(test)]
mod testing;

pub use error::ScreenError;
pub use geometry::{GeometryError, LocationPoint};
pub use graphics::{Graphic, GraphicId, GraphicRole, GraphicsCollection};
pub use location::{FixedLocation, LocationError, LocationService, PositionFuture, ProviderChain};
pub use map::{Basemap, Layer, LayerKind, Map, MapError, NOAA_RADAR_URL};
pub use overlay::{AlertConfig, AlertFlow, AlertState, OverlayError, Popover};
pub use refresh::{Notifier, RefreshTask, DEFAULT_REFRESH_PERIOD};
pub use screen::{
    Lifecycle, MapScreen, MountOutcome, ScreenConfig, DEFAULT_FALLBACK_LOCATION, REFERENCE_LOCATION,
};
pub use state::{FixSource, FixStats, ScreenState, SharedScreenState, UserMarker};
pub use symbol::{MarkerSymbol, Outline, Rgba};
pub use view::{MapView, ViewError};
