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

//! The map screen: one owned component covering both the tracking and the
//! one-shot-with-fallback behaviours.
//!
//! Lifecycle: [`MapScreen::new`] builds the map and view, [`MapScreen::mount`]
//! performs the linear startup sequence, [`MapScreen::teardown`] (or drop)
//! stops the refresh task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::{info, warn};

use crate::error::ScreenError;
use crate::geometry::LocationPoint;
use crate::graphics::{Graphic, GraphicId};
use crate::location::LocationService;
use crate::map::{Basemap, Layer, Map, NOAA_RADAR_URL};
use crate::overlay::{self, AlertFlow, Popover};
use crate::refresh::{self, Notifier, RefreshTask, DEFAULT_REFRESH_PERIOD};
use crate::state::{self, FixSource, FixStats, ScreenState, SharedScreenState, UserMarker};
use crate::view::MapView;

/// Rendering surface the screen binds to by default.
pub const DEFAULT_CONTAINER: &str = "container";

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 12.0;

/// Fixed reference marker location.
pub const REFERENCE_LOCATION: LocationPoint = LocationPoint {
    latitude: 41.926065,
    longitude: -83.837319,
};

/// Default location shown when the initial fix fails and a fallback is enabled.
pub const DEFAULT_FALLBACK_LOCATION: LocationPoint = LocationPoint {
    latitude: -6.428596,
    longitude: 106.767033,
};

/// Screen configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenConfig {
    pub basemap: Basemap,
    /// Rendering surface identifier.
    pub container: String,
    pub zoom: f64,
    /// Imagery overlays added above the basemap, bottom to top.
    pub imagery_urls: Vec<String>,
    /// Shown with the fallback symbol if the initial fetch fails. `None`
    /// makes a failed initial fetch an error.
    pub fallback_location: Option<LocationPoint>,
    /// `None` disables periodic refresh.
    pub refresh_period: Option<Duration>,
    /// Placed once at mount. `None` skips the reference marker.
    pub reference_location: Option<LocationPoint>,
}

impl ScreenConfig {
    /// Periodically refreshed user marker, no fallback.
    #[must_use]
    pub fn tracking() -> Self {
        Self {
            basemap: Basemap::Topographic,
            container: DEFAULT_CONTAINER.to_string(),
            zoom: DEFAULT_ZOOM,
            imagery_urls: vec![NOAA_RADAR_URL.to_string()],
            fallback_location: None,
            refresh_period: Some(DEFAULT_REFRESH_PERIOD),
            reference_location: Some(REFERENCE_LOCATION),
        }
    }

    /// One fetch at startup, falling back to the default location on failure.
    #[must_use]
    pub fn one_shot_with_fallback() -> Self {
        Self {
            fallback_location: Some(DEFAULT_FALLBACK_LOCATION),
            refresh_period: None,
            ..Self::tracking()
        }
    }

    #[must_use]
    pub fn with_basemap(mut self, basemap: Basemap) -> Self {
        self.basemap = basemap;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Option<LocationPoint>) -> Self {
        self.fallback_location = fallback;
        self
    }

    #[must_use]
    pub fn with_refresh(mut self, period: Option<Duration>) -> Self {
        self.refresh_period = period;
        self
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self::tracking()
    }
}

/// Where the screen is in its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Created,
    Mounting,
    Mounted,
    /// Initial fetch failed without a fallback.
    Failed,
    TornDown,
}

/// Result of a successful mount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MountOutcome {
    pub location: LocationPoint,
    pub source: FixSource,
}

/// A map screen with a user-location marker.
pub struct MapScreen {
    config: ScreenConfig,
    state: SharedScreenState,
    lifecycle: Mutex<Lifecycle>,
    refresh: Mutex<Option<RefreshTask>>,
    notifier: Option<Notifier>,
}

impl std::fmt::Debug for MapScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapScreen")
            .field("config", &self.config)
            .field("lifecycle", &self.lifecycle())
            .finish_non_exhaustive()
    }
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MapScreen {
    /// Build the map, its imagery layers and the view.
    pub fn new(config: ScreenConfig) -> Result<Self, ScreenError> {
        if config.refresh_period.is_some_and(|p| p.is_zero()) {
            return Err(ScreenError::InvalidRefreshPeriod);
        }

        let mut map = Map::new(config.basemap);
        for url in &config.imagery_urls {
            map.add(Layer::imagery(url));
        }

        let view = MapView::new(map, &config.container, config.zoom)?;
        info!(
            "Map view bound to '{}' with {} basemap at zoom {}",
            view.container(),
            config.basemap,
            config.zoom
        );

        Ok(Self {
            config,
            state: ScreenState::new(view).into_shared(),
            lifecycle: Mutex::new(Lifecycle::Created),
            refresh: Mutex::new(None),
            notifier: None,
        })
    }

    /// Callback run after every background change to the screen state.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// Shared state, for renderers.
    #[must_use]
    pub fn state(&self) -> SharedScreenState {
        Arc::clone(&self.state)
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        *guard(&self.lifecycle)
    }

    /// Run the startup sequence.
    ///
    /// Fetches the initial position, places the user marker (or the fallback
    /// marker), centers the view on it, starts the refresh task if enabled and
    /// places the reference marker. Without a fallback a failed fetch is
    /// returned and nothing is placed.
    pub async fn mount(&self, service: Arc<dyn LocationService>) -> Result<MountOutcome, ScreenError> {
        {
            let mut lifecycle = guard(&self.lifecycle);
            match *lifecycle {
                Lifecycle::Created => *lifecycle = Lifecycle::Mounting,
                Lifecycle::TornDown => return Err(ScreenError::TornDown),
                Lifecycle::Mounting | Lifecycle::Mounted | Lifecycle::Failed => {
                    return Err(ScreenError::AlreadyMounted)
                }
            }
        }

        let fix = service.current_position().await;

        // Held to the end so a concurrent teardown cannot miss the refresh task.
        let mut lifecycle = guard(&self.lifecycle);
        if *lifecycle == Lifecycle::TornDown {
            info!("Screen torn down during initial location fetch");
            return Err(ScreenError::TornDown);
        }

        let (location, source) = match fix {
            Ok(point) => (point, FixSource::Device),
            Err(e) => {
                state::lock(&self.state).record_failure(&e);
                if let Some(fallback) = self.config.fallback_location {
                    warn!("Initial location fetch failed ({}), using default location {}", e, fallback);
                    (fallback, FixSource::Fallback)
                } else {
                    warn!("Initial location fetch failed: {}", e);
                    *lifecycle = Lifecycle::Failed;
                    return Err(e.into());
                }
            }
        };

        {
            let mut state = state::lock(&self.state);
            state.place_user_marker(location, source);
            state.view.set_center(location);
        }

        if let Some(period) = self.config.refresh_period {
            let task = RefreshTask::spawn(
                Arc::clone(&self.state),
                service,
                period,
                self.notifier.clone(),
            );
            *guard(&self.refresh) = Some(task);
        }

        if let Some(reference) = self.config.reference_location {
            state::lock(&self.state).place_reference_marker(reference);
        }

        *lifecycle = Lifecycle::Mounted;
        drop(lifecycle);

        info!("Screen mounted at {} ({:?})", location, source);
        self.notify();

        Ok(MountOutcome { location, source })
    }

    /// One refresh-cycle invocation: fetch and move (or create) the user marker.
    pub async fn update_user_location(&self, service: &dyn LocationService) -> Result<LocationPoint, ScreenError> {
        self.ensure_alive()?;
        let point = refresh::refresh_user_location(&self.state, service).await?;
        self.notify();
        Ok(point)
    }

    /// Add the reference marker. Not deduplicated: each call adds a graphic.
    pub fn add_reference_marker(&self) -> Result<GraphicId, ScreenError> {
        self.ensure_alive()?;
        let location = self.config.reference_location.unwrap_or(REFERENCE_LOCATION);
        Ok(state::lock(&self.state).place_reference_marker(location))
    }

    /// Switch the basemap by style name.
    pub fn change_basemap(&self, name: &str) -> Result<Basemap, ScreenError> {
        self.ensure_alive()?;
        let basemap: Basemap = name.parse()?;
        state::lock(&self.state).view.map.set_basemap(basemap);
        info!("Basemap changed to {}", basemap);
        Ok(basemap)
    }

    pub fn set_layer_visible(&self, layer_id: &str, visible: bool) -> Result<(), ScreenError> {
        state::lock(&self.state).view.map.layer_mut(layer_id)?.visible = visible;
        Ok(())
    }

    pub fn set_layer_opacity(&self, layer_id: &str, opacity: f32) -> Result<(), ScreenError> {
        state::lock(&self.state).view.map.layer_mut(layer_id)?.opacity = opacity.clamp(0.0, 1.0);
        Ok(())
    }

    /// Content for the informational popover.
    #[must_use]
    pub fn show_popup(&self) -> Popover {
        Popover::information()
    }

    /// Independent fetch presented as an alert. Does not touch the user marker.
    pub async fn find_location(&self, service: &dyn LocationService) -> AlertFlow {
        overlay::find_location(service).await
    }

    /// Stop the refresh task. Idempotent.
    pub fn teardown(&self) {
        let previous = std::mem::replace(&mut *guard(&self.lifecycle), Lifecycle::TornDown);
        if let Some(task) = guard(&self.refresh).take() {
            task.cancel();
        }
        if previous != Lifecycle::TornDown {
            info!("Screen torn down");
        }
    }

    /// Whether the refresh task is running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        guard(&self.refresh).as_ref().is_some_and(|task| !task.is_finished())
    }

    #[must_use]
    pub fn center(&self) -> Option<LocationPoint> {
        state::lock(&self.state).view.center()
    }

    #[must_use]
    pub fn user_marker(&self) -> Option<UserMarker> {
        state::lock(&self.state).user_marker()
    }

    #[must_use]
    pub fn graphics(&self) -> Vec<Graphic> {
        state::lock(&self.state).graphics_snapshot()
    }

    #[must_use]
    pub fn stats(&self) -> FixStats {
        state::lock(&self.state).stats.clone()
    }

    fn ensure_alive(&self) -> Result<(), ScreenError> {
        if self.lifecycle() == Lifecycle::TornDown {
            Err(ScreenError::TornDown)
        } else {
            Ok(())
        }
    }

    fn notify(&self) {
        if let Some(notify) = &self.notifier {
            notify();
        }
    }
}

impl Drop for MapScreen {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::GraphicRole;
    use crate::location::LocationError;
    use crate::overlay::AlertState;
    use crate::symbol::MarkerSymbol;
    use crate::testing::{point, ScriptedLocation, StalledLocation};
    use crate::view::ViewError;
    use tokio::time::sleep;

    fn user_graphics(screen: &MapScreen) -> Vec<Graphic> {
        screen
            .graphics()
            .into_iter()
            .filter(|g| g.role == GraphicRole::UserLocation)
            .collect()
    }

    fn reference_graphics(screen: &MapScreen) -> Vec<Graphic> {
        screen
            .graphics()
            .into_iter()
            .filter(|g| g.role == GraphicRole::Reference)
            .collect()
    }

    #[test]
    fn test_new_adds_radar_layer() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let state = screen.state();
        let state = state::lock(&state);

        assert_eq!(state.view.map.basemap, Basemap::Topographic);
        assert_eq!(state.view.map.layers().len(), 1);
        assert_eq!(state.view.map.layers()[0].url(), NOAA_RADAR_URL);
        assert!((state.view.zoom() - 12.0).abs() < f64::EPSILON);
        assert!(state.view.graphics.is_empty());
        assert_eq!(screen.lifecycle(), Lifecycle::Created);
    }

    #[test]
    fn test_new_rejects_missing_container() {
        let config = ScreenConfig {
            container: String::new(),
            ..ScreenConfig::tracking()
        };
        assert_eq!(
            MapScreen::new(config).unwrap_err(),
            ScreenError::View(ViewError::ContainerMissing)
        );
    }

    #[test]
    fn test_new_rejects_zero_period() {
        let config = ScreenConfig::tracking().with_refresh(Some(Duration::ZERO));
        assert_eq!(MapScreen::new(config).unwrap_err(), ScreenError::InvalidRefreshPeriod);
    }

    #[test]
    fn test_presets() {
        let tracking = ScreenConfig::tracking();
        assert_eq!(tracking.refresh_period, Some(Duration::from_secs(10)));
        assert!(tracking.fallback_location.is_none());

        let one_shot = ScreenConfig::one_shot_with_fallback();
        assert!(one_shot.refresh_period.is_none());
        assert_eq!(one_shot.fallback_location, Some(point(-6.428596, 106.767033)));
        assert_eq!(one_shot.reference_location, Some(REFERENCE_LOCATION));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tracking_mount_places_markers_and_refreshes() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let service = Arc::new(ScriptedLocation::walking(point(40.0, -75.0), 10));

        let outcome = screen.mount(service.clone()).await.unwrap();
        assert_eq!(outcome.location, point(40.0, -75.0));
        assert_eq!(outcome.source, FixSource::Device);
        assert_eq!(screen.lifecycle(), Lifecycle::Mounted);
        assert_eq!(screen.center(), Some(point(40.0, -75.0)));
        assert!(screen.is_refreshing());

        let users = user_graphics(&screen);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].symbol, MarkerSymbol::user_location());

        let references = reference_graphics(&screen);
        assert_eq!(references.len(), 1);
        assert_eq!(references[0].geometry, REFERENCE_LOCATION);
        assert_eq!(references[0].symbol, MarkerSymbol::reference());

        // Initial fetch plus one per ten seconds
        sleep(Duration::from_secs(10) + Duration::from_millis(1)).await;
        assert_eq!(service.calls(), 2);

        sleep(Duration::from_secs(40)).await;
        assert_eq!(service.calls(), 6);

        let users_after = user_graphics(&screen);
        assert_eq!(users_after.len(), 1);
        assert_eq!(users_after[0].id, users[0].id);
        assert_eq!(users_after[0].geometry, point(45.0, -75.0));

        // Reference marker is never touched by the refresh cycle
        assert_eq!(reference_graphics(&screen), references);

        screen.teardown();
    }

    #[tokio::test]
    async fn test_tracking_mount_propagates_failure() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let service = Arc::new(ScriptedLocation::always(Err(LocationError::PermissionDenied)));

        let err = screen.mount(service).await.unwrap_err();
        assert_eq!(err, ScreenError::Location(LocationError::PermissionDenied));
        assert_eq!(screen.lifecycle(), Lifecycle::Failed);
        assert!(screen.graphics().is_empty());
        assert!(screen.center().is_none());
        assert!(!screen.is_refreshing());
        assert_eq!(screen.stats().failures, 1);
    }

    #[tokio::test]
    async fn test_one_shot_mount_uses_fallback() {
        let screen = MapScreen::new(ScreenConfig::one_shot_with_fallback()).unwrap();
        let service = Arc::new(ScriptedLocation::always(Err(LocationError::Unavailable(
            "position unknown".to_string(),
        ))));

        let outcome = screen.mount(service.clone()).await.unwrap();
        assert_eq!(outcome.source, FixSource::Fallback);

        let users = user_graphics(&screen);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].geometry.longitude, 106.767033);
        assert_eq!(users[0].geometry.latitude, -6.428596);
        assert_eq!(users[0].symbol, MarkerSymbol::fallback());
        assert_eq!(users[0].symbol.color.rgb(), (0, 0, 255));
        assert_eq!(screen.center(), Some(DEFAULT_FALLBACK_LOCATION));

        assert!(!screen.is_refreshing());
        assert_eq!(reference_graphics(&screen).len(), 1);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_one_shot_mount_success_uses_device_fix() {
        let screen = MapScreen::new(ScreenConfig::one_shot_with_fallback()).unwrap();
        let service = Arc::new(ScriptedLocation::always(Ok(point(40.0, -75.0))));

        let outcome = screen.mount(service).await.unwrap();
        assert_eq!(outcome.source, FixSource::Device);
        assert_eq!(user_graphics(&screen)[0].symbol, MarkerSymbol::user_location());
    }

    #[tokio::test]
    async fn test_mount_twice_rejected() {
        let screen = MapScreen::new(ScreenConfig::one_shot_with_fallback()).unwrap();
        let service = Arc::new(ScriptedLocation::always(Ok(point(40.0, -75.0))));

        screen.mount(service.clone()).await.unwrap();
        assert_eq!(screen.mount(service).await.unwrap_err(), ScreenError::AlreadyMounted);
        assert_eq!(reference_graphics(&screen).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_stops_refresh() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let service = Arc::new(ScriptedLocation::always(Ok(point(40.0, -75.0))));

        screen.mount(service.clone()).await.unwrap();
        sleep(Duration::from_secs(15)).await;
        assert_eq!(service.calls(), 2);

        screen.teardown();
        sleep(Duration::from_secs(60)).await;
        assert_eq!(service.calls(), 2);
        assert_eq!(screen.lifecycle(), Lifecycle::TornDown);
        assert!(!screen.is_refreshing());

        assert_eq!(screen.mount(service.clone()).await.unwrap_err(), ScreenError::TornDown);
        assert_eq!(
            screen.update_user_location(service.as_ref()).await.unwrap_err(),
            ScreenError::TornDown
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_stops_refresh() {
        let service = Arc::new(ScriptedLocation::always(Ok(point(40.0, -75.0))));
        {
            let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
            screen.mount(service.clone()).await.unwrap();
        }

        sleep(Duration::from_secs(60)).await;
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_during_initial_fetch() {
        let screen = Arc::new(MapScreen::new(ScreenConfig::tracking()).unwrap());
        let service = Arc::new(StalledLocation::default());

        let mounting = {
            let screen = Arc::clone(&screen);
            let service: Arc<dyn LocationService> = service.clone();
            tokio::spawn(async move {
                tokio::time::timeout(Duration::from_secs(5), screen.mount(service)).await
            })
        };

        sleep(Duration::from_secs(1)).await;
        assert_eq!(screen.lifecycle(), Lifecycle::Mounting);
        screen.teardown();

        // The stalled fetch never resolves; the mount is abandoned by the timeout
        assert!(mounting.await.unwrap().is_err());
        assert!(screen.graphics().is_empty());
        assert!(!screen.is_refreshing());
    }

    #[tokio::test]
    async fn test_update_user_location_first_call_creates_marker() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let service = ScriptedLocation::walking(point(40.0, -75.0), 3);

        screen.update_user_location(&service).await.unwrap();
        screen.update_user_location(&service).await.unwrap();
        screen.update_user_location(&service).await.unwrap();

        let users = user_graphics(&screen);
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].geometry, point(42.0, -75.0));
    }

    #[tokio::test]
    async fn test_update_user_location_propagates_failure() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let service = ScriptedLocation::always(Err(LocationError::Timeout));

        let err = screen.update_user_location(&service).await.unwrap_err();
        assert_eq!(err, ScreenError::Location(LocationError::Timeout));
        assert!(screen.user_marker().is_none());
    }

    #[test]
    fn test_add_reference_marker_twice_duplicates() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let first = screen.add_reference_marker().unwrap();
        let second = screen.add_reference_marker().unwrap();

        assert_ne!(first, second);
        assert_eq!(reference_graphics(&screen).len(), 2);
    }

    #[test]
    fn test_change_basemap() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();

        assert_eq!(screen.change_basemap("satellite").unwrap(), Basemap::Satellite);
        assert_eq!(state::lock(&screen.state()).view.map.basemap, Basemap::Satellite);

        assert!(matches!(
            screen.change_basemap("watercolor"),
            Err(ScreenError::Map(_))
        ));
        assert_eq!(state::lock(&screen.state()).view.map.basemap, Basemap::Satellite);
    }

    #[test]
    fn test_layer_visibility_and_opacity() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        screen.set_layer_visible("radar_base_reflectivity_time", false).unwrap();
        screen.set_layer_opacity("radar_base_reflectivity_time", 1.5).unwrap();

        {
            let shared = screen.state();
            let shared = state::lock(&shared);
            let layer = shared.view.map.layer("radar_base_reflectivity_time").unwrap();
            assert!(!layer.visible);
            assert!((layer.opacity - 1.0).abs() < f32::EPSILON);
        }

        assert!(screen.set_layer_visible("missing", true).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_location_is_independent_of_refresh() {
        let screen = MapScreen::new(ScreenConfig::tracking()).unwrap();
        let tracker = Arc::new(ScriptedLocation::always(Ok(point(10.0, 10.0))));
        screen.mount(tracker.clone()).await.unwrap();

        let alert_service = ScriptedLocation::always(Ok(point(40.0, -75.0)));
        let flow = screen.find_location(&alert_service).await;

        assert_eq!(alert_service.calls(), 1);
        assert_eq!(tracker.calls(), 1);
        let config = flow.presented().unwrap();
        assert_eq!(config.message, "Longitude: -75, Latitude: 40");
        assert_eq!(user_graphics(&screen)[0].geometry, point(10.0, 10.0));

        let failing = ScriptedLocation::always(Err(LocationError::PermissionDenied));
        let flow = screen.find_location(&failing).await;
        match flow.state() {
            AlertState::ErrorPresented(config) => {
                assert_eq!(config.header, "Error");
                assert_eq!(config.message, "Unable to find your location.");
            }
            other => panic!("unexpected state {other:?}"),
        }
    }

    #[test]
    fn test_show_popup() {
        let screen = MapScreen::new(ScreenConfig::one_shot_with_fallback()).unwrap();
        assert_eq!(screen.show_popup(), Popover::information());
    }
}
