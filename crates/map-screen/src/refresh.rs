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

//! Periodic user-location refresh.
//!
//! A single background task sleeps for the refresh period, performs one fetch,
//! applies it to the user marker and only then starts the next period. A slow
//! or stalled fetch therefore delays the next refresh instead of piling up
//! concurrent requests, and results are always applied in request order.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::geometry::LocationPoint;
use crate::location::{LocationError, LocationService};
use crate::state::{self, FixSource, SharedScreenState};

/// Refresh period used by the tracking screen.
pub const DEFAULT_REFRESH_PERIOD: Duration = Duration::from_secs(10);

/// Shortest period the task will honour.
pub const MIN_REFRESH_PERIOD: Duration = Duration::from_millis(100);

/// Callback invoked after every refresh attempt, e.g. to request a repaint.
pub type Notifier = Arc<dyn Fn() + Send + Sync>;

/// Fetch once and move the user marker.
///
/// Creates the marker if it does not exist yet. A failed fetch is recorded in
/// the fix statistics and returned; the marker is left untouched.
pub async fn refresh_user_location(
    state: &SharedScreenState,
    service: &dyn LocationService,
) -> Result<LocationPoint, LocationError> {
    match service.current_position().await {
        Ok(point) => {
            state::lock(state).place_user_marker(point, FixSource::Device);
            Ok(point)
        }
        Err(e) => {
            state::lock(state).record_failure(&e);
            Err(e)
        }
    }
}

/// Handle to the running refresh task. Dropping it stops the task.
pub struct RefreshTask {
    cancel_token: CancellationToken,
    handle: Option<JoinHandle<()>>,
    period: Duration,
}

impl std::fmt::Debug for RefreshTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshTask")
            .field("period", &self.period)
            .field("cancelled", &self.cancel_token.is_cancelled())
            .finish_non_exhaustive()
    }
}

impl RefreshTask {
    /// Start refreshing on the current tokio runtime.
    #[must_use]
    pub fn spawn(
        state: SharedScreenState,
        service: Arc<dyn LocationService>,
        period: Duration,
        notifier: Option<Notifier>,
    ) -> Self {
        let period = period.max(MIN_REFRESH_PERIOD);
        let cancel_token = CancellationToken::new();
        let task_cancel = cancel_token.clone();

        let handle = tokio::spawn(async move {
            refresh_loop(state, service, period, task_cancel, notifier).await;
        });

        Self {
            cancel_token,
            handle: Some(handle),
            period,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Request the task to stop. Returns immediately.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancel and wait for the task to exit.
    pub async fn shutdown(mut self) {
        self.cancel_token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Location refresh task ended abnormally: {}", e);
            }
        }
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

async fn refresh_loop(
    state: SharedScreenState,
    service: Arc<dyn LocationService>,
    period: Duration,
    cancel_token: CancellationToken,
    notifier: Option<Notifier>,
) {
    info!(
        "Refreshing location from {} every {:.1}s",
        service.name(),
        period.as_secs_f64()
    );

    loop {
        tokio::select! {
            () = sleep(period) => {}
            () = cancel_token.cancelled() => {
                info!("Location refresh cancelled");
                return;
            }
        }

        let outcome = tokio::select! {
            result = refresh_user_location(&state, service.as_ref()) => result,
            () = cancel_token.cancelled() => {
                info!("Location refresh cancelled while waiting for a fix");
                return;
            }
        };

        match outcome {
            Ok(point) => debug!("Location refreshed: {}", point),
            Err(e) => warn!("Location refresh failed: {}", e),
        }

        if let Some(notify) = &notifier {
            notify();
        }
    }
}
