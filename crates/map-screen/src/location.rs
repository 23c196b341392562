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

//! Device location service abstraction.
//!
//! A [`LocationService`] produces a single position fix per call. The returned
//! future may stay pending for as long as the platform takes to answer
//! (permission prompts, cold GPS), and fails with [`LocationError`] when the
//! position is not available.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::geometry::LocationPoint;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),

    #[error("timed out waiting for a location fix")]
    Timeout,
}

/// Future returned by [`LocationService::current_position`].
pub type PositionFuture<'a> =
    Pin<Box<dyn Future<Output = Result<LocationPoint, LocationError>> + Send + 'a>>;

/// Single-shot "get current position" capability.
pub trait LocationService: Send + Sync {
    fn current_position(&self) -> PositionFuture<'_>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "location"
    }
}

/// Always answers with the same point.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    point: LocationPoint,
}

impl FixedLocation {
    #[must_use]
    pub fn new(point: LocationPoint) -> Self {
        Self { point }
    }
}

impl LocationService for FixedLocation {
    fn current_position(&self) -> PositionFuture<'_> {
        let point = self.point;
        Box::pin(async move { Ok(point) })
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Tries each provider in order and returns the first fix.
///
/// When every provider fails the last error is returned. An empty chain
/// reports [`LocationError::Unavailable`].
#[derive(Default)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn LocationService>>,
}

impl std::fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ProviderChain").field("providers", &names).finish()
    }
}

impl ProviderChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, provider: Arc<dyn LocationService>) -> Self {
        self.providers.push(provider);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl LocationService for ProviderChain {
    fn current_position(&self) -> PositionFuture<'_> {
        Box::pin(async move {
            let mut last_error = LocationError::Unavailable("no location providers configured".to_string());

            for provider in &self.providers {
                match provider.current_position().await {
                    Ok(point) => {
                        debug!("Location fix from {}: {}", provider.name(), point);
                        return Ok(point);
                    }
                    Err(e) => {
                        debug!("Location provider {} failed: {}", provider.name(), e);
                        last_error = e;
                    }
                }
            }

            Err(last_error)
        })
    }

    fn name(&self) -> &str {
        "chain"
    }
}
