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

//! Location services with scripted behaviour for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::geometry::LocationPoint;
use crate::location::{LocationError, LocationService, PositionFuture};

pub(crate) fn point(latitude: f64, longitude: f64) -> LocationPoint {
    LocationPoint::new(latitude, longitude).unwrap()
}

/// Answers from a script; the last entry repeats once the script runs out.
pub(crate) struct ScriptedLocation {
    calls: AtomicUsize,
    script: Mutex<VecDeque<Result<LocationPoint, LocationError>>>,
    last: Mutex<Result<LocationPoint, LocationError>>,
}

impl ScriptedLocation {
    pub(crate) fn new(script: Vec<Result<LocationPoint, LocationError>>) -> Self {
        let last = script
            .last()
            .cloned()
            .unwrap_or(Err(LocationError::Unavailable("empty script".to_string())));
        Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script.into()),
            last: Mutex::new(last),
        }
    }

    pub(crate) fn always(result: Result<LocationPoint, LocationError>) -> Self {
        Self::new(vec![result])
    }

    /// Successive fixes moving north from `start` by one degree per call.
    pub(crate) fn walking(start: LocationPoint, steps: u32) -> Self {
        let script = (0..steps)
            .map(|i| Ok(point(start.latitude + f64::from(i), start.longitude)))
            .collect();
        Self::new(script)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LocationService for ScriptedLocation {
    fn current_position(&self) -> PositionFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        let result = match next {
            Some(result) => {
                *self.last.lock().unwrap() = result.clone();
                result
            }
            None => self.last.lock().unwrap().clone(),
        };
        Box::pin(async move { result })
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Never answers, like a stalled GPS.
#[derive(Default)]
pub(crate) struct StalledLocation {
    calls: AtomicUsize,
}

impl StalledLocation {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl LocationService for StalledLocation {
    fn current_position(&self) -> PositionFuture<'_> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Box::pin(std::future::pending())
    }

    fn name(&self) -> &str {
        "stalled"
    }
}
