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

//! Error type for screen operations.

use thiserror::Error;

use crate::geometry::GeometryError;
use crate::location::LocationError;
use crate::map::MapError;
use crate::overlay::OverlayError;
use crate::view::ViewError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScreenError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    View(#[from] ViewError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Overlay(#[from] OverlayError),

    #[error("refresh period must be greater than zero")]
    InvalidRefreshPeriod,

    #[error("screen is already mounted")]
    AlreadyMounted,

    #[error("screen has been torn down")]
    TornDown,
}
