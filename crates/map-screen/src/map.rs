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

//! Map model: a basemap style plus a stack of operational layers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// NOAA base reflectivity radar image service.
pub const NOAA_RADAR_URL: &str =
    "https://mapservices.weather.noaa.gov/eventdriven/rest/services/radar/radar_base_reflectivity_time/ImageServer";

/// Default opacity for imagery overlays.
pub const DEFAULT_LAYER_OPACITY: f32 = 0.6;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("unknown basemap style: {0}")]
    UnknownBasemap(String),

    #[error("no layer with id '{0}'")]
    UnknownLayer(String),
}

/// Available basemap styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Basemap {
    #[default]
    Topographic,
    Streets,
    Satellite,
    DarkGray,
    OpenStreetMap,
}

impl Basemap {
    pub const ALL: [Basemap; 5] = [
        Basemap::Topographic,
        Basemap::Streets,
        Basemap::Satellite,
        Basemap::DarkGray,
        Basemap::OpenStreetMap,
    ];

    /// Style identifier used in configuration and on the command line.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Basemap::Topographic => "topo-vector",
            Basemap::Streets => "streets-vector",
            Basemap::Satellite => "satellite",
            Basemap::DarkGray => "dark-gray-vector",
            Basemap::OpenStreetMap => "osm",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Basemap::Topographic => "Topographic",
            Basemap::Streets => "Streets",
            Basemap::Satellite => "Satellite",
            Basemap::DarkGray => "Dark Gray",
            Basemap::OpenStreetMap => "OpenStreetMap",
        }
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Basemap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "topo-vector" | "topo" => Ok(Basemap::Topographic),
            "streets-vector" | "streets" => Ok(Basemap::Streets),
            "satellite" => Ok(Basemap::Satellite),
            "dark-gray-vector" | "dark-gray" => Ok(Basemap::DarkGray),
            "osm" => Ok(Basemap::OpenStreetMap),
            _ => Err(MapError::UnknownBasemap(s.to_string())),
        }
    }
}

/// Kind of data a layer draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerKind {
    /// Server-rendered imagery (ArcGIS `ImageServer` or similar).
    Imagery { url: String },
}

/// An operational layer drawn above the basemap.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: String,
    pub title: String,
    pub kind: LayerKind,
    pub opacity: f32,
    pub visible: bool,
}

impl Layer {
    /// Imagery layer for a service URL. The id is derived from the URL path.
    #[must_use]
    pub fn imagery(url: &str) -> Self {
        let trimmed = url.trim_end_matches('/');
        let title = trimmed
            .trim_end_matches("/ImageServer")
            .rsplit('/')
            .next()
            .unwrap_or("imagery")
            .to_string();

        Self {
            id: title.clone(),
            title,
            kind: LayerKind::Imagery { url: trimmed.to_string() },
            opacity: DEFAULT_LAYER_OPACITY,
            visible: true,
        }
    }

    /// Service URL for the layer.
    #[must_use]
    pub fn url(&self) -> &str {
        match &self.kind {
            LayerKind::Imagery { url } => url,
        }
    }
}

/// A basemap plus its operational layers, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct Map {
    pub basemap: Basemap,
    layers: Vec<Layer>,
}

impl Map {
    #[must_use]
    pub fn new(basemap: Basemap) -> Self {
        Self {
            basemap,
            layers: Vec::new(),
        }
    }

    /// Add a layer on top of the existing ones.
    pub fn add(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    pub fn set_basemap(&mut self, basemap: Basemap) {
        self.basemap = basemap;
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }

    pub fn layer_mut(&mut self, id: &str) -> Result<&mut Layer, MapError> {
        self.layers
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| MapError::UnknownLayer(id.to_string()))
    }
}
