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

//! Displayable graphics attached to a map view.

use std::fmt;

use uuid::Uuid;

use crate::geometry::LocationPoint;
use crate::symbol::MarkerSymbol;

/// Stable identifier for a graphic in a [`GraphicsCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphicId(Uuid);

impl GraphicId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for GraphicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What a graphic represents on the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicRole {
    UserLocation,
    Reference,
}

/// A point geometry paired with a marker symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub id: GraphicId,
    pub role: GraphicRole,
    pub geometry: LocationPoint,
    pub symbol: MarkerSymbol,
}

impl Graphic {
    #[must_use]
    pub fn new(role: GraphicRole, geometry: LocationPoint, symbol: MarkerSymbol) -> Self {
        Self {
            id: GraphicId::new(),
            role,
            geometry,
            symbol,
        }
    }
}

/// Ordered, mutable collection of graphics drawn by a view.
///
/// Graphics are drawn in insertion order. Adding never deduplicates.
#[derive(Debug, Clone, Default)]
pub struct GraphicsCollection {
    items: Vec<Graphic>,
}

impl GraphicsCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a graphic and return its id.
    pub fn add(&mut self, graphic: Graphic) -> GraphicId {
        let id = graphic.id;
        self.items.push(graphic);
        id
    }

    #[must_use]
    pub fn get(&self, id: GraphicId) -> Option<&Graphic> {
        self.items.iter().find(|g| g.id == id)
    }

    /// Replace the geometry of an existing graphic in place.
    ///
    /// Returns `false` if the graphic is not in the collection.
    pub fn set_geometry(&mut self, id: GraphicId, geometry: LocationPoint) -> bool {
        match self.items.iter_mut().find(|g| g.id == id) {
            Some(graphic) => {
                graphic.geometry = geometry;
                true
            }
            None => false,
        }
    }

    /// Replace the symbol of an existing graphic in place.
    pub fn set_symbol(&mut self, id: GraphicId, symbol: MarkerSymbol) -> bool {
        match self.items.iter_mut().find(|g| g.id == id) {
            Some(graphic) => {
                graphic.symbol = symbol;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: GraphicId) -> Option<Graphic> {
        let pos = self.items.iter().position(|g| g.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Number of graphics with the given role.
    #[must_use]
    pub fn count_role(&self, role: GraphicRole) -> usize {
        self.items.iter().filter(|g| g.role == role).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Graphic> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
