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

//! Marker symbology.

/// RGBA color with an alpha channel in the 0.0 - 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);

    #[must_use]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// RGB components without alpha.
    #[must_use]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Alpha scaled to a byte, for renderers that want 0-255.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "alpha is clamped to 0.0-1.0 first")]
    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Marker outline stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Rgba,
    /// Stroke width in points.
    pub width: f32,
}

/// Simple filled circle marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerSymbol {
    pub color: Rgba,
    /// Marker diameter in points.
    pub size: f32,
    pub outline: Outline,
}

const MARKER_SIZE: f32 = 8.0;
const WHITE_OUTLINE: Outline = Outline {
    color: Rgba::WHITE,
    width: 1.0,
};

impl MarkerSymbol {
    /// Red marker for a real device fix.
    #[must_use]
    pub const fn user_location() -> Self {
        Self {
            color: Rgba::RED,
            size: MARKER_SIZE,
            outline: WHITE_OUTLINE,
        }
    }

    /// Blue marker for the fixed reference location.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            color: Rgba::BLUE,
            size: MARKER_SIZE,
            outline: WHITE_OUTLINE,
        }
    }

    /// Blue marker shown when the device fix failed and the default location is used.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            color: Rgba::BLUE,
            size: MARKER_SIZE,
            outline: WHITE_OUTLINE,
        }
    }
}
