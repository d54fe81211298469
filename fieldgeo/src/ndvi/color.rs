use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Health classification of a vegetation index value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NdviBand {
    /// below 0.4
    Critical,
    /// [0.4, 0.5)
    Poor,
    /// [0.5, 0.6)
    Moderate,
    /// [0.6, 0.7)
    Good,
    /// 0.7 and above
    Excellent,
}

impl NdviBand {
    pub fn of(index: f64) -> Self {
        match sanitize(index) {
            i if i >= 0.7 => NdviBand::Excellent,
            i if i >= 0.6 => NdviBand::Good,
            i if i >= 0.5 => NdviBand::Moderate,
            i if i >= 0.4 => NdviBand::Poor,
            _ => NdviBand::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NdviBand::Critical => "Critical",
            NdviBand::Poor => "Poor",
            NdviBand::Moderate => "Moderate",
            NdviBand::Good => "Good",
            NdviBand::Excellent => "Excellent",
        }
    }

    /// Solid color of the band, used for legends and status labels
    pub fn color(self) -> Color {
        match self {
            NdviBand::Critical => Color(0xDC, 0x14, 0x3C),  // CRIMSON
            NdviBand::Poor => Color(0xFF, 0x8C, 0x00),      // DARK ORANGE
            NdviBand::Moderate => Color(0xFF, 0xD7, 0x00),  // GOLD
            NdviBand::Good => Color(0x32, 0xCD, 0x32),      // LIME GREEN
            NdviBand::Excellent => Color(0x22, 0x8B, 0x22), // FOREST GREEN
        }
    }
}

/// Discrete color of the band `index` falls in
pub fn band_color(index: f64) -> Color {
    NdviBand::of(index).color()
}

/// Maps a vegetation index to a smoothly interpolated color.
///
/// Within every band the color is interpolated linearly between two anchors and each band ends where
/// the next one starts, so the mapping is continuous up to rounding.
/// The input is clamped to [0, 1], non-finite values map to the critical end.
pub fn index_to_color(index: f64) -> Color {
    let index = sanitize(index);
    let (from, to, t) = match NdviBand::of(index) {
        NdviBand::Excellent => ((34, 139, 34), (34, 205, 34), (index - 0.7) / 0.3),
        NdviBand::Good => ((50, 205, 50), (34, 139, 34), (index - 0.6) / 0.1),
        NdviBand::Moderate => ((255, 215, 0), (50, 205, 50), (index - 0.5) / 0.1),
        NdviBand::Poor => ((255, 140, 0), (255, 215, 0), (index - 0.4) / 0.1),
        NdviBand::Critical => ((220, 20, 60), (255, 140, 0), f64::min(index / 0.4, 1.0)),
    };
    Color(
        lerp_channel(from.0, to.0, t),
        lerp_channel(from.1, to.1, t),
        lerp_channel(from.2, to.2, t),
    )
}

fn sanitize(index: f64) -> f64 {
    match index.is_finite() {
        true => index.clamp(0.0, 1.0),
        false => 0.0,
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let (from, to) = (from as f64, to as f64);
    (from + (to - from) * t).floor() as u8
}

/// 24-bit RGB color
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// CSS functional notation, e.g. `rgb(34, 139, 34)`
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    /// Largest difference between two colors over the three channels
    pub fn max_channel_diff(&self, other: &Color) -> u8 {
        [
            self.0.abs_diff(other.0),
            self.1.abs_diff(other.1),
            self.2.abs_diff(other.2),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
