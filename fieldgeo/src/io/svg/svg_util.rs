use serde::{Deserialize, Serialize};
use svg::node::element::Path;
use svg::node::element::path::Data;

use crate::geometry::METERS_PER_DEGREE;
use crate::geometry::primitives::Point;
use crate::ndvi::Color;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgTheme,
    ///Paint gradient grids; if disabled every field is filled with its base color
    #[serde(default = "default_true")]
    pub gradient: bool,
    ///Draw a thick outline around selected fields
    #[serde(default = "default_true")]
    pub highlight_selection: bool,
    ///Write name and area next to each field
    #[serde(default)]
    pub labels: bool,
    ///Number of segments used to draw circular fields
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,
}

fn default_circle_segments() -> usize {
    32
}

fn default_true() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgTheme::default(),
            gradient: true,
            highlight_selection: true,
            labels: false,
            circle_segments: default_circle_segments(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgTheme {
    pub stroke_width_multiplier: f64,
    pub background: Color,
    pub outline: Color,
    ///Fill of fields without any vegetation index data
    pub no_data_fill: Color,
    pub selection_highlight: Color,
    pub fill_opacity: f64,
}

impl Default for SvgTheme {
    fn default() -> Self {
        SvgTheme::SATELLITE
    }
}

impl SvgTheme {
    pub const SATELLITE: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.0,
        background: Color(0x2D, 0x2D, 0x2D),
        outline: Color(0xFF, 0xFF, 0xFF),
        no_data_fill: Color(0x7A, 0x7A, 0x7A),
        selection_highlight: Color(0x3B, 0x82, 0xF6),
        fill_opacity: 0.7,
    };

    pub const PAPER: SvgTheme = SvgTheme {
        stroke_width_multiplier: 2.5,
        background: Color(0xFF, 0xFF, 0xFF),
        outline: Color(0x2D, 0x2D, 0x2D),
        no_data_fill: Color(0xD3, 0xD3, 0xD3),
        selection_highlight: Color(0xD0, 0x00, 0x00),
        fill_opacity: 0.9,
    };
}

/// Maps geographic points onto a local drawing plane in meters around `origin`:
/// x grows to the east, y grows to the south (SVG's y axis points down).
///
/// Keeps coordinates small so they survive the `f32` precision of SVG path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalProjection {
    pub origin: Point,
    lng_scale: f64,
}

impl LocalProjection {
    pub fn new(origin: Point) -> Self {
        let lng_scale = METERS_PER_DEGREE * origin.lat().to_radians().cos();
        Self { origin, lng_scale }
    }

    pub fn project(&self, p: Point) -> (f32, f32) {
        let x = (p.lng() - self.origin.lng()) * self.lng_scale;
        let y = (self.origin.lat() - p.lat()) * METERS_PER_DEGREE;
        (x as f32, y as f32)
    }
}

pub fn ring_data(ring: &[Point], proj: &LocalProjection) -> Option<Data> {
    let (first, rest) = ring.split_first()?;
    let data = rest
        .iter()
        .fold(Data::new().move_to(proj.project(*first)), |data, p| {
            data.line_to(proj.project(*p))
        });
    Some(data.close())
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}
