use rand::Rng;

use crate::entities::Field;
use crate::geometry::primitives::{GeoCircle, Polygon};
use crate::viewport;

/// Randomly generated polygon shown around real fields in demo mode
#[derive(Clone, Debug, PartialEq)]
pub struct DemoPolygon {
    pub id: String,
    pub polygon: Polygon,
    pub index: f64,
}

/// Scatters 8 to 12 random triangles, squares or pentagons (0.3–1 km across their circumcircle radius)
/// within ±0.02° of the fields' center, each with an index in [0.2, 0.9].
///
/// Returns nothing when the fields carry no coordinates.
pub fn demo_polygons(fields: &[Field], rng: &mut impl Rng) -> Vec<DemoPolygon> {
    if viewport::fields_bounds(fields).is_none() {
        return vec![];
    }
    let center = viewport::map_center(fields);

    let n_polygons = rng.random_range(8..=12);
    (0..n_polygons)
        .map(|i| {
            let offset_lat = (rng.random::<f64>() - 0.5) * 0.04;
            let offset_lng = (rng.random::<f64>() - 0.5) * 0.04;
            let n_sides = rng.random_range(3..=5);
            let radius_m = 300.0 + rng.random::<f64>() * 700.0;

            let circle = GeoCircle::new(
                (center.lat() + offset_lat, center.lng() + offset_lng).into(),
                radius_m,
            );
            DemoPolygon {
                id: format!("random-{i}"),
                polygon: circle.to_polygon(n_sides),
                index: 0.2 + rng.random::<f64>() * 0.7,
            }
        })
        .collect()
}
