use std::collections::HashMap;

use itertools::Itertools;
use log::{info, warn};
use rand::Rng;
use svg::Document;

use fieldgeo::entities::{Field, FieldId, FieldSelection};
use fieldgeo::geometry::Geometry;
use fieldgeo::geometry::format_area;
use fieldgeo::geometry::geo_enums::DrawType;
use fieldgeo::geometry::primitives::{Point, Polygon};
use fieldgeo::io::svg::fields_to_svg;
use fieldgeo::lookup::{find_all_containing_fields, find_containing_field, find_nearest_field_by};
use fieldgeo::ndvi::{NdviBand, NdviOverlay, demo_polygons};
use fieldgeo::selector::select_fields_in_polygon;

use crate::config::FieldGeoConfig;
use crate::io::output::{
    AreaOutput, FieldSummary, LocateOutput, OverlaySummary, RenderOutput, SelectOutput,
};

pub fn locate(fields: &[Field], point: Point, all: bool, config: &FieldGeoConfig) -> LocateOutput {
    let containing = match all {
        true => find_all_containing_fields(&point, fields),
        false => find_containing_field(&point, fields).into_iter().collect(),
    };
    let nearest = match containing.is_empty() {
        true => find_nearest_field_by(&point, fields, config.nearest_by),
        false => None,
    };
    match (containing.first(), nearest) {
        (Some(field), _) => info!("[LOCATE] {point:?} lies in {}", field.display_name()),
        (None, Some(field)) => info!("[LOCATE] {point:?} lies in no field, nearest is {}", field.display_name()),
        (None, None) => warn!("[LOCATE] {point:?} lies in no field and there is no field to fall back on"),
    }

    LocateOutput {
        lat: point.lat(),
        lng: point.lng(),
        containing: containing.into_iter().map_into().collect(),
        nearest: nearest.map(FieldSummary::from),
    }
}

pub fn select(fields: &[Field], drawn: &Polygon) -> SelectOutput {
    let selected_ids = select_fields_in_polygon(drawn, fields);
    if selected_ids.is_empty() {
        warn!("[SELECT] no fields found inside the drawn polygon");
    }
    let selected = fields
        .iter()
        .filter(|f| selected_ids.contains(&f.id))
        .map(FieldSummary::from)
        .collect_vec();
    let total_area_ha = selected.iter().map(|s| s.area_ha).sum();

    SelectOutput {
        selected,
        total_area_ha,
        total_area: format_area(total_area_ha),
    }
}

pub fn area(fields: &[Field]) -> AreaOutput {
    let fields = fields.iter().map(FieldSummary::from).collect_vec();
    let total_area_ha = fields.iter().map(|s| s.area_ha).sum();

    AreaOutput {
        fields,
        total_area_ha,
        total_area: format_area(total_area_ha),
    }
}

/// Builds the vegetation index overlays of the fields and draws them.
///
/// Fields without a measured index get `config.default_index`, or no overlay at all.
/// In demo mode random polygons are scattered around the fields and drawn along with them.
pub fn render(
    fields: &[Field],
    indices: &HashMap<FieldId, f64>,
    selection: &FieldSelection,
    demo: bool,
    config: &FieldGeoConfig,
    rng: &mut impl Rng,
) -> (Document, RenderOutput) {
    let mut drawn_fields = fields.to_vec();
    let mut overlays = HashMap::new();
    let mut without_index = vec![];

    for field in fields {
        match indices.get(&field.id).copied().or(config.default_index) {
            Some(index) => {
                let overlay = NdviOverlay::build(&field.geometry, index, &config.gradient, rng);
                overlays.insert(field.id, overlay);
            }
            None => without_index.push(field.id),
        }
    }

    let demos = match demo {
        true => demo_polygons(fields, rng),
        false => vec![],
    };
    //demo polygons get ids below every field id
    let id_floor = fields.iter().map(|f| f.id).min().unwrap_or(0).min(0);
    let mut n_demo_drawn = 0;
    for (i, demo) in demos.iter().enumerate() {
        let Some(id) = (i as FieldId)
            .checked_add(1)
            .and_then(|offset| id_floor.checked_sub(offset))
        else {
            warn!("[RENDER] no free id left for demo polygon {}, skipping", demo.id);
            continue;
        };
        n_demo_drawn += 1;
        drawn_fields.push(Field::new(
            id,
            Some(demo.id.clone()),
            DrawType::Polygon,
            Geometry::Polygon(demo.polygon.clone()),
        ));
        let overlay = NdviOverlay::from_polygon(&demo.polygon, demo.index, &config.gradient, rng);
        overlays.insert(id, overlay);
    }

    let overlay_summaries = drawn_fields
        .iter()
        .filter_map(|f| overlays.get(&f.id).map(|o| (f.id, o)))
        .map(|(id, overlay)| {
            let (min_index, max_index) = overlay.index_range();
            OverlaySummary {
                id,
                n_cells: match overlay {
                    NdviOverlay::Gradient { cells, .. } => cells.len(),
                    NdviOverlay::Solid(_) => 0,
                },
                min_index,
                max_index,
                band: NdviBand::of((min_index + max_index) / 2.0),
            }
        })
        .collect_vec();

    info!(
        "[RENDER] {} overlay(s), {} field(s) without index, {} demo polygon(s)",
        overlay_summaries.len(),
        without_index.len(),
        n_demo_drawn
    );

    let title = match demo {
        true => "vegetation index (demo)",
        false => "vegetation index",
    };
    let document = fields_to_svg(
        &drawn_fields,
        &overlays,
        selection,
        config.svg_draw_options,
        title,
    );

    let output = RenderOutput {
        overlays: overlay_summaries,
        without_index,
        n_demo_polygons: n_demo_drawn,
        svg_file: String::new(),
    };
    (document, output)
}
