use std::collections::HashMap;

use log::warn;
use svg::Document;
use svg::node::element::{ClipPath, Definitions, Group, Text, Title};

use crate::entities::{Field, FieldId, FieldSelection};
use crate::geometry::format_area;
use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Point, Rect};
use crate::io::svg::svg_util::{self, LocalProjection, SvgDrawOptions};
use crate::ndvi::{NdviBand, NdviOverlay, index_to_color};

/// Draws `fields` with their vegetation index overlays.
///
/// Fields without an entry in `overlays` are filled with the theme's no-data color.
/// Fields whose record is inconsistent or whose outline is degenerate are left out.
pub fn fields_to_svg(
    fields: &[Field],
    overlays: &HashMap<FieldId, NdviOverlay>,
    selection: &FieldSelection,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let theme = &options.theme;

    let Some(bounds) = fields
        .iter()
        .filter(|f| f.is_consistent())
        .filter_map(|f| f.geometry.bbox())
        .reduce(Rect::bounding_rect)
    else {
        warn!("[SVG] nothing to draw, none of the {} field(s) has a usable geometry", fields.len());
        return Document::new().set("viewBox", (0.0f32, 0.0f32, 1.0f32, 1.0f32));
    };

    let proj = LocalProjection::new(Point(bounds.lat_max, bounds.lng_min));
    let (width, height) = proj.project(Point(bounds.lat_min, bounds.lng_max));
    let margin = 0.05 * f32::max(width, height);
    let stroke_width = match f32::min(width, height) {
        m if m > 0.0 => m,
        _ => f32::max(width, height),
    } * 0.001
        * theme.stroke_width_multiplier as f32;
    let font_size = 0.025 * f32::max(width, height);

    let label = {
        //print some information above the top left corner
        let total_area: f64 = fields.iter().map(|f| f.area_ha()).sum();
        Text::new(format!(
            "fields: {} | selected: {} | total area: {} | {}",
            fields.len(),
            selection.len(),
            format_area(total_area),
            title
        ))
        .set("x", 0.0f32)
        .set("y", -0.5 * margin)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("font-weight", "500")
        .set("fill", format!("{}", theme.outline))
    };

    let mut defs = Definitions::new();
    let mut fields_group = Group::new().set("id", "fields");
    let mut labels_group = Group::new().set("id", "labels");

    for field in fields {
        if !field.is_consistent() {
            warn!(
                "[SVG] field {} has draw type {:?} but a different geometry, skipped",
                field.id, field.draw_type
            );
            continue;
        }
        let outline = field.geometry.outline(options.circle_segments);
        let Some(outline_data) = svg_util::ring_data(outline.vertices(), &proj)
            .filter(|_| !outline.is_degenerate())
        else {
            warn!("[SVG] field {} has a degenerate outline, skipped", field.id);
            continue;
        };

        let mut group = Group::new().set("id", format!("field_{}", field.id));
        let overlay = overlays.get(&field.id);

        let fill_opacity = format!("{}", theme.fill_opacity);
        match overlay {
            Some(NdviOverlay::Gradient { cells, .. }) if options.gradient => {
                //cells are axis-aligned, clip them to the field's outline
                let clip_id = format!("clip_field_{}", field.id);
                defs = defs.add(
                    ClipPath::new()
                        .set("id", clip_id.clone())
                        .add(svg_util::data_to_path(outline_data.clone(), &[])),
                );
                let cells_group = cells.iter().fold(
                    Group::new().set("clip-path", format!("url(#{clip_id})")),
                    |g, cell| match svg_util::ring_data(&cell.ring(), &proj) {
                        Some(data) => g.add(svg_util::data_to_path(
                            data,
                            &[
                                ("fill", &*index_to_color(cell.index).rgb_string()),
                                ("fill-opacity", &*fill_opacity),
                                ("stroke", "none"),
                            ],
                        )),
                        None => g,
                    },
                );
                group = group.add(cells_group);
            }
            _ => {
                let fill = match overlay {
                    Some(o) => index_to_color(o.base_index()),
                    None => theme.no_data_fill,
                };
                group = group.add(svg_util::data_to_path(
                    outline_data.clone(),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("fill-opacity", &*fill_opacity),
                    ],
                ));
            }
        }

        group = group.add(svg_util::data_to_path(
            outline_data.clone(),
            &[
                ("fill", "none"),
                ("stroke", &*format!("{}", theme.outline)),
                ("stroke-width", &*format!("{stroke_width}")),
                ("stroke-linejoin", "round"),
            ],
        ));

        if options.highlight_selection && selection.contains(field.id) {
            group = group.add(svg_util::data_to_path(
                outline_data,
                &[
                    ("fill", "none"),
                    ("stroke", &*format!("{}", theme.selection_highlight)),
                    ("stroke-width", &*format!("{}", 3.0 * stroke_width)),
                    ("stroke-linejoin", "round"),
                ],
            ));
        }

        let status = match overlay {
            Some(o) => {
                let (min, max) = o.index_range();
                format!(
                    ", index: {min:.3} - {max:.3} ({})",
                    NdviBand::of((min + max) / 2.0).label()
                )
            }
            None => String::new(),
        };
        group = group.add(Title::new(format!(
            "{}, id: {}, area: {}{}",
            field.display_name(),
            field.id,
            format_area(field.area_ha()),
            status
        )));
        fields_group = fields_group.add(group);

        if options.labels {
            if let Some(anchor) = field.geometry.centroid() {
                let (x, y) = proj.project(anchor);
                labels_group = labels_group.add(
                    Text::new(format!(
                        "{} ({})",
                        field.display_name(),
                        format_area(field.area_ha())
                    ))
                    .set("x", x)
                    .set("y", y)
                    .set("text-anchor", "middle")
                    .set("font-size", 0.5 * font_size)
                    .set("font-family", "monospace")
                    .set("fill", format!("{}", theme.outline)),
                );
            }
        }
    }

    let vbox_svg = (
        -margin,
        -margin - font_size,
        width + 2.0 * margin,
        height + 2.0 * margin + font_size,
    );

    let background = svg_util::data_to_path(
        svg::node::element::path::Data::new()
            .move_to((vbox_svg.0, vbox_svg.1))
            .horizontal_line_by(vbox_svg.2)
            .vertical_line_by(vbox_svg.3)
            .horizontal_line_by(-vbox_svg.2)
            .close(),
        &[("fill", &*format!("{}", theme.background))],
    );

    Document::new()
        .set("viewBox", vbox_svg)
        .add(defs)
        .add(background)
        .add(fields_group)
        .add(labels_group)
        .add(label)
}
