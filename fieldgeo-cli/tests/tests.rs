#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::path::Path;

    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use fieldgeo::entities::{Field, FieldId, FieldSelection};
    use fieldgeo::geometry::Geometry;
    use fieldgeo::geometry::geo_enums::DrawType;
    use fieldgeo::geometry::primitives::{Point, Polygon};
    use fieldgeo_cli::commands;
    use fieldgeo_cli::config::FieldGeoConfig;
    use fieldgeo_cli::io;

    const FIELDS_PATH: &str = "../assets/fields.json";
    const SELECTION_PATH: &str = "../assets/selection.json";
    const INDICES_PATH: &str = "../assets/indices.json";
    const CONFIG_PATH: &str = "../assets/config.json";

    #[test]
    fn bad_records_are_skipped() {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let ids = fields.iter().map(|f| f.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![101, 102, 103, 104, 107]);
    }

    #[test_case(Point(-4.0775, 104.1625), Some(101), None; "inside block")]
    #[test_case(Point(-4.0705, 104.168), Some(103), None; "inside circle")]
    #[test_case(Point(-4.2, 104.0), None, Some(104); "outside falls back to nearest")]
    fn locate(point: Point, containing: Option<FieldId>, nearest: Option<FieldId>) {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let output = commands::locate(&fields, point, false, &FieldGeoConfig::default());

        let found = output.containing.first().map(|s| s.id);
        assert_eq!(found, containing);
        assert_eq!(output.nearest.map(|s| s.id), nearest);
    }

    #[test]
    fn select_with_drawn_polygon() {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let drawn = io::read_polygon(Path::new(SELECTION_PATH)).unwrap();
        let output = commands::select(&fields, &drawn);

        let ids = output.selected.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![101, 102]);
        let sum = output.selected[0].area_ha + output.selected[1].area_ha;
        assert!(approx_eq!(f64, output.total_area_ha, sum, ulps = 2));
    }

    #[test]
    fn area_report() {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let output = commands::area(&fields);

        let nursery = output.fields.iter().find(|s| s.id == 103).unwrap();
        assert!(approx_eq!(f64, nursery.area_ha, 19.63, epsilon = 0.01));
        assert_eq!(nursery.area, "19.63 ha");

        let strip = output.fields.iter().find(|s| s.id == 107).unwrap();
        assert_eq!(strip.area, "0 m²");

        let total = output.fields.iter().map(|s| s.area_ha).sum::<f64>();
        assert!(approx_eq!(f64, output.total_area_ha, total, ulps = 2));
    }

    #[test]
    fn render_is_reproducible_with_a_seed() {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let indices = io::read_indices(Path::new(INDICES_PATH)).unwrap();
        let selection: FieldSelection = [101].into_iter().collect();
        let config: FieldGeoConfig = io::read_json(Path::new(CONFIG_PATH)).unwrap();

        let render = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            commands::render(&fields, &indices, &selection, false, &config, &mut rng)
        };
        let (doc_a, out_a) = render(0);
        let (doc_b, out_b) = render(0);

        assert_eq!(out_a, out_b);
        assert_eq!(doc_a.to_string(), doc_b.to_string());

        let overlay_ids = out_a.overlays.iter().map(|o| o.id).collect::<Vec<_>>();
        assert_eq!(overlay_ids, vec![101, 102, 104]);
        assert_eq!(out_a.without_index, vec![103, 107]);
        assert!(out_a.overlays.iter().all(|o| o.n_cells > 0));
        assert!(doc_a.to_string().contains("field_101"));
    }

    #[test]
    fn render_demo_mode() {
        let fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        let config = FieldGeoConfig {
            default_index: Some(0.5),
            ..FieldGeoConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let (document, output) = commands::render(
            &fields,
            &Default::default(),
            &FieldSelection::new(),
            true,
            &config,
            &mut rng,
        );

        assert!((8..=12).contains(&output.n_demo_polygons));
        // the degenerate strip gets a solid fill, every other field a gradient
        assert!(output.without_index.is_empty());
        let strip = output.overlays.iter().find(|o| o.id == 107).unwrap();
        assert_eq!(strip.n_cells, 0);
        assert!(document.to_string().contains("field_-1"));
    }

    #[test]
    fn demo_ids_stay_clear_of_field_ids() {
        let mut fields = io::read_fields(Path::new(FIELDS_PATH)).unwrap();
        fields.push(Field::new(
            -1,
            Some("negative id".to_string()),
            DrawType::Polygon,
            Geometry::Polygon(Polygon::new(vec![
                Point(-4.09, 104.15),
                Point(-4.09, 104.151),
                Point(-4.089, 104.151),
            ])),
        ));
        let config = FieldGeoConfig {
            default_index: Some(0.5),
            ..FieldGeoConfig::default()
        };
        let mut rng = SmallRng::seed_from_u64(5);
        let (document, output) = commands::render(
            &fields,
            &Default::default(),
            &FieldSelection::new(),
            true,
            &config,
            &mut rng,
        );

        let ids = output.overlays.iter().map(|o| o.id).collect::<HashSet<FieldId>>();
        assert_eq!(ids.len(), output.overlays.len());
        assert_eq!(output.overlays.len(), fields.len() + output.n_demo_polygons);
        assert!(ids.contains(&-2));
        assert!(document.to_string().contains("negative id"));
    }

    #[test]
    fn default_config_is_serializable() {
        let config = FieldGeoConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: FieldGeoConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
