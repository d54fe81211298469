mod common;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use fieldgeo::entities::{EditorOutcome, Field, FieldEditor, FieldSelection, LayerRegistry, MapEvent};
    use fieldgeo::geometry::primitives::Point;

    use crate::common::{circle_field, square, square_field};

    fn fields() -> Vec<Field> {
        vec![
            square_field(1, 0.0, 0.0, 10.0),
            square_field(2, 5.0, 5.0, 10.0),
            circle_field(3, 30.0, 30.0, 1000.0),
        ]
    }

    /// Layer handles are plain strings in tests
    fn editor() -> FieldEditor<String> {
        FieldEditor::new(fields())
    }

    #[test]
    fn selection_set_operations() {
        let mut selection = FieldSelection::new();
        assert!(selection.toggle(4));
        assert!(selection.toggle(2));
        assert!(!selection.toggle(4));
        assert_eq!(selection.extend([1, 2, 3]), 2);
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(selection.retain(|id| *id != 2), 1);
        assert!(selection.remove(3));
        assert!(!selection.remove(3));
        assert_eq!(selection.clear(), 1);
        assert!(selection.is_empty());

        let collected: FieldSelection = [5, 5, 6].into_iter().collect();
        assert_eq!(collected.len(), 2);
    }

    #[test]
    fn layer_registry_hands_back_every_handle() {
        let mut layers = LayerRegistry::new();
        assert_eq!(layers.insert(1, "a".to_string()), None);
        assert_eq!(layers.insert(2, "b".to_string()), None);
        assert_eq!(layers.insert(1, "a2".to_string()), Some("a".to_string()));
        assert_eq!(layers.len(), 2);
        assert_eq!(layers.get(1).map(String::as_str), Some("a2"));
        assert!(layers.key(2).is_some());

        if let Some(handle) = layers.get_mut(2) {
            handle.push('!');
        }
        assert_eq!(layers.remove(2), Some("b!".to_string()));
        assert_eq!(layers.remove(2), None);
        assert!(!layers.contains(2));

        layers.insert(3, "c".to_string());
        let stale = layers.remove_where(|id| id == 3);
        assert_eq!(stale, vec![(1, "a2".to_string())]);

        let drained = layers.drain();
        assert_eq!(drained, vec![(3, "c".to_string())]);
        assert!(layers.is_empty());
    }

    #[test]
    fn click_toggles_first_containing_field() {
        let mut editor = editor();
        assert_eq!(
            editor.handle(MapEvent::Click(Point(7.0, 7.0))),
            EditorOutcome::Toggled {
                field_id: 1,
                selected: true
            }
        );
        assert_eq!(
            editor.handle(MapEvent::Click(Point(2.0, 2.0))),
            EditorOutcome::Toggled {
                field_id: 1,
                selected: false
            }
        );
        assert_eq!(
            editor.handle(MapEvent::Click(Point(50.0, 50.0))),
            EditorOutcome::Unchanged
        );
        assert!(editor.selection().is_empty());
    }

    #[test]
    fn toggle_by_id() {
        let mut editor = editor();
        assert_eq!(
            editor.handle(MapEvent::ToggleField(3)),
            EditorOutcome::Toggled {
                field_id: 3,
                selected: true
            }
        );
        assert_eq!(editor.handle(MapEvent::ToggleField(99)), EditorOutcome::Unchanged);
        assert_eq!(
            editor.selected_fields().map(|f| f.id).collect::<Vec<_>>(),
            vec![3]
        );
    }

    #[test]
    fn drawn_polygon_adds_to_selection() {
        let mut editor = editor();
        editor.handle(MapEvent::ToggleField(2));

        let outcome = editor.handle(MapEvent::PolygonDrawn(square(-1.0, -1.0, 17.0)));
        assert_eq!(
            outcome,
            EditorOutcome::PolygonSelection {
                matched: vec![1, 2],
                newly_selected: 1
            }
        );

        // an empty match is reported, not swallowed
        let outcome = editor.handle(MapEvent::PolygonDrawn(square(60.0, 60.0, 1.0)));
        assert_eq!(
            outcome,
            EditorOutcome::PolygonSelection {
                matched: vec![],
                newly_selected: 0
            }
        );
        assert_eq!(editor.selection().len(), 2);

        assert_eq!(editor.handle(MapEvent::ClearSelection), EditorOutcome::Cleared(2));
        assert_eq!(editor.handle(MapEvent::ClearSelection), EditorOutcome::Unchanged);
    }

    #[test]
    fn hover_reports_changes_only() {
        let mut editor = editor();
        assert_eq!(
            editor.handle(MapEvent::Hover(Point(2.0, 2.0))),
            EditorOutcome::HoverChanged(Some(1))
        );
        // same position, served from the cache
        assert_eq!(editor.handle(MapEvent::Hover(Point(2.0, 2.0))), EditorOutcome::Unchanged);
        // moved within the same field
        assert_eq!(editor.handle(MapEvent::Hover(Point(3.0, 3.0))), EditorOutcome::Unchanged);
        assert_eq!(editor.hovered(), Some(1));

        assert_eq!(
            editor.handle(MapEvent::Hover(Point(50.0, 50.0))),
            EditorOutcome::HoverChanged(None)
        );
        assert_eq!(editor.hovered(), None);
    }

    #[test]
    fn listeners_see_every_change() {
        let seen = Rc::new(RefCell::new(vec![]));
        let mut editor = editor();
        {
            let seen = seen.clone();
            editor.subscribe(move |outcome| seen.borrow_mut().push(outcome.clone()));
        }

        editor.handle(MapEvent::Click(Point(2.0, 2.0)));
        editor.handle(MapEvent::Click(Point(50.0, 50.0)));
        editor.handle(MapEvent::ToggleField(3));
        editor.handle(MapEvent::ClearSelection);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen.last(), Some(&EditorOutcome::Cleared(2)));
    }

    #[test]
    fn reloading_fields_prunes_selection_and_layers() {
        let mut editor = editor();
        editor.handle(MapEvent::ToggleField(1));
        editor.handle(MapEvent::ToggleField(2));
        for id in [1, 2, 3] {
            editor.layers_mut().insert(id, format!("layer {id}"));
        }

        let remaining = editor
            .fields()
            .iter()
            .filter(|f| f.id != 2)
            .cloned()
            .collect();
        let stale = editor.set_fields(remaining);

        assert_eq!(stale, vec![(2, "layer 2".to_string())]);
        assert_eq!(editor.selection().iter().collect::<Vec<_>>(), vec![1]);
        assert_eq!(editor.layers().len(), 2);

        let mut disposed = editor.close();
        disposed.sort();
        assert_eq!(
            disposed,
            vec![(1, "layer 1".to_string()), (3, "layer 3".to_string())]
        );
        assert!(editor.selection().is_empty());
        assert!(editor.layers().is_empty());
    }
}
