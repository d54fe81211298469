use std::collections::HashSet;

use log::{debug, trace, warn};

use crate::entities::{Field, FieldId, FieldSelection, LayerRegistry};
use crate::geometry::primitives::{Point, Polygon};
use crate::lookup::find_containing_field;
use crate::selector::select_fields_in_polygon;
use crate::util::FPA;

/// Interactions a map view forwards to the editor.
///
/// Layer click handlers of the mapping integration emit these directly,
/// instead of going through globally registered callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum MapEvent {
    /// Map clicked at a point: toggles the first field containing it
    Click(Point),
    /// Toggle button of a field's popup or list entry
    ToggleField(FieldId),
    /// User finished drawing a selection polygon
    PolygonDrawn(Polygon),
    /// Cursor moved over the map
    Hover(Point),
    ClearSelection,
}

/// What changed in response to a [`MapEvent`]
#[derive(Clone, Debug, PartialEq)]
pub enum EditorOutcome {
    Toggled {
        field_id: FieldId,
        selected: bool,
    },
    /// Fields matched by a drawn polygon, in snapshot order. May be empty, the caller decides whether to notify the user.
    PolygonSelection {
        matched: Vec<FieldId>,
        newly_selected: usize,
    },
    HoverChanged(Option<FieldId>),
    Cleared(usize),
    Unchanged,
}

#[derive(Clone, Copy, Debug)]
struct HoverCache {
    point: Point,
    target: Option<FieldId>,
}

type Listener = Box<dyn FnMut(&EditorOutcome)>;

/// State behind an interactive field-selection map.
///
/// Owns the field snapshot, the [`FieldSelection`] and the [`LayerRegistry`] of drawn layers (of handle type `H`).
/// All mutations go through [`FieldEditor::handle`] and are serialized by the caller.
pub struct FieldEditor<H> {
    fields: Vec<Field>,
    selection: FieldSelection,
    layers: LayerRegistry<H>,
    hover: Option<HoverCache>,
    listeners: Vec<Listener>,
}

impl<H> FieldEditor<H> {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            selection: FieldSelection::new(),
            layers: LayerRegistry::new(),
            hover: None,
            listeners: vec![],
        }
    }

    /// Registers a listener, invoked after every event that changed something.
    pub fn subscribe(&mut self, listener: impl FnMut(&EditorOutcome) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn handle(&mut self, event: MapEvent) -> EditorOutcome {
        let outcome = match event {
            MapEvent::Click(point) => match find_containing_field(&point, &self.fields) {
                Some(field) => {
                    let field_id = field.id;
                    let selected = self.selection.toggle(field_id);
                    EditorOutcome::Toggled { field_id, selected }
                }
                None => EditorOutcome::Unchanged,
            },
            MapEvent::ToggleField(field_id) => {
                match self.fields.iter().any(|f| f.id == field_id) {
                    true => {
                        let selected = self.selection.toggle(field_id);
                        EditorOutcome::Toggled { field_id, selected }
                    }
                    false => {
                        warn!("[EDIT] toggle of unknown field {field_id} ignored");
                        EditorOutcome::Unchanged
                    }
                }
            }
            MapEvent::PolygonDrawn(polygon) => {
                let matched = select_fields_in_polygon(&polygon, &self.fields);
                let newly_selected = self.selection.extend(matched.iter().copied());
                debug!(
                    "[EDIT] drawn polygon matched {} field(s), {} newly selected",
                    matched.len(),
                    newly_selected
                );
                EditorOutcome::PolygonSelection {
                    matched,
                    newly_selected,
                }
            }
            MapEvent::Hover(point) => self.hover(point),
            MapEvent::ClearSelection => match self.selection.clear() {
                0 => EditorOutcome::Unchanged,
                n => EditorOutcome::Cleared(n),
            },
        };

        if outcome != EditorOutcome::Unchanged {
            self.listeners.iter_mut().for_each(|l| l(&outcome));
        }
        outcome
    }

    /// Hover lookups run on every mouse move, repeated events at the same position reuse the last result.
    fn hover(&mut self, point: Point) -> EditorOutcome {
        let previous = self.hover;
        if let Some(cache) = previous {
            if FPA(cache.point.lat()) == FPA(point.lat()) && FPA(cache.point.lng()) == FPA(point.lng()) {
                trace!("[EDIT] hover at {point:?} served from cache");
                return EditorOutcome::Unchanged;
            }
        }
        let target = find_containing_field(&point, &self.fields).map(|f| f.id);
        self.hover = Some(HoverCache { point, target });

        match previous.map(|c| c.target) {
            Some(prev_target) if prev_target == target => EditorOutcome::Unchanged,
            None if target.is_none() => EditorOutcome::Unchanged,
            _ => EditorOutcome::HoverChanged(target),
        }
    }

    /// Replaces the field snapshot, e.g. after the field listing was reloaded.
    ///
    /// Selected ids and layers of fields that disappeared are dropped, the removed layer handles are returned.
    pub fn set_fields(&mut self, fields: Vec<Field>) -> Vec<(FieldId, H)> {
        let ids = fields.iter().map(|f| f.id).collect::<HashSet<_>>();
        let n_deselected = self.selection.retain(|id| ids.contains(id));
        let stale_layers = self.layers.remove_where(|id| ids.contains(&id));
        if n_deselected > 0 {
            debug!("[EDIT] {n_deselected} selected field(s) no longer exist");
        }
        self.fields = fields;
        self.hover = None;
        stale_layers
    }

    /// Clears all state when the editor closes, returning every layer handle for disposal.
    pub fn close(&mut self) -> Vec<(FieldId, H)> {
        self.selection.clear();
        self.hover = None;
        self.layers.drain()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn selection(&self) -> &FieldSelection {
        &self.selection
    }

    /// Selected fields, in snapshot order
    pub fn selected_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields
            .iter()
            .filter(|f| self.selection.contains(f.id))
    }

    pub fn hovered(&self) -> Option<FieldId> {
        self.hover.and_then(|c| c.target)
    }

    pub fn layers(&self) -> &LayerRegistry<H> {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerRegistry<H> {
        &mut self.layers
    }
}
