use std::collections::HashMap;

use slotmap::{SlotMap, new_key_type};

use crate::entities::FieldId;

new_key_type! {
    /// Key of a layer handle stored in a [`LayerRegistry`]
    pub struct LayerKey;
}

/// Arena of map layer handles, indexed by the field they draw.
///
/// [`insert`](Self::insert) and [`remove`](Self::remove) are the only ways handles enter or leave the registry
/// (apart from [`drain`](Self::drain) when the editor closes). Every handle that leaves is returned
/// to the caller, who is responsible for detaching it from the map.
#[derive(Debug, Clone)]
pub struct LayerRegistry<H> {
    layers: SlotMap<LayerKey, (FieldId, H)>,
    by_field: HashMap<FieldId, LayerKey>,
}

impl<H> LayerRegistry<H> {
    pub fn new() -> Self {
        Self {
            layers: SlotMap::with_key(),
            by_field: HashMap::new(),
        }
    }

    /// Registers `handle` as the layer of `field_id`.
    /// Returns the handle it replaces, if the field already had one.
    pub fn insert(&mut self, field_id: FieldId, handle: H) -> Option<H> {
        let replaced = self.remove(field_id);
        let key = self.layers.insert((field_id, handle));
        self.by_field.insert(field_id, key);
        debug_assert!(self.layers.len() == self.by_field.len());
        replaced
    }

    /// Unregisters the layer of `field_id` and hands it back.
    pub fn remove(&mut self, field_id: FieldId) -> Option<H> {
        let key = self.by_field.remove(&field_id)?;
        self.layers.remove(key).map(|(_, handle)| handle)
    }

    pub fn get(&self, field_id: FieldId) -> Option<&H> {
        let key = self.by_field.get(&field_id)?;
        self.layers.get(*key).map(|(_, handle)| handle)
    }

    pub fn get_mut(&mut self, field_id: FieldId) -> Option<&mut H> {
        let key = self.by_field.get(&field_id)?;
        self.layers.get_mut(*key).map(|(_, handle)| handle)
    }

    pub fn key(&self, field_id: FieldId) -> Option<LayerKey> {
        self.by_field.get(&field_id).copied()
    }

    pub fn contains(&self, field_id: FieldId) -> bool {
        self.by_field.contains_key(&field_id)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &H)> {
        self.layers.values().map(|(id, handle)| (*id, handle))
    }

    /// Removes the layers of all fields for which `keep` returns false and hands them back.
    pub fn remove_where(&mut self, mut keep: impl FnMut(FieldId) -> bool) -> Vec<(FieldId, H)> {
        let stale = self
            .by_field
            .keys()
            .copied()
            .filter(|id| !keep(*id))
            .collect::<Vec<_>>();
        stale
            .into_iter()
            .filter_map(|id| self.remove(id).map(|handle| (id, handle)))
            .collect()
    }

    /// Empties the registry, handing back every handle.
    pub fn drain(&mut self) -> Vec<(FieldId, H)> {
        self.by_field.clear();
        self.layers.drain().map(|(_, entry)| entry).collect()
    }
}

impl<H> Default for LayerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
