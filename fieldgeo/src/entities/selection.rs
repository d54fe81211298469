use std::collections::BTreeSet;

use crate::entities::FieldId;

/// Set of fields currently chosen in a map editor.
///
/// Starts empty, is changed by toggling single fields or bulk-adding the result of a polygon draw,
/// and is cleared explicitly or when the editor closes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSelection {
    ids: BTreeSet<FieldId>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the selection state of `id`, returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: FieldId) -> bool {
        match self.ids.remove(&id) {
            true => false,
            false => self.ids.insert(id),
        }
    }

    /// Adds all `ids`, returns how many of them were not selected yet.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = FieldId>) -> usize {
        ids.into_iter().filter(|id| self.ids.insert(*id)).count()
    }

    pub fn remove(&mut self, id: FieldId) -> bool {
        self.ids.remove(&id)
    }

    /// Removes every id for which `keep` returns false, returns how many were removed.
    pub fn retain(&mut self, keep: impl FnMut(&FieldId) -> bool) -> usize {
        let n_before = self.ids.len();
        self.ids.retain(keep);
        n_before - self.ids.len()
    }

    /// Deselects everything, returns how many fields were selected.
    pub fn clear(&mut self) -> usize {
        let n = self.ids.len();
        self.ids.clear();
        n
    }

    pub fn contains(&self, id: FieldId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<FieldId> for FieldSelection {
    fn from_iter<T: IntoIterator<Item = FieldId>>(iter: T) -> Self {
        FieldSelection {
            ids: iter.into_iter().collect(),
        }
    }
}
