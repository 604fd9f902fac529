//! SelectionSet

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::model::ArtworkId;

/// Selected flags keyed by artwork id.
///
/// An id that was never flagged reads as not selected. Ids are never removed
/// once flagged, only flipped, so the set remembers selections on pages that
/// are not currently shown.
///
/// # Example
///
/// ```
/// use artic_lib::model::ArtworkId;
/// use artic_lib::selection::SelectionSet;
///
/// let mut selection = SelectionSet::new();
/// selection.flag(ArtworkId::new(7), true);
/// selection.flag(ArtworkId::new(7), false);
///
/// assert!(!selection.is_selected(ArtworkId::new(7)));
/// assert!(selection.contains(ArtworkId::new(7)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    flags: BTreeMap<ArtworkId, bool>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the id is flagged as selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Returns `true` if the id has ever been flagged, either way.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.flags.contains_key(&id)
    }

    /// Returns the stored flag for an id, if any.
    pub fn flag_of(&self, id: ArtworkId) -> Option<bool> {
        self.flags.get(&id).copied()
    }

    /// Sets the flag for one id.
    pub fn flag(&mut self, id: ArtworkId, selected: bool) {
        self.flags.insert(id, selected);
    }

    /// Sets the same flag on every id. Other ids are left untouched.
    pub fn flag_all<I>(&mut self, ids: I, selected: bool)
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        for id in ids {
            self.flags.insert(id, selected);
        }
    }

    /// Flips the flag for one id and returns the new value.
    pub fn toggle(&mut self, id: ArtworkId) -> bool {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Applies a page-level selection change.
    ///
    /// Every id in `visible` is flagged according to whether it appears in
    /// `selected`. Ids in `selected` that are not visible are ignored, and ids
    /// from other pages keep their flags.
    pub fn sync_page<I>(&mut self, visible: I, selected: &[ArtworkId])
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        let selected: HashSet<ArtworkId> = selected.iter().copied().collect();
        for id in visible {
            self.flags.insert(id, selected.contains(&id));
        }
    }

    /// Returns the selected ids in ascending order.
    pub fn selected_ids(&self) -> Vec<ArtworkId> {
        self.flags
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Returns the number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.flags.values().filter(|selected| **selected).count()
    }

    /// Returns the number of ids that have been flagged, either way.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Returns `true` if no id has ever been flagged.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Iterates over all stored flags in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtworkId, bool)> + '_ {
        self.flags.iter().map(|(id, selected)| (*id, *selected))
    }
}
