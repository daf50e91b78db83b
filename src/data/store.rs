//! Channel Store Module
//! Owns the channel list, the current selection, and the form mode.

use super::channel::{default_channels, next_channel_id, Channel, ChannelDraft, ChannelId};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Channel list cannot be empty")]
    Empty,
    #[error("Duplicate channel id: {0}")]
    DuplicateId(ChannelId),
    #[error("No channel with id {0}")]
    NotFound(ChannelId),
    #[error("Cannot delete the last remaining channel")]
    LastChannel,
    #[error("Channel name is empty")]
    EmptyName,
    #[error("No channel is being edited")]
    NotEditing,
    #[error("Add form is not open")]
    NotAdding,
    #[error("Channel ids exhausted")]
    IdsExhausted,
}

/// What the form area is doing. Edit and add forms are never open together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    /// Working copy of the channel being edited
    Editing(Channel),
    /// Add form is open with this draft
    Adding(ChannelDraft),
}

/// Ordered channel list plus selection and UI mode.
///
/// Always holds at least one channel; the selection always names a
/// member of the list.
#[derive(Debug, Clone)]
pub struct ChannelStore {
    channels: Vec<Channel>,
    selected: ChannelId,
    mode: Mode,
}

impl ChannelStore {
    /// Build a store selecting the first channel.
    pub fn new(channels: Vec<Channel>) -> Result<Self, StoreError> {
        let first = channels.first().ok_or(StoreError::Empty)?.id;

        let mut seen = HashSet::new();
        for channel in &channels {
            if !seen.insert(channel.id) {
                return Err(StoreError::DuplicateId(channel.id));
            }
        }

        Ok(Self {
            channels,
            selected: first,
            mode: Mode::Browsing,
        })
    }

    /// Store holding the built-in sample channels.
    pub fn sample() -> Self {
        let channels = default_channels();
        Self {
            selected: channels[0].id,
            channels,
            mode: Mode::Browsing,
        }
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing(_))
    }

    pub fn is_adding(&self) -> bool {
        matches!(self.mode, Mode::Adding(_))
    }

    pub fn selected_id(&self) -> ChannelId {
        self.selected
    }

    /// The selected channel.
    pub fn selected(&self) -> &Channel {
        // Every mutation keeps the selection valid and the list non-empty.
        self.get(self.selected).unwrap_or(&self.channels[0])
    }

    pub fn get(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Delete is only offered while more than one channel remains.
    pub fn can_delete(&self) -> bool {
        self.channels.len() > 1
    }

    pub fn edit_buffer(&self) -> Option<&Channel> {
        match &self.mode {
            Mode::Editing(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn edit_buffer_mut(&mut self) -> Option<&mut Channel> {
        match &mut self.mode {
            Mode::Editing(buffer) => Some(buffer),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ChannelDraft> {
        match &self.mode {
            Mode::Adding(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut ChannelDraft> {
        match &mut self.mode {
            Mode::Adding(draft) => Some(draft),
            _ => None,
        }
    }

    /// Select a channel. Ignored while editing; returns whether the
    /// selection changed.
    pub fn select(&mut self, id: ChannelId) -> Result<bool, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        if self.is_editing() || self.selected == id {
            return Ok(false);
        }
        self.selected = id;
        Ok(true)
    }

    /// Open the edit form on a copy of the channel. Closes the add form.
    pub fn begin_edit(&mut self, id: ChannelId) -> Result<(), StoreError> {
        let buffer = self.get(id).cloned().ok_or(StoreError::NotFound(id))?;
        self.mode = Mode::Editing(buffer);
        Ok(())
    }

    /// Write the edit buffer back over the channel with the same id.
    pub fn save_edit(&mut self) -> Result<ChannelId, StoreError> {
        let Mode::Editing(buffer) = std::mem::take(&mut self.mode) else {
            return Err(StoreError::NotEditing);
        };

        let id = buffer.id;
        let slot = self
            .channels
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        *slot = buffer;
        Ok(id)
    }

    /// Drop the edit buffer without touching the list.
    pub fn cancel_edit(&mut self) {
        if self.is_editing() {
            self.mode = Mode::Browsing;
        }
    }

    /// Header button: close the add form if open, otherwise open it with a
    /// fresh draft (discarding any edit in progress).
    pub fn toggle_add_form(&mut self) {
        self.mode = if self.is_adding() {
            Mode::Browsing
        } else {
            Mode::Adding(ChannelDraft::default())
        };
    }

    /// Commit the add-form draft as a new channel.
    ///
    /// A blank name leaves the list and the open form untouched.
    pub fn add_channel(&mut self) -> Result<ChannelId, StoreError> {
        let draft = self.draft().ok_or(StoreError::NotAdding)?;
        if draft.is_blank() {
            return Err(StoreError::EmptyName);
        }

        let id = next_channel_id(&self.channels).ok_or(StoreError::IdsExhausted)?;
        let channel = draft.to_channel(id);
        self.channels.push(channel);
        self.mode = Mode::Browsing;
        Ok(id)
    }

    /// Remove a channel, refusing to empty the list.
    pub fn delete_channel(&mut self, id: ChannelId) -> Result<Channel, StoreError> {
        let index = self
            .channels
            .iter()
            .position(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;
        if !self.can_delete() {
            return Err(StoreError::LastChannel);
        }

        let removed = self.channels.remove(index);

        if self.selected == id {
            self.selected = self.channels[0].id;
        }
        if self.edit_buffer().is_some_and(|buffer| buffer.id == id) {
            self.mode = Mode::Browsing;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ChannelStore {
        ChannelStore::sample()
    }

    fn store_with_ids(ids: &[ChannelId]) -> ChannelStore {
        let channels = ids
            .iter()
            .map(|&id| Channel::new(id, format!("Channel {id}"), 100.0 * id as f64, 1000.0))
            .collect();
        ChannelStore::new(channels).unwrap()
    }

    fn open_add_form(store: &mut ChannelStore, name: &str, roi: &str, spend: &str) {
        store.toggle_add_form();
        let draft = store.draft_mut().unwrap();
        draft.name = name.to_string();
        draft.roi = roi.to_string();
        draft.spend = spend.to_string();
    }

    #[test]
    fn new_selects_first_channel() {
        let store = store();
        assert_eq!(store.selected().name, "Social Media");
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn sample_matches_validated_store() {
        let validated = ChannelStore::new(default_channels()).unwrap();
        assert_eq!(ChannelStore::sample().channels(), validated.channels());
        assert_eq!(ChannelStore::sample().selected_id(), validated.selected_id());
    }

    #[test]
    fn new_rejects_empty_list() {
        assert_eq!(ChannelStore::new(Vec::new()).unwrap_err(), StoreError::Empty);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let channels = vec![
            Channel::new(1, "a", 0.0, 0.0),
            Channel::new(1, "b", 0.0, 0.0),
        ];
        assert_eq!(
            ChannelStore::new(channels).unwrap_err(),
            StoreError::DuplicateId(1)
        );
    }

    #[test]
    fn select_changes_selection() {
        let mut store = store();
        assert_eq!(store.select(3), Ok(true));
        assert_eq!(store.selected().name, "Content Marketing");
        assert_eq!(store.select(3), Ok(false));
    }

    #[test]
    fn select_unknown_id_fails() {
        let mut store = store();
        assert_eq!(store.select(42), Err(StoreError::NotFound(42)));
        assert_eq!(store.selected_id(), 1);
    }

    #[test]
    fn select_is_ignored_while_editing() {
        let mut store = store();
        store.begin_edit(2).unwrap();
        assert_eq!(store.select(4), Ok(false));
        assert_eq!(store.selected_id(), 1);
    }

    #[test]
    fn select_allowed_while_adding() {
        let mut store = store();
        store.toggle_add_form();
        assert_eq!(store.select(5), Ok(true));
        assert!(store.is_adding());
    }

    #[test]
    fn begin_edit_copies_channel_and_closes_add_form() {
        let mut store = store();
        store.toggle_add_form();
        store.begin_edit(2).unwrap();
        assert!(!store.is_adding());
        assert_eq!(store.edit_buffer(), store.get(2));
    }

    #[test]
    fn begin_edit_unknown_id_fails() {
        let mut store = store();
        assert_eq!(store.begin_edit(99), Err(StoreError::NotFound(99)));
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn save_edit_replaces_only_matching_channel() {
        let mut store = store();
        let before = store.channels().to_vec();

        store.begin_edit(2).unwrap();
        {
            let buffer = store.edit_buffer_mut().unwrap();
            buffer.name = "Newsletter".to_string();
            buffer.roi = 610.0;
            buffer.spend = 9000.0;
        }
        assert_eq!(store.save_edit(), Ok(2));

        for (old, new) in before.iter().zip(store.channels()) {
            if old.id == 2 {
                assert_eq!(new, &Channel::new(2, "Newsletter", 610.0, 9000.0));
            } else {
                assert_eq!(old, new);
            }
        }
        assert_eq!(store.mode(), &Mode::Browsing);
        assert!(store.edit_buffer().is_none());
    }

    #[test]
    fn save_edit_updates_selected_view() {
        let mut store = store();
        store.select(2).unwrap();
        store.begin_edit(2).unwrap();
        store.edit_buffer_mut().unwrap().roi = 100.0;
        store.save_edit().unwrap();
        assert_eq!(store.selected().roi, 100.0);
        assert_eq!(store.selected().name, "Email Marketing");
    }

    #[test]
    fn save_edit_without_edit_fails() {
        let mut store = store();
        assert_eq!(store.save_edit(), Err(StoreError::NotEditing));
    }

    #[test]
    fn cancel_edit_discards_buffer() {
        let mut store = store();
        let before = store.channels().to_vec();
        store.begin_edit(1).unwrap();
        store.edit_buffer_mut().unwrap().name = "Changed".to_string();
        store.cancel_edit();
        assert_eq!(store.channels(), before.as_slice());
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn cancel_edit_leaves_add_form_alone() {
        let mut store = store();
        store.toggle_add_form();
        store.cancel_edit();
        assert!(store.is_adding());
    }

    #[test]
    fn toggle_add_form_round_trip() {
        let mut store = store();
        store.toggle_add_form();
        assert_eq!(store.draft(), Some(&ChannelDraft::default()));
        store.toggle_add_form();
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn toggle_add_form_discards_edit() {
        let mut store = store();
        store.begin_edit(3).unwrap();
        store.toggle_add_form();
        assert!(store.is_adding());
        assert!(store.edit_buffer().is_none());
    }

    #[test]
    fn add_channel_appends_with_next_id() {
        let mut store = store_with_ids(&[1, 2, 3, 5]);
        open_add_form(&mut store, "Display", "150", "2500");
        assert_eq!(store.add_channel(), Ok(6));

        let added = store.channels().last().unwrap();
        assert_eq!(added, &Channel::new(6, "Display", 150.0, 2500.0));
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn add_channel_draft_resets_for_next_add() {
        let mut store = store();
        open_add_form(&mut store, "Display", "150", "2500");
        store.add_channel().unwrap();
        store.toggle_add_form();
        assert_eq!(store.draft(), Some(&ChannelDraft::default()));
    }

    #[test]
    fn add_channel_with_blank_name_keeps_form_open() {
        let mut store = store();
        let before = store.channels().to_vec();
        open_add_form(&mut store, "   ", "150", "2500");

        assert_eq!(store.add_channel(), Err(StoreError::EmptyName));
        assert_eq!(store.channels(), before.as_slice());
        assert!(store.is_adding());
        assert_eq!(store.draft().unwrap().roi, "150");
    }

    #[test]
    fn add_channel_requires_open_form() {
        let mut store = store();
        assert_eq!(store.add_channel(), Err(StoreError::NotAdding));
    }

    #[test]
    fn add_channel_after_max_id_is_refused() {
        let mut store =
            ChannelStore::new(vec![Channel::new(ChannelId::MAX, "Big", 100.0, 1.0)]).unwrap();
        open_add_form(&mut store, "Next", "100", "1");

        assert_eq!(store.add_channel(), Err(StoreError::IdsExhausted));
        assert_eq!(store.len(), 1);
        assert!(store.is_adding());
        assert_eq!(store.draft().unwrap().name, "Next");
    }

    #[test]
    fn add_channel_with_garbage_number_stores_nan() {
        let mut store = store();
        open_add_form(&mut store, "Radio", "lots", "");
        let id = store.add_channel().unwrap();
        let added = store.get(id).unwrap();
        assert!(added.roi.is_nan());
        assert_eq!(added.spend, 0.0);
    }

    #[test]
    fn delete_selected_moves_selection_to_first() {
        let mut store = store();
        store.select(1).unwrap();
        let removed = store.delete_channel(1).unwrap();
        assert_eq!(removed.name, "Social Media");
        assert_eq!(store.selected_id(), 2);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn delete_other_keeps_selection() {
        let mut store = store();
        store.select(3).unwrap();
        store.delete_channel(1).unwrap();
        assert_eq!(store.selected_id(), 3);
    }

    #[test]
    fn delete_last_channel_is_refused() {
        let mut store = store_with_ids(&[7]);
        assert!(!store.can_delete());
        assert_eq!(store.delete_channel(7), Err(StoreError::LastChannel));
        assert_eq!(store.len(), 1);
        assert_eq!(store.selected_id(), 7);
    }

    #[test]
    fn delete_down_to_one_then_stop() {
        let mut store = store_with_ids(&[1, 2]);
        store.delete_channel(1).unwrap();
        assert_eq!(store.selected_id(), 2);
        assert_eq!(store.delete_channel(2), Err(StoreError::LastChannel));
    }

    #[test]
    fn delete_unknown_id_fails() {
        let mut store = store();
        assert_eq!(store.delete_channel(99), Err(StoreError::NotFound(99)));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn delete_channel_under_edit_cancels_edit() {
        let mut store = store();
        store.begin_edit(4).unwrap();
        store.delete_channel(4).unwrap();
        assert_eq!(store.mode(), &Mode::Browsing);
    }

    #[test]
    fn delete_other_channel_keeps_edit() {
        let mut store = store();
        store.begin_edit(4).unwrap();
        store.delete_channel(5).unwrap();
        assert_eq!(store.edit_buffer().map(|c| c.id), Some(4));
    }

    #[test]
    fn next_id_follows_current_max() {
        let mut store = store();
        store.delete_channel(5).unwrap();
        open_add_form(&mut store, "Affiliate", "300", "100");
        assert_eq!(store.add_channel(), Ok(5));
        store.delete_channel(3).unwrap();
        open_add_form(&mut store, "Podcast", "300", "100");
        assert_eq!(store.add_channel(), Ok(6));
    }
}
