//! Edit session: current input, palette suggestions and save/delete.

mod event;
mod state;

use std::sync::Arc;

pub use event::{SessionEffect, SessionEvent};
pub use state::{
    ColorInput, EditDraft, InputStatus, NameSource, SessionPhase,
};

use swatch_color::{PaletteIndex, Rgb, is_hex_color_prefix, parse_color};
use swatch_store::BlobStore;

use crate::collection::{ColorCollection, ColorRecord, RecordId};
use crate::error::{Error, Result, ValidationError};

/// Drives one user session over a persisted color collection.
///
/// Input events update the form synchronously. Saves and deletes take
/// `&mut self` across the store round-trip, so at most one mutation of the
/// collection is in flight. A save that is dropped before completing leaves
/// the form and the in-memory collection as they were; the store itself may
/// still finish the write (`FileStore` does its IO on blocking threads), in
/// which case the next [`ColorCollection::reload`] picks it up.
#[derive(Debug)]
pub struct SessionController<S> {
    collection: ColorCollection<S>,
    palette: Arc<PaletteIndex>,
    draft: Option<EditDraft>,
    last_error: Option<String>,
}

impl<S: BlobStore> SessionController<S> {
    pub fn new(
        collection: ColorCollection<S>,
        palette: Arc<PaletteIndex>,
    ) -> Self {
        Self {
            collection,
            palette,
            draft: None,
            last_error: None,
        }
    }

    /// Load the collection stored under `key` and start an idle session.
    pub async fn open(
        store: S,
        key: impl Into<String>,
        palette: Arc<PaletteIndex>,
    ) -> Result<Self> {
        let collection = ColorCollection::open(store, key).await?;
        Ok(Self::new(collection, palette))
    }

    /// Apply one event.
    pub async fn dispatch(
        &mut self,
        event: SessionEvent,
    ) -> Result<SessionEffect> {
        match event {
            SessionEvent::TextChanged(text) => self.text_changed(text),
            SessionEvent::ChannelsChanged(color) => {
                self.channels_changed(color)
            },
            SessionEvent::NameChanged(name) => self.name_changed(name),
            SessionEvent::ClearName => self.clear_name(),
            SessionEvent::Reset => self.reset(),
            SessionEvent::Save => {
                return self.save().await.map(SessionEffect::Saved);
            },
            SessionEvent::Delete(id) => {
                let removed = self.delete(&id).await?;
                return Ok(SessionEffect::Deleted { id, removed });
            },
        }
        Ok(SessionEffect::Updated)
    }

    /// Color text changed; unparseable text is kept but not applied.
    ///
    /// The draft's [`InputStatus`] tells a partly typed hex color apart
    /// from text that cannot become one.
    pub fn text_changed(&mut self, text: impl Into<String>) {
        let text = text.into();
        let parsed = parse_color(&text);
        let status = match &parsed {
            Ok(_) => InputStatus::Valid,
            Err(_) if is_hex_color_prefix(text.trim()) => {
                InputStatus::Incomplete
            },
            Err(_) => InputStatus::Invalid,
        };
        self.draft_mut().set_input(ColorInput::Text(text), status);

        match parsed {
            Ok(color) => self.apply_color(color),
            Err(err) => log::debug!("color input not applied: {err}"),
        }
    }

    /// The picker produced a new color.
    pub fn channels_changed(&mut self, color: Rgb) {
        self.draft_mut()
            .set_input(ColorInput::Channels(color), InputStatus::Valid);
        self.apply_color(color);
    }

    pub fn name_changed(&mut self, name: impl Into<String>) {
        self.draft_mut().set_name(name.into());
    }

    /// Empty the name field and let the next palette match fill it.
    pub fn clear_name(&mut self) {
        self.draft_mut().clear_name();
    }

    /// Drop the form and return to idle.
    pub fn reset(&mut self) {
        self.draft = None;
        self.last_error = None;
    }

    /// Save the cached color under the current name.
    ///
    /// On success the form is cleared and the session goes idle. On failure
    /// the form is kept and the message is available from
    /// [`Self::last_error`].
    pub async fn save(&mut self) -> Result<ColorRecord> {
        let (name, color) = match self.save_request() {
            Ok(request) => request,
            Err(err) => return Err(self.fail("Failed to save color", err)),
        };

        match self.collection.add(&name, color).await {
            Ok(record) => {
                self.draft = None;
                self.last_error = None;
                log::debug!("session: editing -> idle");
                Ok(record)
            },
            Err(err) => Err(self.fail("Failed to save color", err)),
        }
    }

    /// Delete a saved color. Allowed in any phase; the form is untouched.
    pub async fn delete(&mut self, id: &RecordId) -> Result<bool> {
        match self.collection.remove(id).await {
            Ok(removed) => {
                self.last_error = None;
                Ok(removed)
            },
            Err(err) => Err(self.fail("Failed to delete color", err)),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.draft.is_some() {
            SessionPhase::Editing
        } else {
            SessionPhase::Idle
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Latest successfully parsed color of the current edit.
    pub fn current_color(&self) -> Option<Rgb> {
        self.draft.as_ref().and_then(EditDraft::color)
    }

    pub fn name(&self) -> &str {
        self.draft.as_ref().map_or("", EditDraft::name)
    }

    /// Palette name of the current color, if it has one.
    pub fn suggestion(&self) -> Option<&str> {
        self.draft.as_ref().and_then(EditDraft::suggestion)
    }

    /// User-facing message for the last failed save or delete.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn records(&self) -> &[ColorRecord] {
        self.collection.records()
    }

    pub fn collection(&self) -> &ColorCollection<S> {
        &self.collection
    }

    pub fn palette(&self) -> &PaletteIndex {
        &self.palette
    }

    fn draft_mut(&mut self) -> &mut EditDraft {
        if self.draft.is_none() {
            log::debug!("session: idle -> editing");
        }
        self.draft.get_or_insert_with(EditDraft::default)
    }

    fn apply_color(&mut self, color: Rgb) {
        let suggestion = self.palette.lookup_exact(color).map(str::to_string);
        self.draft_mut().set_color(color, suggestion);
    }

    fn save_request(
        &self,
    ) -> std::result::Result<(String, Rgb), ValidationError> {
        let name = self.name();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let color = self.current_color().ok_or(ValidationError::NoColor)?;
        Ok((name.to_string(), color))
    }

    fn fail(&mut self, context: &str, err: impl Into<Error>) -> Error {
        let err = err.into();
        log::warn!("{context}: {err}");
        self.last_error = Some(format!("{context}: {err}"));
        err
    }
}
