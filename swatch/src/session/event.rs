use swatch_color::Rgb;

use crate::collection::{ColorRecord, RecordId};

/// User interactions driving a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The color text field changed.
    TextChanged(String),
    /// The picker or sliders produced a new color.
    ChannelsChanged(Rgb),
    /// The name field changed.
    NameChanged(String),
    /// The name field was explicitly cleared.
    ClearName,
    /// Save the current color under the current name.
    Save,
    /// Delete a saved color.
    Delete(RecordId),
    /// Discard the form and return to idle.
    Reset,
}

/// Outcome of a dispatched [`SessionEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    /// Form state changed; nothing was persisted.
    Updated,
    /// A record was appended and persisted.
    Saved(ColorRecord),
    /// A delete was processed; `removed` is false for unknown ids.
    Deleted { id: RecordId, removed: bool },
}
