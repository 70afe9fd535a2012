use swatch_color::Rgb;

/// Where the color under edit came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorInput {
    /// Free text typed by the user, possibly not (yet) a valid color.
    Text(String),
    /// Channels delivered by the picker or sliders.
    Channels(Rgb),
}

impl Default for ColorInput {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// How the color field's current text reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStatus {
    /// The text parses as a color.
    Valid,
    /// Not a color yet, but more hex digits could make it one.
    #[default]
    Incomplete,
    /// No continuation of the text is a hex color and it does not parse.
    Invalid,
}

/// Who wrote the current contents of the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameSource {
    /// The field is empty (or was cleared); a palette match may fill it.
    #[default]
    Empty,
    /// Filled from the first palette match of this edit session.
    Palette,
    /// Typed by the user; never overwritten by palette matches.
    Custom,
}

/// Form contents while the user is editing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
    input: ColorInput,
    input_status: InputStatus,
    color: Option<Rgb>,
    name: String,
    name_source: NameSource,
    suggestion: Option<String>,
}

impl EditDraft {
    pub fn input(&self) -> &ColorInput {
        &self.input
    }

    /// Text to show in the color field.
    pub fn input_text(&self) -> String {
        match &self.input {
            ColorInput::Text(text) => text.clone(),
            ColorInput::Channels(color) => color.to_hex(),
        }
    }

    pub fn input_status(&self) -> InputStatus {
        self.input_status
    }

    /// Latest color that parsed successfully in this edit session.
    pub fn color(&self) -> Option<Rgb> {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_source(&self) -> NameSource {
        self.name_source
    }

    /// Palette name of the cached color, whether or not it filled the name.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub(super) fn set_input(
        &mut self,
        input: ColorInput,
        status: InputStatus,
    ) {
        self.input = input;
        self.input_status = status;
    }

    /// Cache a freshly parsed color and its palette match.
    ///
    /// The match fills the name field only while the field is empty.
    pub(super) fn set_color(&mut self, color: Rgb, suggestion: Option<String>) {
        self.color = Some(color);
        if self.name_source == NameSource::Empty {
            if let Some(name) = &suggestion {
                self.name = name.clone();
                self.name_source = NameSource::Palette;
            }
        }
        self.suggestion = suggestion;
    }

    pub(super) fn set_name(&mut self, name: String) {
        self.name_source = if name.trim().is_empty() {
            NameSource::Empty
        } else {
            NameSource::Custom
        };
        self.name = name;
    }

    pub(super) fn clear_name(&mut self) {
        self.name.clear();
        self.name_source = NameSource::Empty;
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Nothing entered since start or since the last successful save.
    #[default]
    Idle,
    /// The form holds input that has not been saved yet.
    Editing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_name_when_color_matches_then_name_is_filled() {
        let mut draft = EditDraft::default();

        draft.set_color(Rgb::new(255, 0, 0), Some(String::from("Red")));

        assert_eq!(draft.name(), "Red");
        assert_eq!(draft.name_source(), NameSource::Palette);
    }

    #[test]
    fn given_palette_name_when_another_match_then_first_match_wins() {
        let mut draft = EditDraft::default();
        draft.set_color(Rgb::new(255, 0, 0), Some(String::from("Red")));

        draft.set_color(Rgb::new(0, 0, 255), Some(String::from("Blue")));

        assert_eq!(draft.name(), "Red");
        assert_eq!(draft.suggestion(), Some("Blue"));
    }

    #[test]
    fn given_custom_name_when_color_matches_then_name_is_kept() {
        let mut draft = EditDraft::default();
        draft.set_name(String::from("My red"));

        draft.set_color(Rgb::new(255, 0, 0), Some(String::from("Red")));

        assert_eq!(draft.name(), "My red");
        assert_eq!(draft.name_source(), NameSource::Custom);
    }

    #[test]
    fn given_cleared_name_when_color_matches_then_name_is_filled_again() {
        let mut draft = EditDraft::default();
        draft.set_name(String::from("Mine"));
        draft.clear_name();

        draft.set_color(Rgb::new(0, 0, 255), Some(String::from("Blue")));

        assert_eq!(draft.name(), "Blue");
    }

    #[test]
    fn given_channel_input_when_rendered_then_shows_canonical_hex() {
        let mut draft = EditDraft::default();

        draft.set_input(
            ColorInput::Channels(Rgb::new(1, 2, 3)),
            InputStatus::Valid,
        );

        assert_eq!(draft.input_text(), "#010203");
        assert_eq!(draft.input_status(), InputStatus::Valid);
    }
}
