//! Profile types for terminal session configurations.
//!
//! A [`Profile`] is produced either by a settings document entry or by a
//! profile generator. Every field is optional so that a user document entry
//! can be layered on top of a defaults or generated entry, overriding only the
//! keys it actually specifies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color_scheme::Color;

/// Unique identifier for a profile.
pub type ProfileId = Uuid;

/// Length of a brace-wrapped identity string: `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`.
pub const PROFILE_ID_STRING_LEN: usize = 38;

/// Format an identity the way settings documents spell it.
pub fn profile_id_to_string(id: &ProfileId) -> String {
    id.braced().to_string()
}

/// Parse an identity-shaped string.
///
/// Only brace-wrapped 38 character strings are considered; anything else is
/// definitely not an identity and yields `None` without attempting a parse.
pub fn parse_profile_id(s: &str) -> Option<ProfileId> {
    if s.len() != PROFILE_ID_STRING_LEN || !s.starts_with('{') {
        return None;
    }
    Uuid::parse_str(s).ok()
}

/// Cursor shape used when rendering the terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CursorShape {
    #[default]
    Bar,
    Vintage,
    Underscore,
    FilledBox,
    EmptyBox,
}

/// What to do with the tab when the profile's process exits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CloseOnExit {
    #[default]
    Graceful,
    Always,
    Never,
}

/// A terminal session profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Identity. Absent until the identity resolver fills it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<ProfileId>,

    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace of the generator that produced this profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Hidden profiles are dropped during validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,

    /// Color scheme reference, by scheme name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,

    /// Icon path or URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Background image path or URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image_opacity: Option<f32>,

    /// Command line to launch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,

    /// Starting tab title (falls back to the profile name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_shape: Option<CursorShape>,

    /// Scrollback lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_size: Option<u32>,

    /// Padding, e.g. "8, 8, 8, 8"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap_on_input: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_on_exit: Option<CloseOnExit>,

    // Per-profile overrides of the scheme palette
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_color: Option<Color>,
}

impl Profile {
    /// Create a profile with only a display name set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builder method to set the identity
    pub fn guid(mut self, id: ProfileId) -> Self {
        self.guid = Some(id);
        self
    }

    /// Builder method to set the generator namespace
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder method to set the hidden flag
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    /// Builder method to set the color scheme name
    pub fn color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(scheme.into());
        self
    }

    /// Builder method to set the icon
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Builder method to set the background image
    pub fn background_image(mut self, path: impl Into<String>) -> Self {
        self.background_image = Some(path.into());
        self
    }

    /// Builder method to set the command line
    pub fn commandline(mut self, cmd: impl Into<String>) -> Self {
        self.commandline = Some(cmd.into());
        self
    }

    /// Builder method to set the starting directory
    pub fn starting_directory(mut self, dir: impl Into<String>) -> Self {
        self.starting_directory = Some(dir.into());
        self
    }

    /// Builder method to set the tab title
    pub fn tab_title(mut self, title: impl Into<String>) -> Self {
        self.tab_title = Some(title.into());
        self
    }

    /// Display name, empty when the entry had none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden.unwrap_or(false)
    }

    /// Scheme name, empty when unset
    pub fn color_scheme_name(&self) -> &str {
        self.color_scheme.as_deref().unwrap_or_default()
    }

    /// Layer `overlay` on top of this profile: every field the overlay
    /// specifies replaces the current value.
    pub fn layer(&mut self, overlay: Profile) {
        self.guid = overlay.guid.or(self.guid);
        self.name = overlay.name.or(self.name.take());
        self.source = overlay.source.or(self.source.take());
        self.hidden = overlay.hidden.or(self.hidden);
        self.color_scheme = overlay.color_scheme.or(self.color_scheme.take());
        self.icon = overlay.icon.or(self.icon.take());
        self.background_image = overlay.background_image.or(self.background_image.take());
        self.background_image_opacity = overlay
            .background_image_opacity
            .or(self.background_image_opacity);
        self.commandline = overlay.commandline.or(self.commandline.take());
        self.starting_directory = overlay
            .starting_directory
            .or(self.starting_directory.take());
        self.tab_title = overlay.tab_title.or(self.tab_title.take());
        self.font_face = overlay.font_face.or(self.font_face.take());
        self.font_size = overlay.font_size.or(self.font_size);
        self.cursor_shape = overlay.cursor_shape.or(self.cursor_shape);
        self.history_size = overlay.history_size.or(self.history_size);
        self.padding = overlay.padding.or(self.padding.take());
        self.snap_on_input = overlay.snap_on_input.or(self.snap_on_input);
        self.close_on_exit = overlay.close_on_exit.or(self.close_on_exit);
        self.foreground = overlay.foreground.or(self.foreground);
        self.background = overlay.background.or(self.background);
        self.cursor_color = overlay.cursor_color.or(self.cursor_color);
    }

    /// Fill every absent field from `base`. Identity, name and source are
    /// never inherited.
    pub fn inherit(&mut self, base: &Profile) {
        self.hidden = self.hidden.or(base.hidden);
        self.color_scheme = self.color_scheme.take().or_else(|| base.color_scheme.clone());
        self.icon = self.icon.take().or_else(|| base.icon.clone());
        self.background_image = self
            .background_image
            .take()
            .or_else(|| base.background_image.clone());
        self.background_image_opacity = self
            .background_image_opacity
            .or(base.background_image_opacity);
        self.commandline = self.commandline.take().or_else(|| base.commandline.clone());
        self.starting_directory = self
            .starting_directory
            .take()
            .or_else(|| base.starting_directory.clone());
        self.tab_title = self.tab_title.take().or_else(|| base.tab_title.clone());
        self.font_face = self.font_face.take().or_else(|| base.font_face.clone());
        self.font_size = self.font_size.or(base.font_size);
        self.cursor_shape = self.cursor_shape.or(base.cursor_shape);
        self.history_size = self.history_size.or(base.history_size);
        self.padding = self.padding.take().or_else(|| base.padding.clone());
        self.snap_on_input = self.snap_on_input.or(base.snap_on_input);
        self.close_on_exit = self.close_on_exit.or(base.close_on_exit);
        self.foreground = self.foreground.or(base.foreground);
        self.background = self.background.or(base.background);
        self.cursor_color = self.cursor_color.or(base.cursor_color);
    }
}
