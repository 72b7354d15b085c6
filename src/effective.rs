//! Flattened settings for launching one terminal instance.

use serde::Serialize;
use termsettings_config::{
    CloseOnExit, Color, ColorScheme, CursorShape, GlobalSettings, Profile, ProfileId,
};

#[cfg(windows)]
pub const DEFAULT_COMMANDLINE: &str = "cmd.exe";
#[cfg(not(windows))]
pub const DEFAULT_COMMANDLINE: &str = "/bin/sh";

pub const DEFAULT_FONT_FACE: &str = "Cascadia Mono";
pub const DEFAULT_FONT_SIZE: f32 = 12.0;
pub const DEFAULT_HISTORY_SIZE: u32 = 9001;
pub const DEFAULT_PADDING: &str = "8, 8, 8, 8";

/// Everything needed to start and render one terminal.
///
/// Built fresh on each request by [`Settings::build_settings`](crate::Settings::build_settings)
/// and never written back into the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveSettings {
    pub profile_id: ProfileId,
    pub profile_name: String,

    // Launch
    pub commandline: String,
    pub starting_directory: Option<String>,
    pub starting_title: String,
    pub close_on_exit: CloseOnExit,

    // Appearance
    pub color_scheme: Option<String>,
    pub foreground: Color,
    pub background: Color,
    pub cursor_color: Color,
    pub selection_background: Color,
    pub color_table: [Color; 16],
    pub font_face: String,
    pub font_size: f32,
    pub cursor_shape: CursorShape,
    pub padding: String,
    pub icon: Option<String>,
    pub background_image: Option<String>,
    pub background_image_opacity: f32,

    // Behavior
    pub history_size: u32,
    pub snap_on_input: bool,

    // Window-level options copied from the globals
    pub initial_rows: u32,
    pub initial_cols: u32,
    pub copy_on_select: bool,
    pub word_delimiters: String,
    pub snap_to_grid_on_resize: bool,
}

impl Default for EffectiveSettings {
    fn default() -> Self {
        let scheme = ColorScheme::campbell();
        let globals = GlobalSettings::default();
        Self {
            profile_id: ProfileId::nil(),
            profile_name: String::new(),
            commandline: DEFAULT_COMMANDLINE.to_string(),
            starting_directory: None,
            starting_title: String::new(),
            close_on_exit: CloseOnExit::default(),
            color_scheme: None,
            foreground: scheme.foreground,
            background: scheme.background,
            cursor_color: scheme.cursor_color,
            selection_background: scheme.selection_background,
            color_table: scheme.color_table(),
            font_face: DEFAULT_FONT_FACE.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            cursor_shape: CursorShape::default(),
            padding: DEFAULT_PADDING.to_string(),
            icon: None,
            background_image: None,
            background_image_opacity: 1.0,
            history_size: DEFAULT_HISTORY_SIZE,
            snap_on_input: true,
            initial_rows: globals.initial_rows,
            initial_cols: globals.initial_cols,
            copy_on_select: globals.copy_on_select,
            word_delimiters: globals.word_delimiters,
            snap_to_grid_on_resize: globals.snap_to_grid_on_resize,
        }
    }
}

impl EffectiveSettings {
    /// Take the palette from `scheme`.
    pub fn apply_color_scheme(&mut self, scheme: &ColorScheme) {
        self.color_scheme = Some(scheme.name.clone());
        self.foreground = scheme.foreground;
        self.background = scheme.background;
        self.cursor_color = scheme.cursor_color;
        self.selection_background = scheme.selection_background;
        self.color_table = scheme.color_table();
    }

    /// Copy every field the profile specifies.
    pub(crate) fn apply_profile(&mut self, profile: &Profile) {
        self.profile_name = profile.display_name().to_string();
        if let Some(id) = profile.guid {
            self.profile_id = id;
        }
        if let Some(commandline) = &profile.commandline {
            self.commandline = commandline.clone();
        }
        self.starting_directory = profile.starting_directory.clone();
        self.starting_title = profile
            .tab_title
            .clone()
            .unwrap_or_else(|| self.profile_name.clone());
        if let Some(close) = profile.close_on_exit {
            self.close_on_exit = close;
        }
        if let Some(face) = &profile.font_face {
            self.font_face = face.clone();
        }
        if let Some(size) = profile.font_size {
            self.font_size = size;
        }
        if let Some(shape) = profile.cursor_shape {
            self.cursor_shape = shape;
        }
        if let Some(padding) = &profile.padding {
            self.padding = padding.clone();
        }
        self.icon = profile.icon.clone().filter(|icon| !icon.is_empty());
        self.background_image = profile
            .background_image
            .clone()
            .filter(|image| !image.is_empty());
        if let Some(opacity) = profile.background_image_opacity {
            self.background_image_opacity = opacity.clamp(0.0, 1.0);
        }
        if let Some(history) = profile.history_size {
            self.history_size = history;
        }
        if let Some(snap) = profile.snap_on_input {
            self.snap_on_input = snap;
        }

        // Per-profile colors win over the scheme
        if let Some(fg) = profile.foreground {
            self.foreground = fg;
        }
        if let Some(bg) = profile.background {
            self.background = bg;
        }
        if let Some(cursor) = profile.cursor_color {
            self.cursor_color = cursor;
        }
    }

    pub(crate) fn apply_globals(&mut self, globals: &GlobalSettings) {
        self.initial_rows = globals.initial_rows;
        self.initial_cols = globals.initial_cols;
        self.copy_on_select = globals.copy_on_select;
        self.word_delimiters = globals.word_delimiters.clone();
        self.snap_to_grid_on_resize = globals.snap_to_grid_on_resize;
    }
}
