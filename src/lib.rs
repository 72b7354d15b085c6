// Library exports for the settings reconciliation engine and the CLI
//
// Load flow: generators + documents -> merge -> identities -> validation ->
// immutable `Settings` snapshot -> `EffectiveSettings` built per request.

/// Crate version, the CLI's default for `%VERSION%`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod context;
pub mod debug;
pub mod effective;
pub mod env_vars;
pub mod error;
pub mod generators;
pub mod identity;
pub mod media;
pub mod new_terminal_args;
pub mod options;
pub mod settings;

pub use context::SettingsContext;
pub use effective::EffectiveSettings;
pub use error::{SettingsError, SettingsLoadError};
pub use generators::{FileProfileGenerator, ProfileGenerator, StaticProfileGenerator};
pub use identity::{RUNTIME_GENERATED_PROFILE_NAMESPACE, generate_profile_id};
pub use media::{MediaError, MediaResolver, UriMediaResolver};
pub use new_terminal_args::NewTerminalArgs;
pub use options::LoadOptions;
pub use settings::{AppIdentity, FirstRunContext, LocalizedStrings, Settings, SettingsLoader};
