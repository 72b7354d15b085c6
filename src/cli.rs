//! Command-line interface for termsettings.
//!
//! Loads a defaults and a user document the same way an application would
//! and reports what came out: the profile order, the default profile, the
//! warnings, or the effective settings for one profile.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use termsettings_config::{SettingsDocument, defaults, paths};

use crate::generators::FileProfileGenerator;
use crate::new_terminal_args::NewTerminalArgs;
use crate::options::LoadOptions;
use crate::settings::{AppIdentity, FirstRunContext, Settings, SettingsLoader};

/// termsettings - inspect how terminal settings documents reconcile
#[derive(Parser)]
#[command(name = "termsettings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Defaults document (default: the built-in defaults)
    #[arg(long, value_name = "PATH", global = true)]
    pub defaults: Option<PathBuf>,

    /// User settings document, JSON or YAML (default: the per-user settings file, if present)
    #[arg(long, value_name = "PATH", global = true)]
    pub user: Option<PathBuf>,

    /// JSON array of profiles to feed in as generator output
    #[arg(long, value_name = "PATH", global = true)]
    pub generated: Option<PathBuf>,

    /// Ignore generated profiles
    #[arg(long, global = true)]
    pub no_dynamic: bool,

    /// Substitute any environment variable in media paths, not just allowlisted ones
    #[arg(long, global = true)]
    pub allow_all_env_vars: bool,

    /// Set log level (overrides TERMSETTINGS_LOG)
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,
}

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevelArg::Off => log::LevelFilter::Off,
            LogLevelArg::Error => log::LevelFilter::Error,
            LogLevelArg::Warn => log::LevelFilter::Warn,
            LogLevelArg::Info => log::LevelFilter::Info,
            LogLevelArg::Debug => log::LevelFilter::Debug,
            LogLevelArg::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the settings and print profiles, default profile and warnings
    Check,

    /// Resolve a profile reference and print its effective settings
    Resolve {
        /// Profile name or identity string
        reference: Option<String>,

        /// Profile position in display order, used when the reference does not resolve
        #[arg(long)]
        index: Option<i32>,

        /// Override the command line
        #[arg(long)]
        commandline: Option<String>,

        /// Override the starting directory
        #[arg(long)]
        starting_directory: Option<String>,

        /// Override the starting title
        #[arg(long)]
        title: Option<String>,

        /// Print the effective settings as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the first-run user settings template with tokens filled in
    Template {
        /// Profile the new settings should default to
        #[arg(long, value_name = "NAME")]
        preferred: Option<String>,

        /// Product name for %PRODUCT%
        #[arg(long)]
        product: Option<String>,

        /// Version for %VERSION% (default: this tool's version)
        #[arg(long = "product-version")]
        product_version: Option<String>,
    },
}

/// Outcome of loading: the settings plus whether the built-in fallback was used.
struct Loaded {
    settings: Settings,
    fell_back: bool,
}

fn read_document(path: &Path) -> anyhow::Result<SettingsDocument> {
    SettingsDocument::from_path(path)
        .with_context(|| format!("Failed to load settings document {}", path.display()))
}

fn load(cli: &Cli) -> anyhow::Result<Loaded> {
    let defaults_doc = match &cli.defaults {
        Some(path) => read_document(path)?,
        None => defaults::document().context("Built-in defaults failed to parse")?,
    };

    let user_path = cli.user.clone().or_else(|| {
        let path = paths::user_settings_path();
        path.exists().then_some(path)
    });

    let user_doc = match user_path.as_deref().map(read_document).transpose() {
        Ok(doc) => doc.unwrap_or_default(),
        Err(e) => {
            eprintln!("error: {e:#}");
            eprintln!("Falling back to the defaults document.");
            let settings = Settings::load_defaults(defaults_doc)
                .context("The defaults document does not load either")?;
            return Ok(Loaded {
                settings,
                fell_back: true,
            });
        }
    };

    let mut loader = SettingsLoader::new(defaults_doc.clone())
        .user_settings(user_doc)
        .options(LoadOptions {
            add_dynamic_profiles: !cli.no_dynamic,
            allow_all_env_vars: cli.allow_all_env_vars,
            ..LoadOptions::default()
        });
    if let Some(path) = &cli.generated
        && !cli.no_dynamic
    {
        loader = loader.generator(FileProfileGenerator::new(path));
    }

    match loader.load() {
        Ok(settings) => Ok(Loaded {
            settings,
            fell_back: false,
        }),
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Falling back to the defaults document.");
            let settings = Settings::load_defaults(defaults_doc)
                .context("The defaults document does not load either")?;
            Ok(Loaded {
                settings,
                fell_back: true,
            })
        }
    }
}

fn print_check(settings: &Settings) {
    println!("Profiles:");
    for (index, profile) in settings.profiles().iter().enumerate() {
        let id = profile.guid.map(|id| id.braced().to_string()).unwrap_or_default();
        let marker = if profile.guid == Some(settings.default_profile_id()) {
            "*"
        } else {
            " "
        };
        match &profile.source {
            Some(source) => println!(
                "{marker} {index:>2}  {id}  {}  (from {source})",
                profile.display_name()
            ),
            None => println!("{marker} {index:>2}  {id}  {}", profile.display_name()),
        }
    }
    println!();
    println!("Default profile: {}", settings.default_profile_id().braced());
    println!("Color schemes: {}", settings.globals().color_schemes.len());
    println!("Keybindings: {}", settings.globals().keybindings.len());

    if settings.warnings().is_empty() {
        println!("No warnings.");
    } else {
        println!("Warnings:");
        for warning in settings.warnings() {
            let indent = if warning.is_keybinding_warning() { "    " } else { "  " };
            println!("{indent}- {warning}");
        }
    }
}

/// Run the parsed command. Returns the process exit code.
pub fn run(cli: Cli) -> anyhow::Result<i32> {
    let loaded = load(&cli)?;
    let settings = &loaded.settings;

    match cli.command {
        Commands::Check => {
            print_check(settings);
            Ok(if loaded.fell_back { 1 } else { 0 })
        }
        Commands::Resolve {
            reference,
            index,
            commandline,
            starting_directory,
            title,
            json,
        } => {
            let args = NewTerminalArgs {
                profile: reference,
                profile_index: index,
                commandline,
                starting_directory,
                tab_title: title,
            };
            let (id, effective) = settings.build_settings_for_args(&args)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&effective)?);
            } else {
                println!("Profile: {} {}", id.braced(), effective.profile_name);
                println!("Command line: {}", effective.commandline);
                if let Some(dir) = &effective.starting_directory {
                    println!("Starting directory: {dir}");
                }
                println!("Title: {}", effective.starting_title);
                println!(
                    "Color scheme: {}",
                    effective.color_scheme.as_deref().unwrap_or("(built-in)")
                );
                println!("Font: {} {}pt", effective.font_face, effective.font_size);
            }
            Ok(0)
        }
        Commands::Template {
            preferred,
            product,
            product_version,
        } => {
            let app = match (product, product_version) {
                (Some(product), version) => Some(AppIdentity {
                    product,
                    version: version.unwrap_or_else(|| crate::VERSION.to_string()),
                }),
                (None, None) => None,
                (None, Some(_)) => anyhow::bail!("--product-version requires --product"),
            };
            let ctx = FirstRunContext {
                preferred_profile: preferred.as_deref(),
                localization: None,
                app: app.as_ref(),
            };
            println!("{}", settings.first_run_user_settings(&ctx));
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    #[test]
    fn test_unreadable_generated_file_does_not_abort_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let user = dir.path().join("settings.json");
        std::fs::write(&user, "{}").expect("write");
        let user = user.to_str().expect("utf-8 path");
        let missing = dir.path().join("gen.json");
        let missing = missing.to_str().expect("utf-8 path");

        for extra in [&[][..], &["--no-dynamic"][..]] {
            let mut args = vec!["termsettings", "--user", user, "--generated", missing];
            args.extend_from_slice(extra);
            args.push("check");
            let loaded = load(&parse(&args)).expect("load");
            assert!(!loaded.fell_back);
            assert_eq!(loaded.settings.profiles().len(), 2);
        }
    }

    #[test]
    fn test_truncated_generated_file_does_not_abort_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let user = dir.path().join("settings.json");
        std::fs::write(&user, "{}").expect("write");
        let generated = dir.path().join("gen.json");
        std::fs::write(&generated, r#"[ { "name": "#).expect("write");

        let cli = parse(&[
            "termsettings",
            "--user",
            user.to_str().expect("utf-8 path"),
            "--generated",
            generated.to_str().expect("utf-8 path"),
            "check",
        ]);
        let loaded = load(&cli).expect("load");
        assert!(!loaded.fell_back);
        assert_eq!(loaded.settings.profiles().len(), 2);
    }

    #[test]
    fn test_no_dynamic_skips_generated_profiles() {
        let dir = tempfile::tempdir().expect("tempdir");
        let user = dir.path().join("settings.json");
        std::fs::write(&user, "{}").expect("write");
        let generated = dir.path().join("gen.json");
        std::fs::write(&generated, r#"[ { "name": "zsh" } ]"#).expect("write");
        let user = user.to_str().expect("utf-8 path");
        let generated = generated.to_str().expect("utf-8 path");

        let with = load(&parse(&["termsettings", "--user", user, "--generated", generated, "check"]))
            .expect("load");
        assert_eq!(with.settings.profiles().len(), 3);

        let without = load(&parse(&[
            "termsettings",
            "--user",
            user,
            "--generated",
            generated,
            "--no-dynamic",
            "check",
        ]))
        .expect("load");
        assert_eq!(without.settings.profiles().len(), 2);
    }
}
