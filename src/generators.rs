//! Dynamic profile generators.
//!
//! A generator synthesizes profiles from the environment (installed shells,
//! WSL distributions, SSH hosts...). Generators run once per load, before the
//! merge. A generator that fails is logged and contributes no profiles; it
//! never aborts the load.

use anyhow::Context;
use std::path::PathBuf;

use termsettings_config::Profile;

/// Source of dynamically generated profiles.
pub trait ProfileGenerator: Send + Sync {
    /// Namespace stamped into `source` of every profile this generator emits.
    /// Participates in identity derivation, so it must be stable.
    fn namespace(&self) -> &str;

    fn generate(&self) -> anyhow::Result<Vec<Profile>>;
}

/// A generator that always returns the same list.
#[derive(Debug, Clone)]
pub struct StaticProfileGenerator {
    namespace: String,
    profiles: Vec<Profile>,
}

impl StaticProfileGenerator {
    pub fn new(namespace: impl Into<String>, profiles: Vec<Profile>) -> Self {
        Self {
            namespace: namespace.into(),
            profiles,
        }
    }
}

impl ProfileGenerator for StaticProfileGenerator {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn generate(&self) -> anyhow::Result<Vec<Profile>> {
        Ok(self.profiles.clone())
    }
}

/// Reads a JSON array of profiles from a file each time it runs.
///
/// The namespace is the file stem, so renaming the file changes the
/// identities of profiles that carry no explicit guid.
#[derive(Debug, Clone)]
pub struct FileProfileGenerator {
    namespace: String,
    path: PathBuf,
}

impl FileProfileGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let namespace = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("Generated")
            .to_string();
        Self { namespace, path }
    }
}

impl ProfileGenerator for FileProfileGenerator {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn generate(&self) -> anyhow::Result<Vec<Profile>> {
        let text = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read generated profiles {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse generated profiles {}", self.path.display()))
    }
}

/// Run every generator and collect their output in generator order.
///
/// Profiles without a `source` get the generator's namespace.
pub(crate) fn run_generators(generators: &[Box<dyn ProfileGenerator>]) -> Vec<Profile> {
    let mut generated = Vec::new();
    for generator in generators {
        let namespace = generator.namespace();
        match generator.generate() {
            Ok(profiles) => {
                log::debug!(
                    "Generator '{}' produced {} profile(s)",
                    namespace,
                    profiles.len()
                );
                generated.extend(profiles.into_iter().map(|mut profile| {
                    if profile.source.is_none() {
                        profile.source = Some(namespace.to_string());
                    }
                    profile
                }));
            }
            Err(e) => {
                log::warn!("Profile generator '{}' failed: {:#}", namespace, e);
            }
        }
    }
    generated
}
