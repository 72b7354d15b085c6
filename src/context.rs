//! The application's handle to the current settings.
//!
//! Consumers never share a mutable settings object. They hold an
//! `Arc<Settings>` snapshot; a reload builds a complete new object off to the
//! side and publishes it atomically, so a reader sees either the old or the
//! new settings and never anything in between.

use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::error::SettingsLoadError;
use crate::settings::Settings;

pub struct SettingsContext {
    current: ArcSwap<Settings>,
}

impl SettingsContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            current: ArcSwap::from_pointee(settings),
        }
    }

    /// The current snapshot. Stays valid after later reloads.
    pub fn current(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Replace the current snapshot, returning the previous one.
    pub fn publish(&self, settings: Settings) -> Arc<Settings> {
        self.current.swap(Arc::new(settings))
    }

    /// Build new settings with `load` and publish them.
    ///
    /// On a fatal load error the previous snapshot stays current.
    pub fn reload<F>(&self, load: F) -> Result<Arc<Settings>, SettingsLoadError>
    where
        F: FnOnce() -> Result<Settings, SettingsLoadError>,
    {
        match load() {
            Ok(settings) => {
                let settings = Arc::new(settings);
                self.current.store(Arc::clone(&settings));
                log::info!("Published reloaded settings");
                Ok(settings)
            }
            Err(e) => {
                log::error!("Settings reload failed, keeping previous settings: {e}");
                Err(e)
            }
        }
    }
}
