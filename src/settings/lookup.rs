//! Resolving profile references.
//!
//! None of these fail: an unresolvable reference is `None`.

use termsettings_config::{Profile, ProfileId, parse_profile_id};

use super::Settings;
use crate::new_terminal_args::NewTerminalArgs;

impl Settings {
    /// The profile with exactly this identity.
    pub fn find_profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.guid == Some(id))
    }

    /// Resolve a name-or-identity reference.
    ///
    /// An identity-shaped string that matches a profile wins. Otherwise the
    /// first profile whose display name matches exactly (case-sensitive) is
    /// used, so an identity string with no matching profile still gets a
    /// chance as a name.
    pub fn profile_id_by_name(&self, reference: &str) -> Option<ProfileId> {
        if let Some(id) = parse_profile_id(reference)
            && self.find_profile(id).is_some()
        {
            return Some(id);
        }

        self.profiles
            .iter()
            .find(|profile| profile.name.as_deref() == Some(reference))
            .and_then(|profile| profile.guid)
    }

    /// Identity of the profile at `index` in display order, if in range.
    pub fn profile_id_by_index(&self, index: Option<i32>) -> Option<ProfileId> {
        let index = usize::try_from(index?).ok()?;
        self.profiles.get(index).and_then(|profile| profile.guid)
    }

    /// Pick the profile a new-terminal request targets.
    ///
    /// A non-empty name or identity takes precedence over an index, and the
    /// default profile is used when neither resolves.
    pub fn profile_for_args(&self, args: &NewTerminalArgs) -> ProfileId {
        args.profile
            .as_deref()
            .filter(|reference| !reference.is_empty())
            .and_then(|reference| self.profile_id_by_name(reference))
            .or_else(|| self.profile_id_by_index(args.profile_index))
            .unwrap_or(self.globals.default_profile)
    }
}
