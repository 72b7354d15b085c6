//! Profile merge and display ordering.
//!
//! Merging works layer by layer. The defaults document contributes its
//! profiles first. Each user entry is then layered onto the earlier profile
//! with the same identity (from the defaults document or a generator), or
//! appended when it introduces a new identity. Generator profiles the user
//! never mentioned go last.
//!
//! Within one layer entries are never folded together: two user entries with
//! the same identity both survive the merge, and validation drops the second
//! one as a duplicate.

use std::collections::{HashMap, HashSet};

use termsettings_config::{Profile, ProfileId, SettingsDocument};

use crate::identity::{identity_of, identity_of_entry};

fn document_profiles(document: &SettingsDocument, label: &str) -> Vec<Profile> {
    document
        .profile_entries()
        .iter()
        .filter_map(|entry| match entry.to_profile() {
            Ok(profile) => Some(profile),
            Err(e) => {
                log::warn!(
                    "Skipping malformed {} profile entry '{}': {}",
                    label,
                    entry.name().unwrap_or_default(),
                    e
                );
                None
            }
        })
        .collect()
}

/// The user document's `profiles.defaults` object, stripped of anything
/// that would change a profile's identity.
fn user_profile_defaults(user: &SettingsDocument) -> Option<Profile> {
    user.profile_defaults().map(|mut defaults| {
        defaults.guid = None;
        defaults.name = None;
        defaults.source = None;
        defaults
    })
}

/// Combine defaults, user entries and generator output into one collection.
///
/// Field precedence for each resulting profile, lowest first: the defaults
/// document or generator entry, the user's `profiles.defaults`, the user's
/// own entry.
pub(crate) fn merge_profiles(
    defaults: &SettingsDocument,
    user: &SettingsDocument,
    generated: Vec<Profile>,
) -> Vec<Profile> {
    let user_defaults = user_profile_defaults(user);
    let with_user_defaults = |mut profile: Profile| {
        if let Some(overlay) = &user_defaults {
            profile.layer(overlay.clone());
        }
        profile
    };

    let mut merged: Vec<Profile> = Vec::new();
    let mut base_index: HashMap<ProfileId, usize> = HashMap::new();
    for profile in document_profiles(defaults, "defaults") {
        base_index.entry(identity_of(&profile)).or_insert(merged.len());
        merged.push(with_user_defaults(profile));
    }

    let mut generated: Vec<Option<Profile>> = generated.into_iter().map(Some).collect();
    let mut generated_index: HashMap<ProfileId, usize> = HashMap::new();
    for (i, profile) in generated.iter().enumerate() {
        if let Some(profile) = profile {
            generated_index.entry(identity_of(profile)).or_insert(i);
        }
    }

    let mut claimed: HashSet<ProfileId> = HashSet::new();
    for entry in document_profiles(user, "user") {
        let id = identity_of(&entry);
        if !claimed.insert(id) {
            log::debug!("User document repeats identity {}", id.braced());
            let mut profile = entry;
            if let Some(base) = &user_defaults {
                profile.inherit(base);
            }
            merged.push(profile);
            continue;
        }

        if let Some(&i) = base_index.get(&id) {
            merged[i].layer(entry);
        } else if let Some(base) = generated_index
            .get(&id)
            .and_then(|&i| generated[i].take())
        {
            let mut profile = with_user_defaults(base);
            profile.layer(entry);
            merged.push(profile);
        } else {
            let mut profile = entry;
            if let Some(base) = &user_defaults {
                profile.inherit(base);
            }
            merged.push(profile);
        }
    }

    let mut present: HashSet<ProfileId> = merged.iter().map(identity_of).collect();
    for profile in generated.into_iter().flatten() {
        if present.insert(identity_of(&profile)) {
            merged.push(with_user_defaults(profile));
        } else {
            log::debug!(
                "Dropping generated profile '{}': identity already present",
                profile.display_name()
            );
        }
    }

    log::debug!("Merged {} profile(s)", merged.len());
    merged
}

/// Identities in display order: the user document's entries first, then the
/// defaults document's, each identity once.
pub(crate) fn display_order(user: &SettingsDocument, defaults: &SettingsDocument) -> Vec<ProfileId> {
    let mut seen = HashSet::new();
    user.profile_entries()
        .iter()
        .chain(defaults.profile_entries().iter())
        .map(identity_of_entry)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Stable reorder of `profiles` by `order`.
///
/// For each identity in `order`, the first not-yet-placed profile with that
/// identity moves to the front section. Everything else keeps its relative
/// order behind it. Identities with no matching profile are ignored.
pub(crate) fn reorder_profiles(profiles: Vec<Profile>, order: &[ProfileId]) -> Vec<Profile> {
    let mut first_index: HashMap<ProfileId, usize> = HashMap::new();
    for (i, profile) in profiles.iter().enumerate() {
        first_index.entry(identity_of(profile)).or_insert(i);
    }

    let mut slots: Vec<Option<Profile>> = profiles.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(slots.len());
    for id in order {
        if let Some(profile) = first_index.get(id).and_then(|&i| slots[i].take()) {
            ordered.push(profile);
        }
    }
    ordered.extend(slots.into_iter().flatten());
    ordered
}
