//! Stable profile identities.
//!
//! Profiles that carry an explicit `guid` keep it. Everything else gets a
//! name-based (v5) identity derived from the profile's name and, for
//! generated profiles, the generator namespace. The derivation is pure, so
//! re-reading the same documents always yields the same identities and user
//! customisations keyed by identity survive a reload.

use termsettings_config::{Profile, ProfileEntry, ProfileId};
use uuid::Uuid;

/// Namespace for identities generated for profiles without an explicit guid.
pub const RUNTIME_GENERATED_PROFILE_NAMESPACE: ProfileId =
    Uuid::from_u128(0xf65ddb7e_706b_4499_8a50_40313caf510a);

/// Names are hashed as UTF-16LE so identities match those written by other
/// tools sharing the same settings files.
fn utf16le_bytes(s: &str) -> Vec<u8> {
    s.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Derive the identity for a profile with the given name and source.
///
/// Never fails; an empty name still yields a valid identity.
pub fn generate_profile_id(name: &str, source: Option<&str>) -> ProfileId {
    let namespace = match source.filter(|s| !s.is_empty()) {
        Some(source) => Uuid::new_v5(&RUNTIME_GENERATED_PROFILE_NAMESPACE, &utf16le_bytes(source)),
        None => RUNTIME_GENERATED_PROFILE_NAMESPACE,
    };
    Uuid::new_v5(&namespace, &utf16le_bytes(name))
}

/// The identity a profile has, or will have once resolved.
pub fn identity_of(profile: &Profile) -> ProfileId {
    profile.guid.unwrap_or_else(|| {
        generate_profile_id(profile.display_name(), profile.source.as_deref())
    })
}

/// The identity of a raw document entry, using the same rule as [`identity_of`].
pub fn identity_of_entry(entry: &ProfileEntry<'_>) -> ProfileId {
    entry
        .guid()
        .unwrap_or_else(|| generate_profile_id(entry.name().unwrap_or_default(), entry.source()))
}

/// Give the profile an identity if it has none. Returns the identity.
pub fn ensure_identity(profile: &mut Profile) -> ProfileId {
    let id = identity_of(profile);
    if profile.guid.is_none() {
        log::debug!(
            "Generated identity {} for profile '{}'",
            id.braced(),
            profile.display_name()
        );
        profile.guid = Some(id);
    }
    id
}
