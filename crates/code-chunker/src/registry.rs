use crate::language::Language;
use crate::profile::LanguageProfile;
use crate::profiles;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static GLOBAL: Lazy<ProfileRegistry> = Lazy::new(ProfileRegistry::new);

/// Immutable map from language to its chunking profile.
///
/// Built once (eagerly) and never mutated afterwards, so concurrent
/// extractions can share it without locking. Most callers use
/// [`ProfileRegistry::global`]; tests can build their own instance and
/// inject it via [`crate::ChunkExtractor::with_registry`].
pub struct ProfileRegistry {
    profiles: HashMap<Language, LanguageProfile>,
}

impl ProfileRegistry {
    /// Build a registry holding every supported language profile
    #[must_use]
    pub fn new() -> Self {
        let all = [
            profiles::rust::profile(),
            profiles::python::profile(),
            profiles::javascript::profile(),
            profiles::typescript::profile(),
            profiles::go::profile(),
            profiles::elixir::profile(),
        ];

        let mut profiles = HashMap::with_capacity(all.len());
        for profile in all {
            profiles.insert(profile.language(), profile);
        }
        Self { profiles }
    }

    /// Process-wide registry, initialized on first use
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Profile for a language, if one is registered
    #[must_use]
    pub fn profile(&self, language: Language) -> Option<&LanguageProfile> {
        self.profiles.get(&language)
    }

    /// Check whether a language has a registered profile
    #[must_use]
    pub fn is_supported(&self, language: Language) -> bool {
        self.profiles.contains_key(&language)
    }

    /// Languages with a registered profile
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.profiles.keys().copied()
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::new()
    }
}
