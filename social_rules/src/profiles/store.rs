//! Profile registry - an explicit, injectable store for NPC profiles.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use thiserror::Error;

use super::{NpcProfile, ProfileView};

/// Hard failures raised by direct profile construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Profile ids are unique for the lifetime of the store.
    #[error("NPC with ID {0} already exists")]
    DuplicateId(String),
}

/// Keyed registry of NPC profiles.
///
/// Profiles are registered once and live for the lifetime of the store;
/// there is no removal. Multiple independent stores can coexist, one per
/// game instance.
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    npcs: HashMap<String, NpcProfile>,
}

impl ProfileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile directly. Fails if the id is already taken.
    pub fn construct(&mut self, profile: NpcProfile) -> Result<&NpcProfile, ProfileError> {
        match self.npcs.entry(profile.id.clone()) {
            Entry::Occupied(_) => Err(ProfileError::DuplicateId(profile.id)),
            Entry::Vacant(slot) => Ok(slot.insert(profile)),
        }
    }

    /// Register a profile if its id is unused; otherwise return the existing
    /// profile unchanged. Never errors.
    pub fn initialize(&mut self, profile: NpcProfile) -> &NpcProfile {
        let id = profile.id.clone();
        self.npcs.entry(id).or_insert(profile)
    }

    /// Look up a profile. Absence is a valid, non-exceptional outcome.
    pub fn get(&self, id: &str) -> Option<&NpcProfile> {
        self.npcs.get(id)
    }

    /// Snapshot a profile for a presentation layer.
    pub fn view_profile(&self, id: &str) -> Option<ProfileView> {
        self.get(id).map(NpcProfile::view)
    }

    /// Iterate all registered profiles.
    pub fn all_profiles(&self) -> impl Iterator<Item = &NpcProfile> {
        self.npcs.values()
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.npcs.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.npcs.is_empty()
    }
}
