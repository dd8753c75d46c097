//! User preference storage.
//!
//! Only one preference exists: the reading [`Tier`], stored as its lowercase
//! id under [`USER_LEVEL_KEY`]. Hosts provide the storage through
//! [`PreferenceStore`]; [`MemoryPreferences`] keeps values in memory.

use std::{cell::RefCell, rc::Rc};

use indexmap::IndexMap;
use log::warn;

use seewrite_core::model::Tier;

use crate::error::SeewriteError;

/// Key of the stored reading level.
pub const USER_LEVEL_KEY: &str = "user-level";

/// String key-value storage for user preferences.
pub trait PreferenceStore {
    /// The value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, SeewriteError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), SeewriteError>;
}

/// Reads the stored tier.
///
/// Unknown values are ignored with a warning, so a corrupted preference
/// falls back to the configured default instead of failing.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn load_tier(store: &dyn PreferenceStore) -> Result<Option<Tier>, SeewriteError> {
    let Some(value) = store.load(USER_LEVEL_KEY)? else {
        return Ok(None);
    };

    match value.parse::<Tier>() {
        Ok(tier) => Ok(Some(tier)),
        Err(err) => {
            warn!(value, err; "Ignoring stored reading level");
            Ok(None)
        }
    }
}

/// Stores `tier` as the reading level preference.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_tier(store: &mut dyn PreferenceStore, tier: Tier) -> Result<(), SeewriteError> {
    store.save(USER_LEVEL_KEY, tier.id())
}

/// In-memory [`PreferenceStore`]. Clones share the same storage.
///
/// # Examples
///
/// ```
/// # use seewrite::preferences::{load_tier, save_tier, MemoryPreferences};
/// # use seewrite_core::model::Tier;
/// let mut store = MemoryPreferences::new();
/// let observer = store.clone();
///
/// save_tier(&mut store, Tier::Beginner).unwrap();
/// assert_eq!(load_tier(&observer).unwrap(), Some(Tier::Beginner));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Rc<RefCell<IndexMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self, key: &str) -> Result<Option<String>, SeewriteError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), SeewriteError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
