use crate::catalog::seed_skills;
use crate::{KeyValueStorage, Result as StoreResult, StoreError, UpdateOutcome, keys, timestamp_id};

use skillswap_core::{NewUser, Skill, SkillCategory, User};

use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Owns the session pointer, the user list and the skill catalog.
///
/// The three entries are independent; nothing keeps the session copy of a
/// user in sync with the user list except explicit write-backs.
pub struct DirectoryStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> DirectoryStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Seed the catalog with the built-in skills if no catalog exists yet.
    ///
    /// An existing catalog is left untouched, even an empty JSON array.
    pub fn initialize(&mut self) -> StoreResult<()> {
        if self.raw(keys::SKILLS)?.is_some() {
            debug!("Skill catalog already present");
            return Ok(());
        }

        let skills = seed_skills();
        self.write_json(keys::SKILLS, &skills)?;
        info!("Seeded skill catalog with {} skills", skills.len());
        Ok(())
    }

    pub fn current_user(&self) -> StoreResult<Option<User>> {
        self.read_json(keys::CURRENT_USER)
    }

    /// `Some` overwrites the session pointer, `None` clears it.
    pub fn set_current_user(&mut self, user: Option<&User>) -> StoreResult<()> {
        match user {
            Some(user) => {
                self.write_json(keys::CURRENT_USER, user)?;
                info!("Session set to user {}", user.id);
            }
            None => {
                self.storage.remove_item(keys::CURRENT_USER)?;
                info!("Session cleared");
            }
        }
        Ok(())
    }

    /// The whole catalog in stored order, empty if never initialized.
    pub fn all_skills(&self) -> StoreResult<Vec<Skill>> {
        Ok(self.read_json(keys::SKILLS)?.unwrap_or_default())
    }

    /// Catalog skills whose name or description contains `query`
    /// (case-insensitive), optionally restricted to one category.
    ///
    /// An empty query matches everything. Catalog order is preserved.
    pub fn search_skills(
        &self,
        query: &str,
        category: Option<SkillCategory>,
    ) -> StoreResult<Vec<Skill>> {
        let results: Vec<Skill> = self
            .all_skills()?
            .into_iter()
            .filter(|skill| skill.matches_query(query))
            .filter(|skill| category.is_none_or(|c| skill.category == c))
            .collect();

        debug!(
            "search_skills(query={query:?}, category={category:?}) -> {} results",
            results.len()
        );
        Ok(results)
    }

    /// Append a new user with a timestamp id and return it.
    ///
    /// Duplicate emails are accepted.
    pub fn create_user(&mut self, data: NewUser) -> StoreResult<User> {
        let user = User::from_new(timestamp_id(), data);

        let mut users = self.users()?;
        if users.iter().any(|u| u.email == user.email) {
            warn!("Creating another user with email {}", user.email);
        }
        users.push(user.clone());
        self.write_json(keys::USERS, &users)?;

        info!("Created user {} ({})", user.id, user.email);
        Ok(user)
    }

    /// First user whose email matches exactly (case-sensitive).
    pub fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self.users()?.into_iter().find(|u| u.email == email))
    }

    /// The persisted user list, empty if absent.
    pub fn users(&self) -> StoreResult<Vec<User>> {
        Ok(self.read_json(keys::USERS)?.unwrap_or_default())
    }

    /// Replace the user with the same id and overwrite the session pointer.
    ///
    /// If no user has that id the list is left as is, but the session
    /// pointer is still overwritten.
    pub fn update_user(&mut self, user: &User) -> StoreResult<UpdateOutcome> {
        let mut users = self.users()?;

        let outcome = match users.iter().position(|u| u.id == user.id) {
            Some(index) => {
                users[index] = user.clone();
                self.write_json(keys::USERS, &users)?;
                info!("Updated user {}", user.id);
                UpdateOutcome::Replaced
            }
            None => {
                warn!(
                    "User {} not in user list; only the session copy was updated",
                    user.id
                );
                UpdateOutcome::SessionOnly
            }
        };

        self.set_current_user(Some(user))?;
        Ok(outcome)
    }

    /// Stored value for `key`; an empty string counts as absent.
    fn raw(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.storage.get_item(key)?.filter(|raw| !raw.is_empty()))
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        match self.raw(key)? {
            Some(raw) => {
                serde_json::from_str::<Option<T>>(&raw).map_err(|e| StoreError::corrupted(key, e))
            }
            None => Ok(None),
        }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.storage.set_item(key, &json)
    }
}
