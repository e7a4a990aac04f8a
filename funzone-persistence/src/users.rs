use funzone_types::{AuthError, GameKind, PerGameStats, Preferences, UserRecord};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

use crate::keys;
use crate::storage::{get_item, set_item, Storage};

/// Account registry over the `users` array and the denormalized
/// `currentUser` copy.
pub struct UserStore<S: Storage> {
    storage: S,
}

impl<S: Storage> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn all_users(&self) -> Vec<UserRecord> {
        get_item(&self.storage, keys::USERS, Vec::new())
    }

    pub fn find_by_email(&self, email: &str) -> Option<UserRecord> {
        self.all_users().into_iter().find(|u| u.email == email)
    }

    /// Create an account with zeroed stats for every game kind. Passwords
    /// are stored as given; the site never hashed them.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserRecord, AuthError> {
        let mut users = self.all_users();
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::EmailAlreadyRegistered);
        }

        let game_stats: HashMap<GameKind, PerGameStats> = GameKind::ALL
            .iter()
            .map(|&kind| (kind, PerGameStats::default()))
            .collect();

        let user = UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            last_login: None,
            game_stats,
            achievements: Vec::new(),
            preferences: Preferences::default(),
            profile_image: None,
        };

        users.push(user.clone());
        set_item(&self.storage, keys::USERS, &users);
        info!(user_id = %user.id, "registered new account");

        Ok(user)
    }

    /// Plaintext credential check. On success the record's `lastLogin` is
    /// stamped and the record becomes the current user.
    pub fn login(&self, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        let mut users = self.all_users();
        let user = users
            .iter_mut()
            .find(|u| u.email == email && u.password == password)
            .ok_or(AuthError::InvalidCredentials)?;

        user.last_login = Some(chrono::Utc::now().to_rfc3339());
        let user = user.clone();

        set_item(&self.storage, keys::USERS, &users);
        set_item(&self.storage, keys::CURRENT_USER, &user);
        info!(user_id = %user.id, "user logged in");

        Ok(user)
    }

    pub fn logout(&self) {
        self.storage.remove(keys::CURRENT_USER);
    }

    /// The denormalized current-user record, when someone is logged in.
    pub fn current_user(&self) -> Option<UserRecord> {
        get_item(&self.storage, keys::CURRENT_USER, None)
    }

    /// Write an updated record back under the user's identity: the `users`
    /// array entry and, when it is the logged-in account, the `currentUser`
    /// copy as well, so the two never diverge.
    pub fn persist_user_record(&self, record: &UserRecord) {
        persist_record(&self.storage, record);
    }

    pub fn save_preferences(&self, preferences: Preferences) {
        if let Some(mut user) = self.current_user() {
            user.preferences = preferences;
            persist_record(&self.storage, &user);
        }
    }
}

pub(crate) fn persist_record(storage: &impl Storage, record: &UserRecord) {
    let mut users: Vec<UserRecord> = get_item(storage, keys::USERS, Vec::new());
    if let Some(existing) = users.iter_mut().find(|u| u.id == record.id) {
        *existing = record.clone();
    } else {
        users.push(record.clone());
    }
    set_item(storage, keys::USERS, &users);

    let current: Option<UserRecord> = get_item(storage, keys::CURRENT_USER, None);
    if current.is_some_and(|c| c.id == record.id) {
        set_item(storage, keys::CURRENT_USER, record);
    }
}
