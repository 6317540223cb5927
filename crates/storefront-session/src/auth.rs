//! Signed-in user store.
//!
//! There is no credential check here: `login` records whatever user it is
//! given. The store only persists the profile and notifies listeners.

use crate::events::{EventBus, StoreEvent};
use crate::store::Cache;
use crate::SessionError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Store key holding the signed-in user.
pub const USER_KEY: &str = "market_street_user";

/// Store key holding the remember-me preference.
pub const REMEMBER_ME_KEY: &str = "market_street_remember_me";

/// Loyalty program tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoyaltyStatus {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

/// A signed-in shopper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_status: Option<LoyaltyStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
}

impl User {
    /// Create a user with the required fields.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: None,
            loyalty_status: None,
            loyalty_points: None,
            email_verified: None,
            phone_verified: None,
        }
    }

    /// First and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Partial update of a [`User`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub loyalty_status: Option<LoyaltyStatus>,
    pub loyalty_points: Option<u32>,
    pub email_verified: Option<bool>,
    pub phone_verified: Option<bool>,
}

impl UserPatch {
    /// Merge this patch into a user.
    pub fn apply(self, user: &mut User) {
        if let Some(v) = self.first_name {
            user.first_name = v;
        }
        if let Some(v) = self.last_name {
            user.last_name = v;
        }
        if let Some(v) = self.email {
            user.email = v;
        }
        if self.phone.is_some() {
            user.phone = self.phone;
        }
        if self.loyalty_status.is_some() {
            user.loyalty_status = self.loyalty_status;
        }
        if self.loyalty_points.is_some() {
            user.loyalty_points = self.loyalty_points;
        }
        if self.email_verified.is_some() {
            user.email_verified = self.email_verified;
        }
        if self.phone_verified.is_some() {
            user.phone_verified = self.phone_verified;
        }
    }
}

/// Signed-in user persisted under [`USER_KEY`].
#[derive(Debug, Clone)]
pub struct AuthStore {
    cache: Cache,
    events: Arc<EventBus>,
}

impl AuthStore {
    pub fn new(cache: Cache, events: Arc<EventBus>) -> Self {
        Self { cache, events }
    }

    /// The signed-in user, if any. Unreadable stored data reads as signed out.
    pub fn current_user(&self) -> Result<Option<User>, SessionError> {
        self.cache.load(USER_KEY)
    }

    /// The signed-in user, or [`SessionError::NotLoggedIn`].
    pub fn require_user(&self) -> Result<User, SessionError> {
        self.current_user()?.ok_or(SessionError::NotLoggedIn)
    }

    pub fn is_logged_in(&self) -> Result<bool, SessionError> {
        Ok(self.current_user()?.is_some())
    }

    /// Whether the remember-me preference is set.
    pub fn remembers_me(&self) -> Result<bool, SessionError> {
        Ok(self.cache.load(REMEMBER_ME_KEY)?.unwrap_or(false))
    }

    /// Record a signed-in user and the remember-me preference.
    pub fn login(&self, user: User, remember_me: bool) -> Result<(), SessionError> {
        self.cache.set(USER_KEY, &user)?;
        if remember_me {
            self.cache.set(REMEMBER_ME_KEY, &true)?;
        } else {
            self.cache.delete(REMEMBER_ME_KEY)?;
        }
        info!(user = %user.id, remember_me, "User logged in");
        self.events.emit(&StoreEvent::UserLoggedIn(user));
        Ok(())
    }

    /// Forget the signed-in user. The remember-me preference is kept.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.cache.delete(USER_KEY)?;
        info!("User logged out");
        self.events.emit(&StoreEvent::UserLoggedOut);
        Ok(())
    }

    /// Merge a patch into the signed-in user and store it again.
    ///
    /// Does nothing and returns `None` when nobody is signed in.
    pub fn update_user(&self, patch: UserPatch) -> Result<Option<User>, SessionError> {
        let Some(mut user) = self.current_user()? else {
            return Ok(None);
        };
        patch.apply(&mut user);
        let remember_me = self.remembers_me()?;
        self.login(user.clone(), remember_me)?;
        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn store() -> (AuthStore, Cache, Arc<Mutex<Vec<&'static str>>>) {
        let cache = Cache::in_memory();
        let events = Arc::new(EventBus::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        events.subscribe(move |e| sink.lock().unwrap().push(e.name()));
        (AuthStore::new(cache.clone(), events), cache, seen)
    }

    fn jane() -> User {
        User::new("u-1", "Jane", "Doe", "jane@example.com")
    }

    #[test]
    fn test_login_and_logout() {
        let (auth, _, seen) = store();
        assert!(!auth.is_logged_in().unwrap());
        assert!(matches!(auth.require_user(), Err(SessionError::NotLoggedIn)));

        auth.login(jane(), false).unwrap();
        assert_eq!(auth.current_user().unwrap(), Some(jane()));
        assert_eq!(auth.require_user().unwrap().full_name(), "Jane Doe");

        auth.logout().unwrap();
        assert!(!auth.is_logged_in().unwrap());
        assert_eq!(*seen.lock().unwrap(), vec!["userLoggedIn", "userLoggedOut"]);
    }

    #[test]
    fn test_remember_me_survives_logout() {
        let (auth, cache, _) = store();
        auth.login(jane(), true).unwrap();
        assert_eq!(cache.raw().get(REMEMBER_ME_KEY).unwrap().as_deref(), Some("true"));

        auth.logout().unwrap();
        assert!(auth.remembers_me().unwrap());

        auth.login(jane(), false).unwrap();
        assert!(!auth.remembers_me().unwrap());
        assert!(!cache.exists(REMEMBER_ME_KEY).unwrap());
    }

    #[test]
    fn test_update_user_merges_patch() {
        let (auth, _, seen) = store();
        auth.login(jane(), true).unwrap();

        let updated = auth
            .update_user(UserPatch {
                phone: Some("555-0100".to_string()),
                loyalty_status: Some(LoyaltyStatus::Gold),
                ..Default::default()
            })
            .unwrap()
            .unwrap();

        assert_eq!(updated.first_name, "Jane");
        assert_eq!(updated.phone.as_deref(), Some("555-0100"));
        assert_eq!(auth.current_user().unwrap(), Some(updated));
        assert!(auth.remembers_me().unwrap());
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_update_user_signed_out_is_noop() {
        let (auth, cache, seen) = store();
        let result = auth
            .update_user(UserPatch {
                email: Some("x@example.com".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(result.is_none());
        assert!(cache.keys().unwrap().is_empty());
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_user_json_uses_camel_case() {
        let mut user = jane();
        user.loyalty_points = Some(120);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["loyaltyPoints"], 120);
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_corrupted_user_reads_signed_out() {
        let (auth, cache, _) = store();
        cache.raw().set(USER_KEY, "{\"id\":").unwrap();
        assert!(auth.current_user().unwrap().is_none());
    }
}
