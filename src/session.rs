use crate::data::UserID;

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const SESSION_KEYS: [&str; 2] = [TOKEN_KEY, USERNAME_KEY];

/// Flat string key-value storage that survives page loads.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: UserID,
}

impl Session {
    /// Both entries must be present, anything else counts as logged out.
    pub fn load<S: SessionStore>(store: &S) -> Option<Self> {
        let token = store.get(TOKEN_KEY).filter(|x| !x.is_empty())?;
        let username = store.get(USERNAME_KEY).filter(|x| !x.is_empty())?;
        Some(Self { token, username: UserID(username) })
    }

    pub fn save<S: SessionStore>(&self, store: &mut S) {
        store.set(TOKEN_KEY, self.token.clone());
        store.set(USERNAME_KEY, self.username.0.clone());
    }
}

#[cfg(test)]
pub use memory::MemoryStore;
