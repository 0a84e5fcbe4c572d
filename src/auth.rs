use std::{collections::{HashMap, HashSet}, future::{ready, Ready}};

use actix_web::{cookie::{self, Cookie, SameSite}, dev::Payload, Error, FromRequest, HttpRequest, HttpResponseBuilder};

use crate::session::{SessionStore, SESSION_KEYS};

/// The visitor's local storage, carried as one cookie per key. Writes are
/// collected and sent back with the response by [`BrowserStorage::keep`].
#[derive(Debug, Default)]
pub struct BrowserStorage {
    entries: HashMap<String, String>,
    written: HashSet<String>,
    cleared: bool,
}

impl BrowserStorage {
    pub fn from_request(req: &HttpRequest) -> Self {
        let entries = SESSION_KEYS.iter()
            .filter_map(|key| req.cookie(key).map(|c| (key.to_string(), c.value().to_string())))
            .collect();
        Self { entries, ..Default::default() }
    }

    pub fn keep<'a>(&self, response: &'a mut HttpResponseBuilder) -> &'a mut HttpResponseBuilder {
        if self.cleared {
            for key in SESSION_KEYS.iter().filter(|x| !self.entries.contains_key(**x)) {
                response.cookie(build_removal_cookie(key));
            }
        }
        for key in &self.written {
            if let Some(value) = self.entries.get(key) {
                response.cookie(build_storage_cookie(key, value));
            }
        }
        response
    }
}

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.written.insert(key.to_string());
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.written.clear();
        self.cleared = true;
    }
}

pub fn build_storage_cookie(key: &str, value: &str) -> Cookie<'static> {
    Cookie::build(key.to_string(), value.to_string())
        .path("/")
        //.secure(true) <-- only works with https
        .same_site(SameSite::Strict)
        .http_only(true)
        .max_age(cookie::time::Duration::days(30))
        .finish()
}

fn build_removal_cookie(key: &str) -> Cookie<'static> {
    let mut cookie = Cookie::build(key.to_string(), "").path("/").finish();
    cookie.make_removal();
    cookie
}

impl FromRequest for BrowserStorage {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(BrowserStorage::from_request(req)))
    }
}
