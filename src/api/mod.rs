use actix_web::http::StatusCode;
use async_trait::async_trait;

use crate::data::{NewStory, Story, StoryID, StoryList, User, UserID};

mod client;
mod payload;
#[cfg(test)]
mod memory;

pub use client::HttpApi;
#[cfg(test)]
pub use memory::MemoryApi;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Wrong credentials")]
    Unauthorized,
    #[error("User with such name already exists")]
    Conflict,
    #[error("Story not found")]
    NotFound,
    #[error("Request rejected by the server ({0})")]
    Rejected(u16),
    #[error("Could not reach the server: {0}")]
    Network(String),
    #[error("Unexpected response from the server: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized,
            StatusCode::CONFLICT => Self::Conflict,
            StatusCode::NOT_FOUND => Self::NotFound,
            status => Self::Rejected(status.as_u16()),
        }
    }
}

/// The remote Hack or Snooze API. Every call either yields a populated model
/// or fails with an [`ApiError`].
#[async_trait(?Send)]
pub trait StoryApi {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError>;

    async fn create(&self, username: &str, password: &str, name: &str) -> Result<User, ApiError>;

    async fn get_logged_in_user(&self, token: &str, username: &UserID) -> Result<User, ApiError>;

    /// Returns the user's favorites as the server lists them after the change.
    async fn add_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError>;

    async fn remove_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError>;

    async fn remove_story(&self, user: &User, story: &StoryID) -> Result<(), ApiError>;

    async fn get_stories(&self) -> Result<StoryList, ApiError>;

    async fn add_story(&self, user: &User, story: &NewStory) -> Result<Story, ApiError>;
}
