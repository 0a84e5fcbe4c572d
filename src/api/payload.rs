use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::{NewStory, Story, User, UserID};

#[derive(Serialize)]
pub struct Credentials<'a> {
    pub user: LoginUser<'a>,
}

#[derive(Serialize)]
pub struct LoginUser<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct TokenBody<'a> {
    pub token: &'a str,
}

#[derive(Serialize)]
pub struct NewStoryBody<'a> {
    pub token: &'a str,
    pub story: &'a NewStory,
}

#[derive(Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserPayload,
}

#[derive(Deserialize)]
pub struct UserResponse {
    pub user: UserPayload,
}

#[derive(Deserialize)]
pub struct StoriesResponse {
    pub stories: Vec<Story>,
}

#[derive(Deserialize)]
pub struct StoryResponse {
    pub story: Story,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub username: UserID,
    pub name: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub favorites: Vec<Story>,
    #[serde(default)]
    pub stories: Vec<Story>,
}

impl UserPayload {
    pub fn into_user(self, login_token: String) -> User {
        User {
            username: self.username,
            name: self.name,
            created_at: self.created_at,
            login_token,
            own_stories: self.stories,
            favorites: self.favorites,
        }
    }
}
