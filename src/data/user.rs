use chrono::{DateTime, Utc};

use crate::session::Session;

use super::{Story, StoryID, UserID};

/// The logged in user, rebuilt from the API on every page load.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: UserID,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub login_token: String,
    pub own_stories: Vec<Story>,
    pub favorites: Vec<Story>,
}

impl User {
    pub fn is_favorite(&self, story: &StoryID) -> bool {
        self.favorites.iter().any(|x| &x.story_id == story)
    }

    pub fn owns(&self, story: &StoryID) -> bool {
        self.own_stories.iter().any(|x| &x.story_id == story)
    }

    pub fn session(&self) -> Session {
        Session {
            token: self.login_token.clone(),
            username: self.username.clone(),
        }
    }
}
