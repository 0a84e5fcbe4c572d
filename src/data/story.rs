use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::controller::ControllerError;

use super::{StoryID, UserID};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub story_id: StoryID,
    pub title: String,
    pub url: String,
    pub author: String,
    pub username: UserID,
    pub created_at: DateTime<Utc>,
}

/// All stories visible to everyone, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoryList {
    pub stories: Vec<Story>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewStory {
    pub title: String,
    pub author: String,
    pub url: String,
}

impl NewStory {
    /// Builds a story from whatever name/value pairs the submit form posted.
    pub fn from_fields(fields: &HashMap<String, String>) -> Result<Self, ControllerError> {
        let field = |name: &'static str| {
            fields.get(name)
                .map(|x| x.trim())
                .filter(|x| !x.is_empty())
                .map(|x| x.to_string())
                .ok_or(ControllerError::MissingField(name))
        };
        Ok(Self {
            title: field("title")?,
            author: field("author")?,
            url: field("url")?,
        })
    }
}
