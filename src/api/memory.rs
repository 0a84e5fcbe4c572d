use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use chrono::Utc;

use crate::data::{NewStory, Story, StoryID, StoryList, User, UserID};

use super::{ApiError, StoryApi};

struct Account {
    password: String,
    name: String,
    favorites: Vec<StoryID>,
}

#[derive(Default)]
struct Backend {
    accounts: HashMap<UserID, Account>,
    stories: Vec<Story>,
    next_id: u32,
    calls: Vec<&'static str>,
}

/// Stand-in for the remote API. Favorites come back oldest first and stories
/// newest first, like the real service.
#[derive(Default)]
pub struct MemoryApi {
    inner: RefCell<Backend>,
}

fn token_for(user: &UserID) -> String {
    format!("token-{}", user.0)
}

impl MemoryApi {
    pub fn with_account(self, username: &str, password: &str, name: &str) -> Self {
        self.inner.borrow_mut().accounts.insert(UserID(username.to_string()), Account {
            password: password.to_string(),
            name: name.to_string(),
            favorites: vec![],
        });
        self
    }

    pub fn with_story(self, username: &str, title: &str, url: &str) -> Self {
        self.inner.borrow_mut().push_story(&UserID(username.to_string()), &NewStory {
            title: title.to_string(),
            author: username.to_string(),
            url: url.to_string(),
        });
        self
    }

    pub fn story_ids(&self) -> Vec<StoryID> {
        self.inner.borrow().stories.iter().map(|x| x.story_id.clone()).collect()
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.borrow().calls.clone()
    }

    fn record(&self, call: &'static str) {
        self.inner.borrow_mut().calls.push(call);
    }

    fn check(&self, user: &User) -> Result<(), ApiError> {
        if self.inner.borrow().accounts.contains_key(&user.username) && user.login_token == token_for(&user.username) {
            Ok(())
        } else {
            Err(ApiError::Unauthorized)
        }
    }
}

impl Backend {
    fn push_story(&mut self, user: &UserID, story: &NewStory) -> Story {
        self.next_id += 1;
        let story = Story {
            story_id: StoryID(format!("story-{}", self.next_id)),
            title: story.title.clone(),
            url: story.url.clone(),
            author: story.author.clone(),
            username: user.clone(),
            created_at: Utc::now(),
        };
        self.stories.insert(0, story.clone());
        story
    }

    fn story(&self, id: &StoryID) -> Option<&Story> {
        self.stories.iter().find(|x| &x.story_id == id)
    }

    fn favorites(&self, user: &UserID) -> Vec<Story> {
        self.accounts.get(user)
            .map(|account| account.favorites.iter().filter_map(|id| self.story(id)).cloned().collect())
            .unwrap_or_default()
    }

    fn user(&self, username: &UserID) -> Result<User, ApiError> {
        let account = self.accounts.get(username).ok_or(ApiError::NotFound)?;
        Ok(User {
            username: username.clone(),
            name: account.name.clone(),
            created_at: Utc::now(),
            login_token: token_for(username),
            own_stories: self.stories.iter().filter(|x| &x.username == username).cloned().collect(),
            favorites: self.favorites(username),
        })
    }
}

#[async_trait(?Send)]
impl StoryApi for MemoryApi {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.record("login");
        let inner = self.inner.borrow();
        let id = UserID(username.to_string());
        match inner.accounts.get(&id) {
            Some(account) if account.password == password => inner.user(&id),
            _ => Err(ApiError::Unauthorized),
        }
    }

    async fn create(&self, username: &str, password: &str, name: &str) -> Result<User, ApiError> {
        self.record("create");
        let mut inner = self.inner.borrow_mut();
        let id = UserID(username.to_string());
        if inner.accounts.contains_key(&id) {
            return Err(ApiError::Conflict);
        }
        inner.accounts.insert(id.clone(), Account {
            password: password.to_string(),
            name: name.to_string(),
            favorites: vec![],
        });
        inner.user(&id)
    }

    async fn get_logged_in_user(&self, token: &str, username: &UserID) -> Result<User, ApiError> {
        self.record("get_logged_in_user");
        if token != token_for(username) {
            return Err(ApiError::Unauthorized);
        }
        self.inner.borrow().user(username)
    }

    async fn add_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError> {
        self.record("add_favorite");
        self.check(user)?;
        let mut inner = self.inner.borrow_mut();
        if inner.story(story).is_none() {
            return Err(ApiError::NotFound);
        }
        if let Some(account) = inner.accounts.get_mut(&user.username) {
            if !account.favorites.contains(story) {
                account.favorites.push(story.clone());
            }
        }
        Ok(inner.favorites(&user.username))
    }

    async fn remove_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError> {
        self.record("remove_favorite");
        self.check(user)?;
        let mut inner = self.inner.borrow_mut();
        if let Some(account) = inner.accounts.get_mut(&user.username) {
            account.favorites.retain(|x| x != story);
        }
        Ok(inner.favorites(&user.username))
    }

    async fn remove_story(&self, user: &User, story: &StoryID) -> Result<(), ApiError> {
        self.record("remove_story");
        self.check(user)?;
        let mut inner = self.inner.borrow_mut();
        match inner.story(story) {
            Some(x) if x.username == user.username => {},
            Some(_) => return Err(ApiError::Unauthorized),
            None => return Err(ApiError::NotFound),
        }
        inner.stories.retain(|x| &x.story_id != story);
        for account in inner.accounts.values_mut() {
            account.favorites.retain(|x| x != story);
        }
        Ok(())
    }

    async fn get_stories(&self) -> Result<StoryList, ApiError> {
        self.record("get_stories");
        Ok(StoryList { stories: self.inner.borrow().stories.clone() })
    }

    async fn add_story(&self, user: &User, story: &NewStory) -> Result<Story, ApiError> {
        self.record("add_story");
        self.check(user)?;
        Ok(self.inner.borrow_mut().push_story(&user.username, story))
    }
}
