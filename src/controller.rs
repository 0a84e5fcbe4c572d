use std::collections::HashMap;

use tracing::{info, warn};

use crate::{
    api::{ApiError, StoryApi},
    data::{NewStory, Story, StoryID, StoryList, User},
    session::{Session, SessionStore},
    view::{Nav, StarIcon, View},
};

#[derive(thiserror::Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("You need to log in first")]
    NotLoggedIn,
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Unknown favorite state: {0}")]
    UnknownIcon(String),
}

/// Everything one page knows. Lives as long as the page does.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_user: Option<User>,
    pub story_list: StoryList,
    pub view: View,
}

pub struct Controller<'a, A> {
    api: &'a A,
    state: AppState,
}

impl<'a, A: StoryApi> Controller<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api, state: AppState::default() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    fn require_user(&self) -> Result<&User, ControllerError> {
        self.current_user().ok_or(ControllerError::NotLoggedIn)
    }

    /// Rebuilds the user from the stored session, if any. A rejected token
    /// leaves the page logged out.
    pub async fn restore_session<S: SessionStore>(&mut self, storage: &S) {
        let Some(session) = Session::load(storage) else {
            return;
        };
        match self.api.get_logged_in_user(&session.token, &session.username).await {
            Ok(user) => self.state.current_user = Some(newest_favorites_first(user)),
            Err(e) => warn!(user = %session.username.0, error = %e, "stored session rejected"),
        }
    }

    pub async fn init<S: SessionStore>(&mut self, storage: &S) -> Result<(), ControllerError> {
        self.restore_session(storage).await;
        self.generate_stories().await
    }

    /// A fresh page load landing on `nav`. The story list is refetched on
    /// every load, so following the All link always shows fresh stories.
    pub async fn load_page<S: SessionStore>(&mut self, storage: &S, nav: Nav) -> Result<View, ControllerError> {
        let loaded = self.init(storage).await;
        let view = self.navigate(nav);
        loaded.map(|_| view)
    }

    pub fn navigate(&mut self, nav: Nav) -> View {
        self.state.view = self.state.view.transition(nav, self.state.current_user.is_some());
        self.state.view
    }

    async fn generate_stories(&mut self) -> Result<(), ControllerError> {
        self.state.story_list = self.api.get_stories().await?;
        Ok(())
    }

    async fn refresh_user(&mut self) -> Result<(), ControllerError> {
        let user = {
            let user = self.require_user()?;
            self.api.get_logged_in_user(&user.login_token, &user.username).await?
        };
        self.state.current_user = Some(newest_favorites_first(user));
        Ok(())
    }

    fn adopt_user<S: SessionStore>(&mut self, storage: &mut S, user: User) {
        user.session().save(storage);
        info!(user = %user.username.0, "logged in");
        self.state.current_user = Some(newest_favorites_first(user));
        self.state.view = View::AllStories;
    }

    pub async fn login<S: SessionStore>(&mut self, storage: &mut S, username: &str, password: &str) -> Result<&User, ControllerError> {
        let user = self.api.login(username, password).await?;
        self.adopt_user(storage, user);
        self.require_user()
    }

    pub async fn signup<S: SessionStore>(&mut self, storage: &mut S, username: &str, password: &str, name: &str) -> Result<&User, ControllerError> {
        let user = self.api.create(username, password, name).await?;
        self.adopt_user(storage, user);
        self.require_user()
    }

    /// Forgets everything, the same as reloading with empty storage.
    pub fn logout<S: SessionStore>(&mut self, storage: &mut S) {
        storage.clear();
        if let Some(user) = &self.state.current_user {
            info!(user = %user.username.0, "logged out");
        }
        self.state = AppState::default();
    }

    /// Posts a story and then reloads the user and the story list from the
    /// server instead of splicing the new story in locally.
    pub async fn submit_story(&mut self, fields: &HashMap<String, String>) -> Result<Story, ControllerError> {
        let story = {
            let user = self.require_user()?;
            let new_story = NewStory::from_fields(fields)?;
            self.api.add_story(user, &new_story).await?
        };
        info!(story = %story.story_id.0, "story submitted");
        self.refresh_user().await?;
        self.generate_stories().await?;
        self.state.view = View::AllStories;
        Ok(story)
    }

    /// `icon` is what the star showed when it was clicked. Returns what it
    /// shows now.
    pub async fn toggle_favorite(&mut self, story: &StoryID, icon: StarIcon) -> Result<StarIcon, ControllerError> {
        let mut favorites = {
            let user = self.require_user()?;
            match icon {
                StarIcon::Outline => self.api.add_favorite(user, story).await?,
                StarIcon::Filled => self.api.remove_favorite(user, story).await?,
            }
        };
        favorites.reverse();
        if let Some(user) = self.state.current_user.as_mut() {
            user.favorites = favorites;
        }
        Ok(icon.toggled())
    }

    pub async fn delete_story(&mut self, story: &StoryID) -> Result<(), ControllerError> {
        {
            let user = self.require_user()?;
            self.api.remove_story(user, story).await?;
        }
        info!(story = %story.0, "story deleted");
        self.refresh_user().await?;
        self.generate_stories().await
    }
}

/// The server lists favorites oldest first. Pages show the newest first.
fn newest_favorites_first(mut user: User) -> User {
    user.favorites.reverse();
    user
}
