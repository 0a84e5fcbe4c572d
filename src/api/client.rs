use std::time::Duration;

use actix_web::web::Bytes;
use async_trait::async_trait;
use awc::{Client, SendClientRequest};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::data::{NewStory, Story, StoryID, StoryList, User, UserID};

use super::{ApiError, StoryApi, payload::*};

const BODY_LIMIT: usize = 4 * 1024 * 1024;

/// [`StoryApi`] over HTTP. The awc client is not `Send`, so every actix worker
/// builds its own.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder().timeout(timeout).finish(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.base_url.clone() + path
    }

    fn favorite_url(&self, user: &User, story: &StoryID) -> String {
        self.url(format!("/users/{}/favorites/{}", user.username.0, story.0).as_str())
    }

    async fn authenticate(&self, path: &str, credentials: &Credentials<'_>) -> Result<User, ApiError> {
        let request = self.client.post(self.url(path)).send_json(credentials);
        let response: AuthResponse = decode(&dispatch(request).await?)?;
        Ok(response.user.into_user(response.token))
    }
}

async fn dispatch(request: SendClientRequest) -> Result<Bytes, ApiError> {
    let mut response = request.await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let status = response.status();
    debug!(%status, "api response");
    if !status.is_success() {
        return Err(ApiError::from_status(status));
    }
    response.body()
        .limit(BODY_LIMIT)
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[async_trait(?Send)]
impl StoryApi for HttpApi {
    async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        self.authenticate("/login", &Credentials {
            user: LoginUser { name: None, username, password },
        }).await
    }

    async fn create(&self, username: &str, password: &str, name: &str) -> Result<User, ApiError> {
        self.authenticate("/signup", &Credentials {
            user: LoginUser { name: Some(name), username, password },
        }).await
    }

    async fn get_logged_in_user(&self, token: &str, username: &UserID) -> Result<User, ApiError> {
        let request = self.client.get(self.url(format!("/users/{}", username.0).as_str()))
            .query(&[("token", token)])
            .map_err(|e| ApiError::Malformed(e.to_string()))?
            .send();
        let response: UserResponse = decode(&dispatch(request).await?)?;
        Ok(response.user.into_user(token.to_string()))
    }

    async fn add_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError> {
        let request = self.client.post(self.favorite_url(user, story))
            .send_json(&TokenBody { token: &user.login_token });
        let response: UserResponse = decode(&dispatch(request).await?)?;
        Ok(response.user.favorites)
    }

    async fn remove_favorite(&self, user: &User, story: &StoryID) -> Result<Vec<Story>, ApiError> {
        let request = self.client.delete(self.favorite_url(user, story))
            .send_json(&TokenBody { token: &user.login_token });
        let response: UserResponse = decode(&dispatch(request).await?)?;
        Ok(response.user.favorites)
    }

    async fn remove_story(&self, user: &User, story: &StoryID) -> Result<(), ApiError> {
        let request = self.client.delete(self.url(format!("/stories/{}", story.0).as_str()))
            .send_json(&TokenBody { token: &user.login_token });
        dispatch(request).await.map(|_| ())
    }

    async fn get_stories(&self) -> Result<StoryList, ApiError> {
        let request = self.client.get(self.url("/stories")).send();
        let response: StoriesResponse = decode(&dispatch(request).await?)?;
        Ok(StoryList { stories: response.stories })
    }

    async fn add_story(&self, user: &User, story: &NewStory) -> Result<Story, ApiError> {
        let request = self.client.post(self.url("/stories"))
            .send_json(&NewStoryBody { token: &user.login_token, story });
        let response: StoryResponse = decode(&dispatch(request).await?)?;
        Ok(response.story)
    }
}
