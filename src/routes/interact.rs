use std::collections::HashMap;

use actix_web::{web::{Data, Form, Path}, HttpResponse};
use serde::Deserialize;

use crate::{
    api::StoryApi,
    auth::BrowserStorage,
    controller::{Controller, ControllerError},
    data::StoryID,
    view::{Nav, StarIcon},
};

use super::{redirect, redirect_with_error};

#[derive(Deserialize)]
pub struct FavoriteStory {
    star: String,
    return_to: Option<String>,
}

#[derive(Deserialize)]
pub struct DeleteStory {
    return_to: Option<String>,
}

/// Only panel paths are valid places to come back to.
fn return_nav(return_to: Option<&str>) -> Nav {
    return_to.and_then(Nav::from_path).unwrap_or(Nav::All)
}

pub async fn submit_story<A: StoryApi>(api: Data<A>, storage: BrowserStorage, Form(fields): Form<HashMap<String, String>>) -> HttpResponse {
    let mut controller = Controller::new(api.get_ref());
    controller.restore_session(&storage).await;
    match controller.submit_story(&fields).await {
        Ok(_) => redirect(Nav::All.path(), &storage),
        Err(e) => redirect_with_error(Nav::Submit, &e, &storage),
    }
}

pub async fn favorite_story<A: StoryApi>(api: Data<A>, storage: BrowserStorage, story_id: Path<String>, Form(input): Form<FavoriteStory>) -> HttpResponse {
    let nav = return_nav(input.return_to.as_deref());
    let Some(icon) = StarIcon::from_class(input.star.as_str()) else {
        return redirect_with_error(nav, &ControllerError::UnknownIcon(input.star), &storage);
    };
    let mut controller = Controller::new(api.get_ref());
    controller.restore_session(&storage).await;
    match controller.toggle_favorite(&StoryID(story_id.into_inner()), icon).await {
        Ok(_) => redirect(nav.path(), &storage),
        Err(e) => redirect_with_error(nav, &e, &storage),
    }
}

pub async fn delete_story<A: StoryApi>(api: Data<A>, storage: BrowserStorage, story_id: Path<String>, Form(input): Form<DeleteStory>) -> HttpResponse {
    let nav = return_nav(input.return_to.as_deref());
    let mut controller = Controller::new(api.get_ref());
    controller.restore_session(&storage).await;
    match controller.delete_story(&StoryID(story_id.into_inner())).await {
        Ok(_) => redirect(nav.path(), &storage),
        Err(e) => redirect_with_error(nav, &e, &storage),
    }
}
