use actix_web::{web::{Data, Form}, HttpResponse};
use serde::Deserialize;

use crate::{api::StoryApi, auth::BrowserStorage, controller::Controller, view::Nav};

use super::{redirect, redirect_with_error};

#[derive(Deserialize)]
pub struct Signup {
    name: String,
    username: String,
    password: String,
}

#[derive(Deserialize)]
pub struct Login {
    username: String,
    password: String,
}

pub async fn auth_signup<A: StoryApi>(api: Data<A>, mut storage: BrowserStorage, Form(form): Form<Signup>) -> HttpResponse {
    let mut controller = Controller::new(api.get_ref());
    match controller.signup(&mut storage, &form.username, &form.password, &form.name).await {
        Ok(_) => redirect(Nav::All.path(), &storage),
        Err(e) => redirect_with_error(Nav::Login, &e, &storage),
    }
}

pub async fn auth_login<A: StoryApi>(api: Data<A>, mut storage: BrowserStorage, Form(form): Form<Login>) -> HttpResponse {
    let mut controller = Controller::new(api.get_ref());
    match controller.login(&mut storage, &form.username, &form.password).await {
        Ok(_) => redirect(Nav::All.path(), &storage),
        Err(e) => redirect_with_error(Nav::Login, &e, &storage),
    }
}

pub async fn auth_logout<A: StoryApi>(api: Data<A>, mut storage: BrowserStorage) -> HttpResponse {
    let mut controller = Controller::new(api.get_ref());
    controller.logout(&mut storage);
    redirect(Nav::All.path(), &storage)
}
