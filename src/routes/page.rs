use actix_web::{
    http::{header::ContentType, Method, StatusCode},
    web::{Data, Query},
    HttpResponse,
};
use serde::Deserialize;
use tracing::warn;

use crate::{
    api::StoryApi,
    auth::BrowserStorage,
    controller::Controller,
    render::{render_not_found, render_page},
    view::Nav,
};

#[derive(Debug, Deserialize)]
pub struct Notice {
    error: Option<String>,
}

/// A page load landing on `nav`.
async fn show<A: StoryApi>(api: &A, storage: &BrowserStorage, nav: Nav, query: Query<Notice>) -> HttpResponse {
    let mut notice = query.into_inner().error;
    let mut controller = Controller::new(api);
    if let Err(e) = controller.load_page(storage, nav).await {
        warn!(error = %e, "could not load stories");
        notice.get_or_insert_with(|| e.to_string());
    }
    let html = render_page(controller.state(), notice.as_deref());
    let mut builder = HttpResponse::build(StatusCode::OK);
    builder.content_type(ContentType::html());
    storage.keep(&mut builder);
    builder.body(html)
}

pub async fn page_home<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::All, query).await
}

pub async fn page_my_stories<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::MyStories, query).await
}

pub async fn page_favorites<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::Favorites, query).await
}

pub async fn page_submit<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::Submit, query).await
}

pub async fn page_login<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::Login, query).await
}

pub async fn page_profile<A: StoryApi>(api: Data<A>, storage: BrowserStorage, query: Query<Notice>) -> HttpResponse {
    show(api.get_ref(), &storage, Nav::Profile, query).await
}

pub async fn default_handler(method: Method) -> HttpResponse {
    match method {
        Method::GET => HttpResponse::build(StatusCode::NOT_FOUND)
            .content_type(ContentType::html())
            .body(render_not_found()),
        _ => HttpResponse::MethodNotAllowed().finish(),
    }
}
