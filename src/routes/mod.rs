use actix_web::{http::{header::LOCATION, StatusCode}, web::{self, ServiceConfig}, HttpResponse};

use crate::{api::StoryApi, auth::BrowserStorage, controller::ControllerError, view::Nav};

mod auth;
mod interact;
mod page;
mod resources;

pub use auth::*;
pub use interact::*;
pub use page::*;
pub use resources::*;

pub fn configure<A: StoryApi + 'static>(cfg: &mut ServiceConfig) {
    cfg
        .service(web::resource("/").route(web::get().to(page_home::<A>)))
        .service(web::resource("/my-stories").route(web::get().to(page_my_stories::<A>)))
        .service(web::resource("/favorites").route(web::get().to(page_favorites::<A>)))
        .service(web::resource("/submit").route(web::get().to(page_submit::<A>)))
        .service(web::resource("/profile").route(web::get().to(page_profile::<A>)))
        .service(web::resource("/login")
            .route(web::get().to(page_login::<A>))
            .route(web::post().to(auth_login::<A>)))
        .service(web::resource("/signup").route(web::post().to(auth_signup::<A>)))
        .service(web::resource("/logout").route(web::get().to(auth_logout::<A>)))

        .service(web::resource("/stories").route(web::post().to(submit_story::<A>)))
        .service(web::resource("/stories/{story_id}/favorite").route(web::post().to(favorite_story::<A>)))
        .service(web::resource("/stories/{story_id}/delete").route(web::post().to(delete_story::<A>)))

        .service(css_site);
}

fn redirect(to: &str, storage: &BrowserStorage) -> HttpResponse {
    storage.keep(HttpResponse::build(StatusCode::SEE_OTHER)
        .append_header((LOCATION, to)))
        .finish()
}

/// Sends the visitor back to `nav` with the error shown as a notice.
fn redirect_with_error(nav: Nav, error: &ControllerError, storage: &BrowserStorage) -> HttpResponse {
    let nav = match error {
        ControllerError::NotLoggedIn => Nav::Login,
        _ => nav,
    };
    let query = serde_urlencoded::to_string([("error", error.to_string())]).unwrap_or_default();
    redirect(format!("{}?{}", nav.path(), query).as_str(), storage)
}
