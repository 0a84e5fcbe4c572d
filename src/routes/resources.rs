use std::io::Result;
use actix_files::NamedFile;
use actix_web::get;

#[get("/site.css")]
pub async fn css_site() -> Result<NamedFile> {
    NamedFile::open("assets/site.css")
}
