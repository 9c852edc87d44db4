//! Per-page editor routes — editor view and content save.
//!
//! The editor view renders unconditionally; the browser populates the
//! textarea by fetching the raw file from the `/notes` static route.
//! A nonexistent page only manifests there, as an empty fetch result.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::pages::file_ops;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct SaveRequest {
    content: String,
}

/// Editor view for a page. No existence check at render time.
async fn editor_page(path: web::Path<String>) -> impl Responder {
    let page_name = path.into_inner();

    if !file_ops::is_valid_page_name(&page_name) {
        return HttpResponse::BadRequest().body("Invalid page name");
    }

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(views::render_editor(&page_name))
}

/// Overwrite a page's content completely
async fn save_page(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<SaveRequest>,
) -> impl Responder {
    let page_name = path.into_inner();

    if !file_ops::is_valid_page_name(&page_name) {
        return HttpResponse::BadRequest().body("Invalid page name");
    }

    match file_ops::write_page(&data.notes_dir, &page_name, &body.content) {
        Ok(()) => HttpResponse::Ok().body("Note saved successfully"),
        Err(e) => {
            log::error!("Failed to save page {:?}: {}", page_name, e);
            HttpResponse::InternalServerError().body("Failed to save note")
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/page/{pageName}", web::get().to(editor_page))
        .route("/save/{pageName}", web::post().to(save_page));
}
