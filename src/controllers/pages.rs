//! Page directory routes — list, create, rename, delete.
//!
//! Each handler performs exactly one filesystem operation and maps any
//! failure to a 500 with a short plain-text message, without
//! distinguishing the cause.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::pages::file_ops;
use crate::views;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct AddPageRequest {
    #[serde(rename = "pageName")]
    page_name: String,
}

#[derive(Debug, Deserialize)]
struct RenamePageRequest {
    #[serde(rename = "oldName")]
    old_name: String,
    #[serde(rename = "newName")]
    new_name: String,
}

/// Main page: HTML listing of all pages with inline actions
async fn index(data: web::Data<AppState>) -> impl Responder {
    match file_ops::list_pages(&data.notes_dir) {
        Ok(pages) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(views::render_index(&pages)),
        Err(e) => {
            log::error!("Failed to list pages: {}", e);
            HttpResponse::InternalServerError().body("Error loading pages")
        }
    }
}

/// Create an empty page file. No existence check: a colliding name
/// silently truncates the existing file.
async fn add_page(data: web::Data<AppState>, body: web::Json<AddPageRequest>) -> impl Responder {
    if !file_ops::is_valid_page_name(&body.page_name) {
        return HttpResponse::BadRequest().body("Invalid page name");
    }

    match file_ops::create_page(&data.notes_dir, &body.page_name) {
        Ok(()) => HttpResponse::Ok().body("Page created"),
        Err(e) => {
            log::error!("Failed to create page {:?}: {}", body.page_name, e);
            HttpResponse::InternalServerError().body("Error creating page")
        }
    }
}

/// Delete a page's file
async fn remove_page(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let page_name = path.into_inner();

    if !file_ops::is_valid_page_name(&page_name) {
        return HttpResponse::BadRequest().body("Invalid page name");
    }

    match file_ops::delete_page(&data.notes_dir, &page_name) {
        Ok(()) => HttpResponse::Ok().body("Page deleted"),
        Err(e) => {
            log::error!("Failed to delete page {:?}: {}", page_name, e);
            HttpResponse::InternalServerError().body("Error deleting page")
        }
    }
}

/// Move a page to a new name, preserving content. No rollback.
async fn rename_page(
    data: web::Data<AppState>,
    body: web::Json<RenamePageRequest>,
) -> impl Responder {
    if !file_ops::is_valid_page_name(&body.old_name)
        || !file_ops::is_valid_page_name(&body.new_name)
    {
        return HttpResponse::BadRequest().body("Invalid page name");
    }

    match file_ops::rename_page(&data.notes_dir, &body.old_name, &body.new_name) {
        Ok(()) => HttpResponse::Ok().body("Page renamed"),
        Err(e) => {
            log::error!(
                "Failed to rename page {:?} -> {:?}: {}",
                body.old_name,
                body.new_name,
                e
            );
            HttpResponse::InternalServerError().body("Error renaming page")
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/addPage", web::post().to(add_page))
        .route("/removePage/{pageName}", web::delete().to(remove_page))
        .route("/renamePage", web::post().to(rename_page));
}
