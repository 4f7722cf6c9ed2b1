use actix_files::NamedFile;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::config::Config;
use crate::errors::UploadError;
use crate::fileupload;
use crate::preset;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/upload", web::post().to(upload))
        .route("/health", web::get().to(health_check));
}

/// Serves the upload form.
pub async fn index(config: web::Data<Config>) -> actix_web::Result<NamedFile> {
    let path = config.static_dir.join("index.html");
    NamedFile::open(&path).map_err(|e| {
        log::error!("Could not open '{}': {}", path.display(), e);
        actix_web::error::ErrorNotFound("index.html not found")
    })
}

/// Stores the uploaded preset, extracts its mods and answers with JSON.
pub async fn upload(
    multipart: Multipart,
    config: web::Data<Config>,
) -> Result<HttpResponse, UploadError> {
    let stored = fileupload::store_upload(multipart, &config.storage_dir, config.max_upload_size)
        .await
        .inspect_err(|e| log::error!("Upload rejected: {}", e))?;

    log::info!("Extracting preset '{}' ({} bytes)", stored.filename, stored.size);
    let path = stored.path.clone();
    let pattern = config.extraction.clone();
    let outcome = web::block(move || preset::parse_file(&path, &pattern)).await;

    if !config.keep_uploads {
        stored.remove();
    }

    let result = outcome.map_err(|_| UploadError::Blocking)?.map_err(|e| {
        log::error!("Failed to parse preset '{}': {}", stored.filename, e);
        UploadError::from(e)
    })?;

    Ok(HttpResponse::Ok().json(result))
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
}

pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
