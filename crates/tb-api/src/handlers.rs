//! # tb-api Handlers
//!
//! This module coordinates the flow between HTTP requests and Core traits.

use actix_multipart::{Field, Multipart};
use actix_web::{web, HttpResponse};
use askama::Template;
use chrono::{DateTime, Utc};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};

use tb_core::boards::filter_by_letter;
use tb_core::error::AppError;
use tb_core::traits::{ForumStore, MediaStore};
use tb_core::upload::{validate_extension, MAX_UPLOAD_BYTES};
use tb_ui::{BoardTemplate, IndexTemplate, ThreadTemplate};

use crate::error::ApiError;

/// State shared across all actix-web workers.
pub struct AppState {
    pub store: Box<dyn ForumStore>,
    pub media: Box<dyn MediaStore>,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct NewThreadForm {
    pub title: String,
}

/// Shape of the JSON post listing: id, content, and the stored creation time.
#[derive(Serialize)]
struct PostJson {
    id: u64,
    content: String,
    created: DateTime<Utc>,
}

/// Renders the board index at `/`.
pub async fn index(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    render_index(&data, None).await
}

/// Renders the board index filtered by starting letter, `/boards/{letter}/`.
pub async fn index_filtered(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    render_index(&data, Some(path.into_inner())).await
}

async fn render_index(data: &AppState, letter: Option<String>) -> Result<HttpResponse, ApiError> {
    let boards = data.store.list_boards().await?;
    // Anything but a single alphabetic character falls through as "no filter".
    let boards = filter_by_letter(&boards, letter.as_deref());
    let html = IndexTemplate { boards, letter }
        .render()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(html_response(html))
}

/// Renders the thread listing for a board, `/{board}/`, with optional `?q=`
/// title search. Unknown boards render an empty listing.
pub async fn board_view(
    data: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<SearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let board = path.into_inner();
    let query = query.into_inner().q;
    let threads = data.store.list_threads(&board, query.as_deref()).await?;
    let html = BoardTemplate {
        board,
        threads,
        query,
    }
    .render()
    .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(html_response(html))
}

/// Creates a thread from the `title` form field, `POST /{board}/new`.
pub async fn new_thread(
    data: web::Data<AppState>,
    path: web::Path<String>,
    form: web::Form<NewThreadForm>,
) -> Result<HttpResponse, ApiError> {
    let board = path.into_inner();
    data.store
        .create_thread(&board, form.into_inner().title)
        .await?;
    Ok(redirect(format!("/{board}/")))
}

/// Renders a thread and its posts, `/{board}/{thread_id}/`. Unknown threads
/// are an explicit 404.
pub async fn view_thread(
    data: web::Data<AppState>,
    path: web::Path<(String, u64)>,
) -> Result<HttpResponse, ApiError> {
    let (board, thread_id) = path.into_inner();
    let thread = data
        .store
        .get_thread(thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound("thread".to_string(), thread_id.to_string()))?;
    let posts = data.store.list_posts(thread_id).await?;
    let html = ThreadTemplate {
        board,
        thread,
        posts,
    }
    .render()
    .map_err(|e| AppError::Internal(e.to_string()))?;
    Ok(html_response(html))
}

/// Appends a reply to a thread, `POST /{board}/{thread_id}/reply`.
///
/// Multipart fields: required `content`, optional `image`. The image
/// extension is checked against the allow-list before any bytes are
/// buffered, and the cumulative payload is capped at 2 MiB mid-stream.
pub async fn reply(
    data: web::Data<AppState>,
    path: web::Path<(String, u64)>,
    mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let (board, thread_id) = path.into_inner();

    // 404 before reading the payload or touching the disk.
    data.store
        .get_thread(thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound("thread".to_string(), thread_id.to_string()))?;

    let mut content: Option<String> = None;
    let mut image: Option<(String, Vec<u8>)> = None;
    let mut received: usize = 0;

    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| AppError::Validation(e.to_string()))?;
        match field.name() {
            "content" => {
                let bytes = read_field(&mut field, &mut received).await?;
                let text = String::from_utf8(bytes)
                    .map_err(|_| AppError::Validation("content must be UTF-8".to_string()))?;
                content = Some(text);
            }
            "image" => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_owned)
                    .filter(|n| !n.is_empty());
                match filename {
                    Some(name) => {
                        let ext = validate_extension(&name)?;
                        let bytes = read_field(&mut field, &mut received).await?;
                        image = Some((ext, bytes));
                    }
                    // File input submitted empty: drain and ignore.
                    None => {
                        read_field(&mut field, &mut received).await?;
                    }
                }
            }
            _ => {
                read_field(&mut field, &mut received).await?;
            }
        }
    }

    let content =
        content.ok_or_else(|| AppError::Validation("missing form field: content".to_string()))?;

    let image_path = match image {
        Some((ext, bytes)) => Some(data.media.save_upload(bytes, &ext).await?),
        None => None,
    };

    data.store
        .create_post(thread_id, content, image_path)
        .await?;

    Ok(redirect(format!("/{board}/{thread_id}/")))
}

/// Returns a thread's posts as JSON, `GET /{board}/{thread_id}/posts`.
pub async fn posts_json(
    data: web::Data<AppState>,
    path: web::Path<(String, u64)>,
) -> Result<HttpResponse, ApiError> {
    let (_board, thread_id) = path.into_inner();
    data.store
        .get_thread(thread_id)
        .await?
        .ok_or_else(|| AppError::NotFound("thread".to_string(), thread_id.to_string()))?;
    let posts = data.store.list_posts(thread_id).await?;
    let body: Vec<PostJson> = posts
        .into_iter()
        .map(|p| PostJson {
            id: p.id,
            content: p.content,
            created: p.created,
        })
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Drains a multipart field into memory, counting it against the shared
/// size cap and bailing out mid-stream once the cap is crossed.
async fn read_field(field: &mut Field, received: &mut usize) -> Result<Vec<u8>, ApiError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|e| ApiError(AppError::Validation(e.to_string())))?;
        *received += chunk.len();
        if *received > MAX_UPLOAD_BYTES {
            return Err(ApiError(AppError::PayloadTooLarge));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

fn html_response(html: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", location))
        .finish()
}
