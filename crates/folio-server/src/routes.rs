use crate::AppState;
use crate::error::{ContactError, MSG_INVALID_BODY, MSG_METHOD_NOT_ALLOWED, error_response};
use crate::validate::validate_submission;
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{SecondsFormat, Utc};
use folio_core::route::path_for;
use folio_core::{CHAPTER_COUNT, ChapterIndex, ContactReceipt, ContactRequest, Route, resolve};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub const MSG_SENT: &str = "Message sent successfully!";
const SITE_TITLE: &str = "Hakkan Parbej Shah - Full Stack Developer";

/// First `x-forwarded-for` hop, else `x-real-ip`, else `unknown`.
pub fn client_identifier(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    };
    header("x-forwarded-for")
        .and_then(|forwarded| forwarded.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty())
        .or_else(|| header("x-real-ip"))
        .unwrap_or("unknown")
        .to_string()
}

pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<ContactReceipt>, ContactError> {
    let client = client_identifier(&headers);
    if !state.limiter.check(&client, Instant::now()).await {
        return Err(ContactError::RateLimited);
    }

    let raw: ContactRequest = serde_json::from_slice(&body).map_err(|err| {
        debug!(%client, "Rejected unparseable contact body: {err}");
        ContactError::Validation(MSG_INVALID_BODY)
    })?;
    let submission = validate_submission(&raw).inspect_err(|err| {
        debug!(%client, reason = %err, "Rejected contact submission");
    })?;

    deliver(&submission, &client, state.delivery_delay).await?;
    Ok(Json(ContactReceipt {
        message: MSG_SENT.to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

/// Stand-in for a mail relay: logs the submission and waits `delay`.
async fn deliver(submission: &ContactRequest, client: &str, delay: Duration) -> anyhow::Result<()> {
    info!(
        client,
        name = %submission.name,
        email = %submission.email,
        message_chars = submission.message.chars().count(),
        "Received contact submission"
    );
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    Ok(())
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, MSG_METHOD_NOT_ALLOWED)
}

pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

pub async fn landing() -> Redirect {
    Redirect::permanent(&path_for(ChapterIndex::FIRST))
}

/// Chapter metadata for one addressable page.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterPage {
    #[serde(flatten)]
    pub chapter: folio_core::Chapter,
    pub page_title: String,
    pub path: String,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub total: usize,
}

impl From<ChapterIndex> for ChapterPage {
    fn from(index: ChapterIndex) -> Self {
        let chapter = *index.chapter();
        let page_title = if index == ChapterIndex::FIRST {
            format!("{SITE_TITLE} | Retro Comic Portfolio")
        } else {
            format!("{} - {SITE_TITLE}", chapter.title)
        };
        ChapterPage {
            chapter,
            page_title,
            path: path_for(index),
            previous: index.previous().map(path_for),
            next: index.next().map(path_for),
            total: CHAPTER_COUNT,
        }
    }
}

pub async fn chapter_page(Path(page): Path<String>) -> Response {
    match resolve(&page) {
        Route::Chapter(index) => Json(ChapterPage::from(index)).into_response(),
        Route::Redirect(index) => Redirect::permanent(&path_for(index)).into_response(),
        Route::NotFound => not_found().await,
    }
}
