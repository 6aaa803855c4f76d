use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    http::{header, HeaderName, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nr_core::error::NrError;
use nr_docx::Annotator;
use serde_json::{json, Value};
use std::path::Path;
use uuid::Uuid;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="ja">
<head><meta charset="utf-8"><title>Narration formatter</title></head>
<body>
  <h1>Narration formatter</h1>
  <form action="/upload" method="post" enctype="multipart/form-data">
    <p><input type="file" name="input_file" accept=".txt"></p>
    <p><input type="text" name="output_file" placeholder="output name"></p>
    <p><button type="submit">Convert</button></p>
  </form>
</body>
</html>
"#;

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
}

pub fn upload_routes() -> Router<AppState> {
    Router::new().route("/upload", post(upload))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Keep only the final path component and drop a trailing `.docx`. Quotes,
/// backslashes and control characters are removed.
pub fn sanitize_output_name(raw: &str) -> Option<String> {
    let name = Path::new(raw.trim()).file_name()?.to_str()?;
    let name = name.strip_suffix(".docx").unwrap_or(name);
    let name: String = name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    let name = name.trim();
    (!name.is_empty() && name != "." && name != "..").then(|| name.to_string())
}

/// `attachment` disposition with an ASCII fallback and an RFC 5987
/// `filename*` for non-ASCII names.
pub fn content_disposition(name: &str) -> String {
    let fallback: String = name
        .chars()
        .map(|c| if c.is_ascii() { c } else { '_' })
        .collect();
    let mut encoded = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || b"-._~".contains(&b) {
            encoded.push(b as char);
        } else {
            encoded.push_str(&format!("%{b:02X}"));
        }
    }
    format!("attachment; filename=\"{fallback}.docx\"; filename*=UTF-8''{encoded}.docx")
}

async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut input = None;
    let mut output_name = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "input_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                input = Some((filename, data));
            }
            "output_file" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(e.to_string()))?;
                output_name = Some(text);
            }
            _ => {}
        }
    }

    let (Some((filename, data)), Some(output_name)) = (input, output_name) else {
        return Err(ApiError::bad_request("No file part"));
    };
    if filename.is_empty() {
        return Err(ApiError::bad_request("No selected file"));
    }
    let name = sanitize_output_name(&output_name)
        .ok_or_else(|| ApiError::bad_request("No output name"))?;
    let content = String::from_utf8(data.to_vec())
        .map_err(|e| NrError::MalformedInput(format!("{filename} is not UTF-8: {e}")))?;

    let server = &state.config.server;
    let output_path = server.output_dir.join(format!("{}-{name}.docx", Uuid::new_v4()));
    let template = server.template_path.clone();
    let style = state.config.style.clone();
    let target = output_path.clone();
    tracing::info!(
        input = %filename,
        output = %output_path.display(),
        bytes = content.len(),
        "upload received"
    );

    let report = tokio::task::spawn_blocking(move || {
        Annotator::new(style).annotate(&content, &template, &target)
    })
    .await
    .map_err(|e| ApiError::internal(e.to_string()))??;

    let bytes = tokio::fs::read(&output_path)
        .await
        .map_err(|e| ApiError::from(NrError::from(e)))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_MIME.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(&name)),
            (
                HeaderName::from_static("x-highlighted-records"),
                report.highlighted_spans.to_string(),
            ),
        ],
        bytes,
    )
        .into_response())
}
