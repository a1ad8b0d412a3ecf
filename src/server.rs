//! HTTP surface for metadata, structured data, sitemap and scoring.

use crate::i18n::{locale_from_headers, FallbackMetrics, Locale, MetricsReport};
use crate::seo::{
    generate_seo_meta, generate_structured_data, page_preset, validate_seo,
    validate_structured_data, Metadata, SchemaKind, SeoConfig, SeoContext, SeoScore, Sitemap,
    StructuredDataReport,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct AppState {
    pub seo: SeoContext,
}

impl AppState {
    pub fn new(seo: SeoContext) -> Self {
        Self { seo }
    }
}

/// JSON error body with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Request failed ({}): {}", self.status, self.message);
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/metadata", get(metadata_for_page).post(metadata_from_config))
        .route("/api/structured-data/validate", post(validate_schema))
        .route("/api/structured-data/:kind", get(structured_data))
        .route("/api/seo/validate", post(score_content))
        .route("/api/locale", get(detect_locale))
        .route("/api/metrics", get(fallback_metrics))
        .route("/sitemap.xml", get(sitemap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

fn parse_locale(code: Option<&str>) -> ApiResult<Option<Locale>> {
    code.filter(|c| !c.trim().is_empty())
        .map(Locale::from_code)
        .transpose()
        .map_err(ApiError::from)
}

#[derive(Debug, Default, Deserialize)]
struct MetadataQuery {
    page: Option<String>,
    path: Option<String>,
    locale: Option<String>,
}

async fn metadata_for_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<MetadataQuery>,
) -> ApiResult<Json<Metadata>> {
    let preset = match query.page.as_deref() {
        Some(page) => {
            page_preset(page).ok_or_else(|| ApiError::not_found(format!("Unknown page: {}", page)))?
        }
        None => SeoConfig::default(),
    };

    let locale = parse_locale(query.locale.as_deref())?
        .unwrap_or_else(|| locale_from_headers(&headers));

    let overrides = SeoConfig {
        locale: Some(locale),
        path: query.path.filter(|p| !p.trim().is_empty()),
        ..SeoConfig::default()
    };
    let config = preset.merge(overrides);
    debug!(
        "Generating metadata for path {:?} in {}",
        config.path.as_deref(),
        locale
    );

    Ok(Json(generate_seo_meta(&config, &state.seo)))
}

async fn metadata_from_config(
    State(state): State<AppState>,
    Json(config): Json<SeoConfig>,
) -> Json<Metadata> {
    Json(generate_seo_meta(&config, &state.seo))
}

#[derive(Debug, Default, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

async fn structured_data(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<LocaleQuery>,
) -> ApiResult<Json<Value>> {
    let kind: SchemaKind = kind.parse()?;
    let locale = parse_locale(query.locale.as_deref())?;

    Ok(Json(generate_structured_data(
        kind,
        None,
        locale,
        &state.seo.base_url,
    )))
}

async fn validate_schema(Json(schema): Json<Value>) -> Json<StructuredDataReport> {
    Json(validate_structured_data(&schema))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ScoreRequest {
    title: String,
    description: String,
    keywords: Vec<String>,
    content: String,
}

async fn score_content(Json(request): Json<ScoreRequest>) -> Json<SeoScore> {
    Json(validate_seo(
        &request.title,
        &request.description,
        &request.keywords,
        &request.content,
    ))
}

async fn detect_locale(headers: HeaderMap) -> Json<Value> {
    Json(json!({ "locale": locale_from_headers(&headers).code() }))
}

async fn fallback_metrics() -> Json<MetricsReport> {
    Json(FallbackMetrics::global().report())
}

async fn sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let xml = Sitemap::for_site(&state.seo.base_url).to_xml();
    ([(header::CONTENT_TYPE, "application/xml")], xml)
}
