use crate::infra::{resolve_language, AppState};
use axum::extract::Query;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use router_checklist::checklist::locale::{strings, Strings};
use router_checklist::checklist::report::views::{AssessmentSummary, CatalogView};
use router_checklist::checklist::{
    catalog_view, plan_essentials, AssessmentForm, AssessmentSession, ChecklistError, ControlKey,
    Language, Selections, TextFields,
};
use router_checklist::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct LanguageQuery {
    #[serde(default)]
    pub(crate) lang: Option<String>,
}

/// Form snapshot sent by a client.
///
/// `text_fields` merges over the preset answers: omitted keys (or an omitted object)
/// keep the preset, and an empty string clears a field. Its keys are the `TextField`
/// wire names (`systemType`, `hardware`, ...), the same identifiers reported back in
/// `missing_required_fields`. `checked` lists control wire keys; anything unlisted is
/// unchecked.
#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    #[serde(default)]
    pub(crate) language: Option<String>,
    #[serde(default = "TextFields::preset")]
    pub(crate) text_fields: TextFields,
    #[serde(default)]
    pub(crate) checked: Vec<String>,
}

impl Default for AssessmentRequest {
    fn default() -> Self {
        Self {
            language: None,
            text_fields: TextFields::preset(),
            checked: Vec::new(),
        }
    }
}

impl AssessmentRequest {
    fn into_session(self, default: Language) -> Result<AssessmentSession, ChecklistError> {
        let language = resolve_language(self.language.as_deref(), default)?;
        let checked = self
            .checked
            .iter()
            .map(|raw| raw.parse::<ControlKey>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AssessmentSession::with_form(
            language,
            AssessmentForm::new(self.text_fields, Selections::from_checked(checked)),
        ))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) form: AssessmentForm,
    pub(crate) summary: AssessmentSummary,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) applied: Vec<ControlKey>,
}

impl AssessmentResponse {
    fn from_session(session: &AssessmentSession, applied: Vec<ControlKey>) -> Self {
        Self {
            form: session.form().clone(),
            summary: session.summary(),
            applied,
        }
    }
}

pub(crate) fn checklist_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/strings", get(strings_endpoint))
        .route("/api/v1/catalog", get(catalog_endpoint))
        .route("/api/v1/assessment/preset", get(preset_endpoint))
        .route("/api/v1/assessment/evaluate", post(evaluate_endpoint))
        .route("/api/v1/assessment/essentials", post(essentials_endpoint))
        .route("/api/v1/assessment/brief", post(brief_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Localized labels (title, pass rule, field names, button captions, copy confirmation).
pub(crate) async fn strings_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<&'static Strings>, AppError> {
    let language = resolve_language(query.lang.as_deref(), state.default_language)?;
    Ok(Json(strings(language)))
}

pub(crate) async fn catalog_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<CatalogView>, AppError> {
    let language = resolve_language(query.lang.as_deref(), state.default_language)?;
    Ok(Json(catalog_view(language, &Selections::cleared())))
}

pub(crate) async fn preset_endpoint(
    Extension(state): Extension<AppState>,
    Query(query): Query<LanguageQuery>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let language = resolve_language(query.lang.as_deref(), state.default_language)?;
    let session = AssessmentSession::new(language);
    Ok(Json(AssessmentResponse::from_session(&session, Vec::new())))
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let session = payload.into_session(state.default_language)?;
    Ok(Json(AssessmentResponse::from_session(&session, Vec::new())))
}

pub(crate) async fn essentials_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let mut session = payload.into_session(state.default_language)?;
    let applied = plan_essentials(session.form());
    session.apply_essentials();
    debug!(applied = applied.len(), "essentials applied via api");

    Ok(Json(AssessmentResponse::from_session(&session, applied)))
}

pub(crate) async fn brief_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<AssessmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let brief = payload.into_session(state.default_language)?.brief();

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_PLAIN_UTF_8.as_ref())],
        brief,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            default_language: Language::En,
        }
    }

    fn app() -> Router {
        checklist_routes().layer(Extension(test_state()))
    }

    #[tokio::test]
    async fn evaluate_endpoint_scores_checked_controls() {
        let request = AssessmentRequest {
            checked: vec!["pr_mfa".to_string()],
            ..AssessmentRequest::default()
        };

        let Json(body) = evaluate_endpoint(Extension(test_state()), Json(request))
            .await
            .expect("evaluation succeeds");

        assert_eq!(body.summary.score, 61);
        assert!(!body.summary.passed);
        assert_eq!(body.summary.language, Language::En);
        assert!(body.form.selections.is_checked(ControlKey::PrMfa));
        assert!(body.applied.is_empty());
    }

    #[tokio::test]
    async fn essentials_endpoint_reports_applied_keys() {
        let request = AssessmentRequest {
            language: Some("km".to_string()),
            ..AssessmentRequest::default()
        };

        let Json(body) = essentials_endpoint(Extension(test_state()), Json(request))
            .await
            .expect("essentials succeed");

        assert_eq!(body.applied.len(), 16);
        assert_eq!(body.applied[0], ControlKey::PrNoDefaultCreds);
        assert_eq!(body.summary.score, 81);
        assert!(body.summary.passed);
        assert_eq!(body.summary.language, Language::Km);
    }

    #[tokio::test]
    async fn unknown_control_is_a_bad_request() {
        let request = AssessmentRequest {
            checked: vec!["pr_disableUPnP".to_string()],
            ..AssessmentRequest::default()
        };

        let error = evaluate_endpoint(Extension(test_state()), Json(request))
            .await
            .expect_err("unknown key rejected");

        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn catalog_route_returns_localized_groups() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/catalog?lang=km")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["language"], "km");
        assert_eq!(body["total"], 31);
        assert_eq!(body["groups"][0]["code"], "GV");
        assert_eq!(body["groups"][2]["controls"].as_array().map(Vec::len), Some(13));
    }

    #[tokio::test]
    async fn brief_route_returns_plain_text() {
        let payload = json!({
            "text_fields": { "data": "", "metric": "  " },
            "checked": ["de_alerts"]
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assessment/brief")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime::TEXT_PLAIN_UTF_8.as_ref()
        );
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let brief = String::from_utf8(bytes.to_vec()).expect("utf8 brief");

        assert!(brief.starts_with("Project: SDG 9 Security System (Wi-Fi Router)"));
        assert!(brief.contains("Status: NOT PASSED · Score: 41/100"));
        assert!(brief.contains("- [x] Detect: Alerts/logs enabled"));
        assert!(brief.contains("- System type: Home IoT security system + dashboard"));
        assert!(brief.ends_with("## Missing required inputs\n- Data collected\n- KPIs (metrics)"));
    }

    #[tokio::test]
    async fn empty_text_fields_object_keeps_preset_answers() {
        let request: AssessmentRequest =
            serde_json::from_value(json!({ "text_fields": {}, "checked": [] }))
                .expect("request parses");

        let Json(body) = evaluate_endpoint(Extension(test_state()), Json(request))
            .await
            .expect("evaluation succeeds");

        assert_eq!(body.summary.required_score, 60);
        assert!(body.summary.missing_required_fields.is_empty());
        assert_eq!(body.form.text_fields, TextFields::preset());
    }

    #[tokio::test]
    async fn strings_route_serves_khmer_labels() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/strings?lang=km")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["pass_rule"], "ជាប់ = inputs (auto) + ពិន្ទុ ≥ 80។");
        assert_eq!(body["copied"], strings(Language::Km).copied);
        assert_eq!(body["buttons"]["essentials"], "ចុច Essentials ស្វ័យប្រវត្តិ");
        assert_eq!(body["fields"]["system_type"], "ប្រភេទប្រព័ន្ធ");
    }

    #[tokio::test]
    async fn unsupported_language_query_is_rejected() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/assessment/preset?lang=fr")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
