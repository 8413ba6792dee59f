//! Prediction handlers
//!
//! `POST /predict` takes the HTML form and renders the result page;
//! `POST /api/v1/predict` runs the same pipeline over JSON.

use std::collections::HashMap;

use axum::{
    extract::{rejection::{FormRejection, JsonRejection}, State},
    response::Html,
    Form, Json,
};
use serde_json::Value;

use crate::{AppState, AppError, AppResult};
use crate::features::FeatureVector;
use crate::model::{ModelProvider, PredictionOutcome};
use crate::views;

/// Form submission
pub async fn submit(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> AppResult<Html<String>> {
    let Form(fields) = form.map_err(|e| AppError::Input(e.body_text()))?;

    let outcome = run_prediction(&state.models, &fields).await?;
    Ok(Html(views::render_result(&outcome)))
}

/// JSON API. Fields may be JSON numbers or numeric strings.
pub async fn predict_json(
    State(state): State<AppState>,
    body: Result<Json<HashMap<String, Value>>, JsonRejection>,
) -> AppResult<Json<PredictionOutcome>> {
    let Json(body) = body.map_err(|e| AppError::Input(e.body_text()))?;

    let fields = body
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, text)
        })
        .collect();

    let outcome = run_prediction(&state.models, &fields).await?;
    Ok(Json(outcome))
}

/// Coerce, load, predict, classify
async fn run_prediction(
    models: &ModelProvider,
    fields: &HashMap<String, String>,
) -> AppResult<PredictionOutcome> {
    let features = FeatureVector::from_fields(fields)?;
    tracing::debug!(features = %features.to_log_entry(), "Prediction requested");

    // Artifact loading and ONNX inference both block
    let models = models.clone();
    let prediction = tokio::task::spawn_blocking(move || {
        let model = models.model()?;
        model.predict(&features)
    })
    .await??;

    let outcome = PredictionOutcome::new(prediction, &features);
    tracing::debug!(
        prediction,
        risk_level = outcome.risk_level,
        "Prediction complete"
    );

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use parking_lot::Mutex;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::model::inference::{Model, ModelError};
    use crate::model::{ModelArtifacts, ModelMode};

    const SAMPLE_FORM: &str = "temperature=28.5&humidity=45.0&pm10=120.0&co2=450.0\
        &hour=8&day_of_week=1&month=6&is_weekend=0&is_rush_hour=1";

    struct Constant(f64);

    impl Model for Constant {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
            Ok(self.0)
        }
    }

    #[derive(Clone, Default)]
    struct Recording(Arc<Mutex<Vec<[f32; 9]>>>);

    impl Model for Recording {
        fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
            self.0.lock().push(features.to_array());
            Ok(10.0)
        }
    }

    struct Broken;

    impl Model for Broken {
        fn predict(&self, _features: &FeatureVector) -> Result<f64, ModelError> {
            Err(ModelError::Inference("output tensor was empty".to_string()))
        }
    }

    fn app_with(models: ModelProvider) -> Router {
        crate::create_router(AppState {
            models,
            config: Config::from_env(),
        })
    }

    fn form_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/predict")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn json_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn error_message(response: axum::response::Response) -> String {
        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        body["error"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_form_prediction_moderate() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));

        let response = app.oneshot(form_request(SAMPLE_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("50.00 µg/m³"));
        assert!(html.contains("<strong>Moderate</strong>"));
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("CO2: 450.0 ppm"));
    }

    #[tokio::test]
    async fn test_features_reach_model_in_layout_order() {
        let recording = Recording::default();
        let app = app_with(ModelProvider::shared(recording.clone()));

        let response = app.oneshot(form_request(SAMPLE_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let seen = recording.0.lock();
        assert_eq!(seen.as_slice(), &[[28.5, 45.0, 120.0, 450.0, 8.0, 1.0, 6.0, 0.0, 1.0]]);
    }

    #[tokio::test]
    async fn test_non_numeric_field_is_rejected() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let body = SAMPLE_FORM.replace("temperature=28.5", "temperature=abc");

        let response = app.oneshot(form_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let message = error_message(response).await;
        assert!(message.contains("temperature"));
        assert!(message.contains("abc"));
    }

    #[tokio::test]
    async fn test_missing_field_is_rejected() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let body = SAMPLE_FORM.replace("&is_rush_hour=1", "");

        let response = app.oneshot(form_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "missing field 'is_rush_hour'");
    }

    #[tokio::test]
    async fn test_missing_artifacts_surface_as_client_error() {
        let artifacts = ModelArtifacts::new("missing/model.onnx", "missing/features.json");
        let models = ModelProvider::new(artifacts, ModelMode::Reload).unwrap();
        let app = app_with(models);

        let response = app.oneshot(form_request(SAMPLE_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("missing/features.json"));
    }

    #[tokio::test]
    async fn test_inference_failure_surfaces_message() {
        let app = app_with(ModelProvider::shared(Broken));

        let response = app.oneshot(form_request(SAMPLE_FORM)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_message(response).await, "output tensor was empty");
    }

    #[tokio::test]
    async fn test_json_prediction_rounds_value() {
        let app = app_with(ModelProvider::shared(Constant(42.567)));
        let request = json_request(serde_json::json!({
            "temperature": 28.5,
            "humidity": "45.0",
            "pm10": 120.0,
            "co2": 450,
            "hour": 8,
            "day_of_week": 1,
            "month": 6,
            "is_weekend": 0,
            "is_rush_hour": "1"
        }));

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["pm2_5"], 42.57);
        assert_eq!(body["risk_level"], "Moderate");
        assert_eq!(body["risk_color"], "warning");
        assert_eq!(body["pm10"], 120.0);
    }

    #[tokio::test]
    async fn test_json_boolean_field_is_rejected() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let request = json_request(serde_json::json!({
            "temperature": 28.5,
            "humidity": 45.0,
            "pm10": 120.0,
            "co2": 450.0,
            "hour": 8,
            "day_of_week": 1,
            "month": 6,
            "is_weekend": true,
            "is_rush_hour": 1
        }));

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(error_message(response).await.contains("is_weekend"));
    }

    #[tokio::test]
    async fn test_malformed_json_returns_error_body() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/predict")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!error_message(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = body_string(response).await;
        assert!(html.contains("name=\"temperature\" value=\"28.5\""));
        assert!(html.contains("name=\"is_rush_hour\""));
    }

    #[tokio::test]
    async fn test_health_reports_mode() {
        let app = app_with(ModelProvider::shared(Constant(50.0)));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["model_mode"], "cached");
        assert_eq!(body["feature_layout"]["feature_count"], 9);
    }
}
