use axum::extract::rejection::{FormRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Form;

use super::error::KafkaBridgeError;
use super::{AppState, ErrorResponse};
use crate::domain::entity::Message;

const MESSAGE_PARAM: &str = "message";

/// SendMessageParams は POST /kafka のリクエストパラメータ（OpenAPI 用）。
/// クエリ文字列とフォームボディのどちらで渡してもよい。
#[derive(Debug, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SendMessageParams {
    /// 発行するメッセージ本文。複数回指定された場合はカンマで連結する
    pub message: String,
}

type Pairs = Vec<(String, String)>;
// utoipa の axum_extras が Form<T> から request body を推論しないよう別名で受ける
type PairsForm = Form<Pairs>;

/// クエリ・フォームの順に message の値を集め、カンマで連結する。
/// 一度も指定されていなければ None。
fn join_message_values(query: &[(String, String)], form: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = query
        .iter()
        .chain(form)
        .filter(|(key, _)| key == MESSAGE_PARAM)
        .map(|(_, value)| value.as_str())
        .collect();
    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Health check OK")))]
pub async fn healthz() -> &'static str {
    "ok"
}

#[utoipa::path(get, path = "/readyz", responses((status = 200, description = "Ready")))]
pub async fn readyz() -> &'static str {
    "ok"
}

#[utoipa::path(
    post,
    path = "/kafka",
    params(SendMessageParams),
    responses(
        (status = 200, description = "Message published"),
        (status = 400, description = "Missing message parameter", body = ErrorResponse),
        (status = 500, description = "Publish failed", body = ErrorResponse),
    )
)]
pub async fn send_message(
    State(state): State<AppState>,
    query: Result<Query<Pairs>, QueryRejection>,
    form: Result<PairsForm, FormRejection>,
) -> Result<StatusCode, KafkaBridgeError> {
    let Query(query) = query.map_err(|e| KafkaBridgeError::Validation(e.body_text()))?;
    // フォーム以外のボディは message を含まないものとして扱う
    let form = form.map(|Form(pairs)| pairs).unwrap_or_default();

    let payload = join_message_values(&query, &form).ok_or_else(|| {
        KafkaBridgeError::Validation("required parameter 'message' is not present".to_string())
    })?;

    state
        .send_message_uc
        .execute(&Message::new(payload))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to publish message");
            KafkaBridgeError::Publish(e.to_string())
        })?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Pairs {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_join_single_value() {
        let query = pairs(&[("message", "hello")]);
        assert_eq!(join_message_values(&query, &[]), Some("hello".to_string()));
    }

    #[test]
    fn test_join_repeated_values() {
        let query = pairs(&[("message", "a"), ("other", "x"), ("message", "b")]);
        assert_eq!(join_message_values(&query, &[]), Some("a,b".to_string()));
    }

    #[test]
    fn test_join_query_then_form() {
        let query = pairs(&[("message", "q")]);
        let form = pairs(&[("message", "f")]);
        assert_eq!(join_message_values(&query, &form), Some("q,f".to_string()));
    }

    #[test]
    fn test_join_missing() {
        let query = pairs(&[("msg", "hello")]);
        assert_eq!(join_message_values(&query, &[]), None);
    }

    #[test]
    fn test_join_empty_value_is_present() {
        let query = pairs(&[("message", "")]);
        assert_eq!(join_message_values(&query, &[]), Some(String::new()));
    }
}
