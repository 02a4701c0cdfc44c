//! # 레시피(Recipe) 라우트 핸들러
//!
//! 레시피 목록을 반환하는 HTTP 핸들러입니다.
//!
//! ## 엔드포인트
//! - `GET /api/recipes` → `{ "count": N, "recipes": [...] }`
//!
//! ## Axum 핸들러 패턴
//! Axum 핸들러는 **Extractor(추출기)**를 매개변수로 받습니다.
//! Extractor는 HTTP 요청에서 데이터를 자동으로 추출합니다:
//! - `State(state)`: 앱 전역 상태 (여기서는 레시피 파일 경로)
//!
//! 반환 타입이 `Result<T, AppError>`이면, Axum이 자동으로:
//! - `Ok(T)` → T를 HTTP 응답으로 변환 (IntoResponse 트레이트 사용)
//! - `Err(AppError)` → AppError를 에러 JSON 응답으로 변환

use crate::{
    error::AppError,
    models::RecipesResponse,
    services, // 비즈니스 로직 (파일 I/O)
};
use axum::{
    extract::State, // Axum Extractor: 요청에서 데이터 추출
    Json,           // JSON 요청/응답 래퍼
};

// #[derive(Clone)]: AppState가 Clone 트레이트를 구현하게 합니다.
// Axum의 State Extractor는 내부적으로 AppState를 clone하므로 필수입니다.
// String의 clone은 저렴하고, 요청마다 한 번뿐입니다.

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// Axum의 의존성 주입(Dependency Injection) 메커니즘입니다.
/// 이 앱에는 공유할 가변 상태가 없으므로 파일 경로 하나만 담습니다.
#[derive(Clone)]
pub struct AppState {
    /// 레시피 JSON 파일 경로
    pub recipes_path: String,
}

/// `GET /recipes` — 전체 레시피 목록을 조회합니다.
///
/// 매 요청마다 레시피 파일을 디스크에서 새로 읽어 파싱합니다.
/// 캐싱, 페이지네이션, 필터링은 없습니다 — 파일 내용을 그대로 돌려줍니다.
///
/// # 응답
/// - `200 OK`: `{"count": N, "recipes": [...]}` (count == 배열 길이)
/// - `500 Internal Server Error`: 파일이 없거나, 읽을 수 없거나,
///   유효한 JSON 배열이 아닌 경우.
///   `{"error": "failed_to_load_recipes", "message": "..."}`
pub async fn list_recipes(
    State(state): State<AppState>,
) -> Result<Json<RecipesResponse>, AppError> {
    // `?` 연산자: 로딩 실패 시 AppError가 즉시 반환되고,
    // IntoResponse 구현이 500 에러 봉투로 변환합니다.
    let recipes = services::recipes::load_recipes(&state.recipes_path).await?;

    // RecipesResponse::new()가 count == recipes.len() 불변식을 보장합니다.
    Ok(Json(RecipesResponse::new(recipes)))
}

// ── 테스트 ──
// 실제 서버를 띄우지 않고, 라우터에 요청 하나를 직접 흘려보내는(oneshot) 방식으로
// 핸들러를 HTTP 레벨에서 검증합니다.
#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt; // .oneshot()을 사용하기 위한 트레이트

    use super::*;

    /// 주어진 경로를 레시피 파일로 사용하는 테스트용 라우터를 만듭니다.
    fn create_test_app(recipes_path: &str) -> Router {
        let state = AppState {
            recipes_path: recipes_path.to_string(),
        };
        Router::new()
            .route("/api/recipes", get(list_recipes))
            .with_state(state)
    }

    /// 임시 디렉토리에 레시피 파일을 만드는 테스트 헬퍼.
    /// TempDir 핸들을 함께 반환해야 파일이 테스트 중에 살아있습니다.
    fn recipes_file(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes_clean.json");
        std::fs::write(&path, content).unwrap();
        (dir, path.to_string_lossy().into_owned())
    }

    async fn get_recipes(app: Router) -> axum::http::Response<Body> {
        let request = Request::builder()
            .uri("/api/recipes")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn response_body(response: axum::http::Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn returns_count_and_recipes_verbatim() {
        // Given: 레시피 1건이 들어있는 파일
        let (_dir, path) = recipes_file(r#"[{"id":1,"name":"Soup"}]"#);
        let app = create_test_app(&path);

        // When
        let response = get_recipes(app).await;

        // Then: count == 배열 길이, 레시피는 파일 내용 그대로
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body, json!({"count": 1, "recipes": [{"id": 1, "name": "Soup"}]}));
    }

    #[tokio::test]
    async fn count_tracks_file_length() {
        let (_dir, path) =
            recipes_file(r#"[{"name":"A"},{"name":"B"},{"name":"C"}]"#);
        let app = create_test_app(&path);

        let response = get_recipes(app).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body["count"], json!(3));
        assert_eq!(body["recipes"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn empty_file_returns_zero_count() {
        let (_dir, path) = recipes_file("[]");
        let app = create_test_app(&path);

        let response = get_recipes(app).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body, json!({"count": 0, "recipes": []}));
    }

    #[tokio::test]
    async fn recipes_pass_through_without_schema() {
        // 레시피 shape은 검증하지 않습니다 — 문자열, 숫자, 중첩 객체 모두 통과
        let (_dir, path) = recipes_file(r#"["just a string", 42, {"nested": {"deep": true}}]"#);
        let app = create_test_app(&path);

        let response = get_recipes(app).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body["count"], json!(3));
        assert_eq!(body["recipes"][0], json!("just a string"));
    }

    #[tokio::test]
    async fn missing_file_returns_500_with_error_envelope() {
        // Given: 존재하지 않는 파일 경로
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deleted.json");
        let app = create_test_app(path.to_str().unwrap());

        // When
        let response = get_recipes(app).await;

        // Then: 500 + 고정 에러 코드 + 원인 메시지
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_body(response).await;
        assert_eq!(body["error"], json!("failed_to_load_recipes"));
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn malformed_json_returns_500() {
        let (_dir, path) = recipes_file("this is not json");
        let app = create_test_app(&path);

        let response = get_recipes(app).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response_body(response).await;
        assert_eq!(body["error"], json!("failed_to_load_recipes"));
    }

    #[tokio::test]
    async fn failure_does_not_poison_later_requests() {
        // 실패는 요청 단위입니다. 파일이 생기면 다음 요청은 성공해야 합니다.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes_clean.json");
        let app = create_test_app(path.to_str().unwrap());

        let response = get_recipes(app.clone()).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // 파일을 만들어주면 같은 라우터로 보낸 다음 요청은 200
        std::fs::write(&path, r#"[{"id":1,"name":"Soup"}]"#).unwrap();
        let response = get_recipes(app).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = response_body(response).await;
        assert_eq!(body["count"], json!(1));
    }
}
