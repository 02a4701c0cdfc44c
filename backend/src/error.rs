//! # 에러 처리 모듈
//!
//! 애플리케이션에서 발생할 수 있는 모든 에러 타입을 정의합니다.
//! Rust에서는 예외(exception) 대신 `Result<T, E>` 타입으로 에러를 처리합니다.
//!
//! 이 모듈의 핵심:
//! - `AppError` 열거형(enum): 모든 에러 종류를 하나의 타입으로 통합
//! - `IntoResponse` 구현: 에러를 HTTP 응답으로 자동 변환
//!
//! 이 앱의 유일한 실패 경로는 "레시피 파일 로딩 실패"입니다.
//! 파일이 없거나, 읽을 수 없거나, JSON이 깨진 경우 모두
//! HTTP 500 + `{"error": "failed_to_load_recipes", "message": "..."}` 로 응답합니다.

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (200, 404, 500 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // thiserror: 커스텀 에러 타입을 쉽게 만들어주는 매크로 크레이트

// #[derive(Debug, Error)]: 두 가지 derive 매크로를 적용합니다.
// - Debug: 디버깅용 출력 ({:?})
// - Error (thiserror): std::error::Error 트레이트를 자동 구현.
//   #[error("...")] 어트리뷰트로 Display 트레이트(사람이 읽을 에러 메시지)도 자동 생성합니다.
//
// enum(열거형): 여러 가지 가능한 값 중 하나를 나타내는 타입.
// 다른 언어의 union type이나 sealed class와 비슷합니다.
// match 문으로 모든 경우를 빠짐없이 처리해야 합니다 (exhaustive matching).

/// 애플리케이션에서 발생할 수 있는 모든 에러 종류
///
/// 핸들러에서 `Result<T, AppError>`를 반환하면,
/// Axum이 자동으로 `IntoResponse`를 호출하여 HTTP 응답으로 변환합니다.
#[derive(Debug, Error)]
pub enum AppError {
    // #[error("...")]: 이 variant의 Display 메시지를 정의합니다.
    // .to_string()이나 println!("{}", err)로 출력할 때 이 메시지가 사용됩니다.
    // {0}은 첫 번째 필드를 참조하는 포맷 문법입니다.

    /// 파일 입출력 오류 — 레시피 파일이 없거나 읽을 수 없는 경우 (HTTP 500)
    /// #[from]: std::io::Error를 AppError로 자동 변환하는 From 트레이트를 구현합니다.
    /// 이를 통해 tokio::fs 함수에서 반환된 에러에 `?` 연산자를 사용하면
    /// 자동으로 AppError::Io로 변환됩니다.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// JSON 파싱 오류 — 파일 내용이 유효한 JSON 배열이 아닌 경우 (HTTP 500)
    /// #[from]: serde_json::Error → AppError::Json 자동 변환
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

// impl IntoResponse for AppError:
// Axum의 IntoResponse 트레이트를 AppError에 구현합니다.
// 이를 통해 핸들러가 Err(AppError)를 반환하면,
// Axum이 자동으로 이 메서드를 호출하여 적절한 HTTP 응답을 생성합니다.
//
// 트레이트 구현(impl Trait for Type)은 Rust의 핵심 패턴입니다.
// 다른 언어의 인터페이스 구현(implements)과 비슷하지만,
// 기존 타입에 새 행동을 추가할 수 있다는 점이 다릅니다.
impl IntoResponse for AppError {
    /// AppError를 HTTP 응답으로 변환합니다.
    ///
    /// 모든 에러 종류가 같은 실패("레시피 로딩 실패")의 다른 원인이므로,
    /// 와이어 포맷에서는 구분하지 않고 하나의 에러 코드로 응답합니다.
    /// `message`에는 원인 에러의 문자열 표현이 그대로 들어갑니다.
    fn into_response(self) -> Response {
        // 에러 내용은 로그에도 기록합니다 (서버 관리자용).
        tracing::error!("Failed to load recipes: {}", self);

        // JSON 응답 본문을 생성합니다.
        // json! 매크로: Rust 코드로 JSON 구조를 직관적으로 작성할 수 있게 합니다.
        // 결과: { "error": "failed_to_load_recipes", "message": "..." }
        let body = Json(json!({
            "error": "failed_to_load_recipes",
            "message": self.to_string(),
        }));

        // (StatusCode, Json<Value>)를 Response로 변환합니다.
        // Axum은 튜플 (상태코드, 본문)을 자동으로 HTTP 응답으로 변환합니다.
        // .into_response(): IntoResponse 트레이트의 메서드를 호출
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
