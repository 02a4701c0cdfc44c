//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//! Axum에서 핸들러는 HTTP 요청을 받아 응답을 반환하는 async 함수입니다.
//!
//! 각 하위 모듈:
//! - `health`: 서버 상태 확인 (헬스체크)
//! - `recipes`: 레시피 목록 조회 (공유 상태 AppState 포함)

pub mod health;
pub mod recipes;

// 각 모듈의 핸들러 함수들을 재공개하여
// main.rs에서 `routes::health_check`처럼 바로 접근 가능하게 합니다.
pub use health::*;
pub use recipes::*;
