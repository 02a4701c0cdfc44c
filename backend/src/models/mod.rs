//! # 데이터 모델 모듈
//!
//! 애플리케이션에서 사용하는 데이터 구조체(struct)들을 정의합니다.
//! - `recipe`: 레시피 응답 봉투(envelope) 관련 구조체
//!
//! `pub use X::*;`는 하위 모듈의 모든 공개 항목을
//! 이 모듈에서 바로 접근할 수 있게 재공개(re-export)합니다.
//! 예: `crate::models::recipe::RecipesResponse` 대신 `crate::models::RecipesResponse`로 접근 가능

// pub mod: 하위 모듈을 공개(public)로 선언합니다.
// pub이 없으면 이 모듈 내부에서만 접근 가능합니다.
pub mod recipe;

// pub use: 하위 모듈의 항목을 현재 모듈에서 재공개합니다.
// `*`(glob)는 모든 공개 항목을 의미합니다.
pub use recipe::*;
