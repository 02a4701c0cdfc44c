//! # 서비스 모듈
//!
//! 라우트 핸들러에서 분리한 비즈니스 로직(파일 I/O 등)을 담습니다.
//! - `recipes`: 레시피 JSON 파일 로딩

pub mod recipes;
