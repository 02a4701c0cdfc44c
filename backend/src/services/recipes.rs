//! # 레시피 파일 로딩 서비스
//!
//! 디스크의 레시피 JSON 파일을 읽어 파싱하는 함수를 제공합니다.
//!
//! 의도적으로 캐싱하지 않습니다: 매 요청마다 파일을 새로 읽고 새로 파싱합니다.
//! 데이터는 배포 시 한 번 쓰이고 런타임에는 읽기 전용이므로,
//! 파일을 교체하면 다음 요청부터 바로 반영됩니다.

use crate::error::AppError;
use crate::models::Recipe;
// tokio::fs: 비동기 파일 시스템 모듈
// 일반 std::fs는 동기(블로킹)이므로, 비동기 서버에서는 tokio::fs를 사용해야 합니다.
// 그렇지 않으면 파일 I/O 중에 다른 요청을 처리할 수 없습니다.
use tokio::fs;

/// 디스크에서 레시피 JSON 파일을 읽어 레시피 목록으로 반환합니다.
///
/// # 매개변수
/// - `recipes_path`: 레시피 JSON 파일 경로 (작업 디렉토리 기준 상대 경로 가능)
///
/// # 반환값
/// - `Ok(Vec<Recipe>)`: 파일의 최상위 JSON 배열. 각 원소는 검증 없이 그대로 통과
/// - `Err(AppError::Io)`: 파일이 없거나 읽을 수 없는 경우
/// - `Err(AppError::Json)`: 내용이 유효한 JSON 배열이 아닌 경우
///   (최상위가 객체인 JSON도 "배열이 아님" 파싱 에러로 실패합니다)
pub async fn load_recipes(recipes_path: &str) -> Result<Vec<Recipe>, AppError> {
    // fs::read_to_string(): 파일 전체를 UTF-8 문자열로 읽습니다 (비동기)
    // `?` 연산자: 에러 발생 시 #[from]으로 AppError::Io로 변환되어 전파됩니다.
    let raw = fs::read_to_string(recipes_path).await?;

    // serde_json::from_str::<Vec<Recipe>>: 문자열을 JSON 배열로 파싱합니다.
    // 타입 매개변수가 Vec이므로 최상위가 배열이 아니면 파싱이 실패합니다.
    let recipes: Vec<Recipe> = serde_json::from_str(&raw)?;
    Ok(recipes)
}

// ── 테스트 ──
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::ErrorKind;

    /// 임시 디렉토리에 내용이 `content`인 레시피 파일을 만들고
    /// (디렉토리 핸들, 파일 경로) 쌍을 반환하는 테스트 헬퍼.
    /// TempDir를 반환하지 않으면 drop되면서 파일이 바로 삭제됩니다.
    fn recipes_file(content: &str) -> (tempfile::TempDir, String) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes_clean.json");
        std::fs::write(&path, content).unwrap();
        (dir, path.to_string_lossy().into_owned())
    }

    #[tokio::test]
    async fn loads_well_formed_array() {
        let (_dir, path) = recipes_file(r#"[{"id":1,"name":"Soup"},{"id":2,"name":"Stew"}]"#);

        let recipes = load_recipes(&path).await.unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0], json!({"id": 1, "name": "Soup"}));
    }

    #[tokio::test]
    async fn loads_empty_array() {
        let (_dir, path) = recipes_file("[]");

        let recipes = load_recipes(&path).await.unwrap();

        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_file.json");

        let err = load_recipes(path.to_str().unwrap()).await.unwrap_err();

        // 패턴 매칭으로 에러 variant를 확인합니다.
        match err {
            AppError::Io(e) => assert_eq!(e.kind(), ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let (_dir, path) = recipes_file("[{ not json");

        let err = load_recipes(&path).await.unwrap_err();

        assert!(matches!(err, AppError::Json(_)));
    }

    #[tokio::test]
    async fn top_level_object_is_rejected() {
        // 유효한 JSON이지만 배열이 아니므로 실패해야 합니다.
        let (_dir, path) = recipes_file(r#"{"recipes": []}"#);

        let err = load_recipes(&path).await.unwrap_err();

        assert!(matches!(err, AppError::Json(_)));
    }
}
