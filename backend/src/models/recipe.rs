use serde::Serialize;
use serde_json::Value;

/// 레시피 한 건.
///
/// 레시피 파일은 외부(스크레이퍼)에서 작성되며 스키마를 강제하지 않으므로,
/// 임의의 JSON 값(serde_json::Value)으로 그대로 통과시킵니다.
/// 필드를 해석하거나 검증하지 않습니다.
pub type Recipe = Value;

/// `GET /api/recipes`의 성공 응답 봉투
///
/// 불변식: `count`는 항상 `recipes.len()`과 같습니다.
/// `new()` 생성자를 통해서만 만들도록 하여 이 불변식을 보장합니다.
#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub count: usize,
    pub recipes: Vec<Recipe>,
}

impl RecipesResponse {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            count: recipes.len(),
            recipes,
        }
    }
}
