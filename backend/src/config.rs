//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 서버 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `RECIPES_PATH`: 레시피 JSON 파일 경로
//! - `FRONTEND_DIST`: 빌드된 프론트엔드 정적 파일 디렉토리
//! - `HOST`: 서버 바인딩 주소
//! - `PORT`: 서버 포트 번호

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

// #[derive(...)]: 자동으로 트레이트 구현을 생성하는 **derive 매크로**
// - Debug: {:?} 포맷으로 출력 가능 (디버깅용 문자열 표현)
// - Clone: .clone() 메서드로 값을 복제 가능
//
// Rust에서 트레이트(trait)는 "이 타입이 할 수 있는 행동"을 정의합니다.
// derive를 사용하면 컴파일러가 보일러플레이트 코드를 자동으로 생성합니다.
#[derive(Debug, Clone)]
/// 애플리케이션 전체 설정을 담는 구조체
///
/// 서버 시작 시 환경변수에서 한 번 읽어온 후,
/// 애플리케이션 전체에서 공유됩니다.
pub struct Config {
    /// 레시피 JSON 파일 경로 (프로세스 작업 디렉토리 기준 상대 경로)
    pub recipes_path: String,
    /// 빌드된 프론트엔드 정적 파일 디렉토리 경로
    pub frontend_dist: String,
    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0")
    pub host: String,
    /// 서버 포트 번호 (기본값: 4000)
    /// u16: 0~65535 범위의 부호 없는 16비트 정수. 포트 번호에 딱 맞는 타입입니다.
    pub port: u16,
}

// impl: 구조체에 메서드를 추가하는 블록
// 다른 언어의 class 내부 메서드와 비슷합니다.
impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 설정 항목에 기본값이 있으므로 이 함수는 실패하지 않습니다.
    /// 환경변수가 없거나 파싱에 실패하면 조용히 기본값으로 대체합니다.
    pub fn from_env() -> Self {
        // Self { ... }: Config 인스턴스를 생성합니다.
        // Self는 impl 블록의 대상 타입(Config)을 가리킵니다.
        Self {
            // env::var("KEY"): 환경변수를 읽습니다. 반환 타입은 Result<String, VarError>.
            // unwrap_or_else(|_| ...): Result가 Err일 때 실행할 클로저(익명 함수)를 지정합니다.
            // |_|: 클로저의 매개변수. `_`는 "이 값은 사용하지 않겠다"는 의미입니다.
            // .to_string(): &str(문자열 슬라이스)를 String(소유된 문자열)으로 변환
            recipes_path: env::var("RECIPES_PATH")
                .unwrap_or_else(|_| "recipes_clean.json".to_string()),
            frontend_dist: env::var("FRONTEND_DIST")
                .unwrap_or_else(|_| "../frontend/dist".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),

            // 포트 번호는 문자열 → 숫자 변환이 필요합니다.
            // .ok(): Result<String, _> → Option<String> 변환
            // .and_then(): Option이 Some일 때만 다음 변환을 시도
            // .parse(): 문자열을 다른 타입으로 파싱. 여기서는 u16으로 변환합니다.
            // .unwrap_or(4000): 환경변수가 없거나 파싱 실패 시 기본값 4000 사용
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
        }
    }
}
