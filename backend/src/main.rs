//! # Coking 웹 서버 진입점
//!
//! 이 파일은 Coking 애플리케이션의 **시작점(entry point)**입니다.
//! Rust 프로그램은 항상 `main()` 함수에서 실행이 시작됩니다.
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정(Config) 로딩
//! 4. API 라우터 설정 (헬스체크 + 레시피 목록)
//! 5. 프론트엔드 정적 파일 서빙 설정
//! 6. HTTP 서버 시작

// ── 모듈 선언 ──
// `mod` 키워드는 다른 파일을 모듈로 가져옵니다.
// 예: `mod config;`는 같은 디렉토리의 `config.rs` 또는 `config/mod.rs`를 가져옵니다.
// Rust에서는 파일 시스템 구조가 곧 모듈 구조입니다.
mod config;
mod error;
mod models;
mod routes;
mod services;

// ── 외부 크레이트 및 모듈에서 필요한 항목 가져오기 ──
// `use` 키워드는 다른 모듈의 항목을 현재 스코프로 가져옵니다.
// Python의 `from X import Y`와 비슷합니다.
use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use axum::{
    // Axum: Rust의 비동기 웹 프레임워크. Express.js와 비슷한 역할
    routing::get, // GET 메서드 라우팅 함수
    Router,       // 라우터: URL 경로와 핸들러를 연결하는 구조체
};
use config::Config; // 우리가 만든 설정 모듈
use routes::{health_check, list_recipes, AppState};
use std::path::Path; // 파일 경로를 다루는 표준 라이브러리 타입
use tower_http::{
    // tower-http: HTTP 미들웨어 모음 크레이트
    cors::{Any, CorsLayer}, // CORS(Cross-Origin Resource Sharing) 설정
    services::ServeDir,     // 정적 파일 서빙 서비스
    trace::TraceLayer,      // HTTP 요청/응답 로깅 미들웨어
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

// #[tokio::main]: 비동기 런타임을 시작하는 **어트리뷰트 매크로**
// Rust의 main() 함수는 기본적으로 동기(sync)이므로,
// async/await를 사용하려면 비동기 런타임(Tokio)이 필요합니다.
// 이 매크로가 내부적으로 tokio 런타임을 생성하고 main을 그 안에서 실행합니다.
#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일에서 환경변수를 읽어옵니다. (예: PORT, RECIPES_PATH 등)
    // .ok()는 Result를 Option으로 변환하여, .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // tracing은 Rust 생태계의 표준 로깅 프레임워크입니다.
    // registry(): 로그 수집기를 만들고
    // .with(): 필터와 포맷터를 레이어처럼 쌓아올립니다 (데코레이터 패턴)
    tracing_subscriber::registry()
        .with(
            // EnvFilter: RUST_LOG 환경변수로 로그 레벨을 제어합니다.
            // 환경변수가 없으면 기본값으로 coking, tower_http, axum 모듈을 debug 레벨로 설정
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coking=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer()) // 로그를 터미널에 출력하는 포맷터 레이어
        .init(); // 전역 로거로 등록

    // ── 3단계: 설정 로딩 ──
    // Config::from_env()로 환경변수에서 설정을 읽어옵니다.
    // 모든 설정 항목에 기본값이 있으므로 이 함수는 실패하지 않습니다.
    let config = Config::from_env();
    // tracing::info!: 정보 수준의 로그를 출력하는 매크로
    // println!과 비슷하지만, 로그 레벨/타임스탬프/소스 위치 등 메타정보가 포함됩니다.
    tracing::info!("Starting Coking server on {}:{}", config.host, config.port);

    // ── 4단계: 애플리케이션 상태(State) 생성 ──
    // AppState: 모든 라우트 핸들러가 공유하는 데이터를 담는 구조체
    // Axum에서는 State를 통해 핸들러에 의존성을 주입합니다.
    // 이 앱의 공유 상태는 레시피 파일 경로 하나뿐입니다.
    // DB 연결도, 캐시도 없습니다 — 매 요청이 파일을 새로 읽습니다.
    let state = AppState {
        recipes_path: config.recipes_path.clone(),
    };

    // ── 5단계: API 라우터 설정 ──
    // Router::new(): 빈 라우터를 생성합니다.
    // .route(): URL 패턴과 핸들러 함수를 연결합니다.
    let api_routes = Router::new()
        // 헬스체크 API (서버 상태 확인용)
        .route("/health", get(health_check))
        // 레시피 목록 API (레시피 JSON 파일을 읽어 그대로 반환)
        .route("/recipes", get(list_recipes))
        // .with_state(): 이 라우터의 모든 핸들러에서 AppState를 사용할 수 있게 합니다.
        .with_state(state);

    // ── 6단계: CORS 미들웨어 설정 ──
    // CORS: 브라우저의 보안 정책. 다른 도메인에서의 API 호출을 허용/차단합니다.
    // 개발 환경에서는 Any(모두 허용)로 설정합니다.
    // 프로덕션에서는 특정 도메인만 허용해야 합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any) // 모든 출처(origin) 허용
        .allow_methods(Any) // 모든 HTTP 메서드 허용
        .allow_headers(Any); // 모든 헤더 허용

    // ── 7단계: 프론트엔드 정적 파일 서빙 설정 ──
    // 빌드된 프론트엔드 파일이 있으면 같은 서버에서 서빙합니다.
    // 루트 경로(/)는 ServeDir가 자동으로 index.html을 돌려줍니다.
    // 파일을 찾지 못한 경로는 기본 404로 처리합니다 (SPA 폴백 없음).
    let frontend_dist = Path::new(&config.frontend_dist);
    // if-else가 표현식(expression)으로 사용됩니다.
    // Rust에서는 if-else의 결과를 변수에 바로 대입할 수 있습니다.
    let app = if frontend_dist.exists() {
        tracing::info!("Serving frontend static files from {}", config.frontend_dist);

        Router::new()
            // .nest(): API 라우트를 /api 경로 아래에 중첩시킵니다.
            // 예: /health → /api/health
            .nest("/api", api_routes)
            // .fallback_service(): API 경로에 매칭되지 않는 모든 요청은
            // 정적 파일 디렉토리에서 찾아봅니다.
            .fallback_service(ServeDir::new(frontend_dist))
            // .layer(): 미들웨어를 추가합니다. 미들웨어는 요청/응답을 가로채서 처리합니다.
            .layer(cors)
            .layer(TraceLayer::new_for_http()) // HTTP 요청/응답 자동 로깅
    } else {
        // 프론트엔드 빌드가 없으면 API만 서빙합니다.
        tracing::warn!("Frontend dist directory not found, serving API only");

        Router::new()
            .nest("/api", api_routes)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    };

    // ── 8단계: 서버 시작 ──
    // format!: 문자열 포맷팅 매크로. Python의 f-string과 비슷합니다.
    let addr = format!("{}:{}", config.host, config.port);
    // TcpListener: TCP 연결을 수신 대기하는 소켓
    // .bind(): 지정된 주소에 바인딩 (해당 포트에서 요청 대기 시작)
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // axum::serve(): Axum 서버를 시작하고 요청을 처리합니다.
    // 이 줄에서 서버가 영원히 실행됩니다 (Ctrl+C로 종료할 때까지).
    axum::serve(listener, app).await?;

    // Ok(()): 성공을 나타내는 Result 값. ()는 "빈 값"(unit 타입)입니다.
    Ok(())
}
