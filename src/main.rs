//! 할 일 목록 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! SQLite 연결과 마이그레이션, 서비스 레지스트리 구성 후 REST API를 제공합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use todo_service_backend::config::{PasswordConfig, Settings};
use todo_service_backend::core::errors::AppResult;
use todo_service_backend::core::registry::ServiceRegistry;
use todo_service_backend::db::Database;
use todo_service_backend::routes::configure_app;
use todo_service_backend::utils::display_terminal::print_server_info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!(
        "🚀 할 일 목록 서비스 시작중... (profile: {})",
        std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string())
    );

    let (settings, registry) = match initialize().await {
        Ok(initialized) => initialized,
        Err(e) => {
            error!("서비스 초기화 실패: {}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(settings, registry).await
}

/// 설정을 읽고 데이터베이스를 준비한 뒤 서비스 레지스트리를 구성합니다.
async fn initialize() -> AppResult<(Settings, ServiceRegistry)> {
    let settings = Settings::from_env()?;

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&settings.database).await?;
    database.migrate().await?;

    let registry = ServiceRegistry::build(database, &settings.jwt, PasswordConfig::bcrypt_cost());
    registry.print_summary();

    Ok((settings, registry))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화, Rate Limiting 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(settings: Settings, registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = settings.server.bind_address();

    print_server_info(&bind_address, &settings.database.url, settings.auth.protect_todo_routes);
    info!("📍 Health check: http://{}/health", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(settings.rate_limit.per_second)
        .burst_size(settings.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정 오류: per_second와 burst_size는 0보다 커야 합니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        settings.rate_limit.per_second,
        settings.rate_limit.burst_size
    );

    let auth_config = settings.auth.clone();

    HttpServer::new(move || {
        let registry = registry.clone();
        let auth_config = auth_config.clone();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(move |cfg| configure_app(cfg, &registry, &auth_config))
    })
    .bind(&bind_address)?
    .workers(settings.server.workers)
    .run()
    .await
}

/// `PROFILE`에 맞는 환경 파일을 로드합니다
///
/// `dev`(기본값)는 `.env.dev`, `prod`는 `.env.prod`, 그 외에는 `.env`를 읽습니다.
/// 로거 초기화 전에 호출되므로 `RUST_LOG`도 환경 파일에서 지정할 수 있습니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let loaded = match profile.as_str() {
        "dev" | "prod" => dotenv::from_filename(format!(".env.{}", profile)),
        _ => dotenv(),
    };

    // 로거가 아직 없으므로 표준 에러로 남깁니다
    if let Err(e) = loaded {
        eprintln!("[{}] 환경 파일 로드 실패, 프로세스 환경 변수만 사용합니다: {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=todo_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 프론트엔드 개발 서버와의 통신을 위한 CORS 설정
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8000")
        .allowed_origin("http://127.0.0.1:8000")
        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-api-key"),
        ])
        .supports_credentials()
        .max_age(3600)
}
