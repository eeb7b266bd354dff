//! # Service Registry
//!
//! 애플리케이션 컴포넌트(리포지토리, 서비스)를 시작 시 한 번 생성하고,
//! ActixWeb 앱 데이터(`web::Data`)로 등록하는 명시적 의존성 컨테이너입니다.
//!
//! ## 구성 순서
//!
//! ```text
//! Database ─┬─▶ ListRepository ─┬─▶ ListService
//!           ├─▶ NoteRepository ─┴─▶ NoteService
//!           └─▶ UserRepository ───▶ UserService ─┐
//! JwtConfig ──────────────────────▶ TokenService ┴─▶ AuthService
//! ```
//!
//! 전역 상태가 없으므로 테스트마다 독립된 인메모리 데이터베이스로 레지스트리를 만들 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let registry = ServiceRegistry::build(database, &settings.jwt, PasswordConfig::bcrypt_cost());
//! registry.print_summary();
//!
//! HttpServer::new(move || {
//!     let registry = registry.clone();
//!     App::new().configure(move |cfg| registry.register(cfg))
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::config::JwtConfig;
use crate::db::Database;
use crate::repositories::{CrudRepository, ListRepository, NoteRepository, UserRepository};
use crate::services::{AuthService, ListService, NoteService, TokenService, UserService};
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 생성된 컴포넌트 묶음
///
/// 모든 필드는 `Arc`로 공유되며, 워커마다 `clone()`해도 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct ServiceRegistry {
    pub database: Arc<Database>,
    pub list_repo: Arc<ListRepository>,
    pub note_repo: Arc<NoteRepository>,
    pub user_repo: Arc<UserRepository>,
    pub list_service: Arc<ListService>,
    pub note_service: Arc<NoteService>,
    pub user_service: Arc<UserService>,
    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
}

impl ServiceRegistry {
    /// 데이터베이스와 설정으로 모든 컴포넌트를 생성합니다.
    pub fn build(database: Database, jwt: &JwtConfig, bcrypt_cost: u32) -> Self {
        let database = Arc::new(database);

        let list_repo = Arc::new(ListRepository::new(database.clone()));
        let note_repo = Arc::new(NoteRepository::new(database.clone()));
        let user_repo = Arc::new(UserRepository::new(database.clone()));

        let list_service = Arc::new(ListService::new(list_repo.clone(), note_repo.clone()));
        let note_service = Arc::new(NoteService::new(note_repo.clone(), list_repo.clone()));
        let user_service = Arc::new(UserService::new(user_repo.clone(), bcrypt_cost));
        let token_service = Arc::new(TokenService::new(jwt.clone()));
        let auth_service = Arc::new(AuthService::new(user_service.clone(), token_service.clone()));

        Self {
            database,
            list_repo,
            note_repo,
            user_repo,
            list_service,
            note_service,
            user_service,
            token_service,
            auth_service,
        }
    }

    /// 서비스와 데이터베이스를 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(web::Data::from(self.database.clone()))
            .app_data(web::Data::from(self.list_service.clone()))
            .app_data(web::Data::from(self.note_service.clone()))
            .app_data(web::Data::from(self.user_service.clone()))
            .app_data(web::Data::from(self.token_service.clone()))
            .app_data(web::Data::from(self.auth_service.clone()));
    }

    /// 시작 시 구성 요약을 터미널에 출력합니다.
    pub fn print_summary(&self) {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let tables = [
            self.list_repo.table_name(),
            self.note_repo.table_name(),
            self.user_repo.table_name(),
        ];

        print_step_start(1, "Creating Repository instances");
        for table in tables {
            print_sub_task(table, "✓ Created");
        }
        print_step_complete(1, "Repository instances created", tables.len());

        let services = ["list", "note", "user", "token", "auth"];

        print_step_start(2, "Creating Service instances");
        for service in services {
            print_sub_task(service, "✓ Created");
        }
        print_step_complete(2, "Service instances created", services.len());

        print_final_summary(tables.len(), services.len());
    }
}
