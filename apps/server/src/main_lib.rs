use std::sync::Arc;
use std::time::Duration;

use crate::{auth::AuthManager, config::Config};
use stakebook_core::{
    bankrolls::{BankrollService, BankrollServiceTrait},
    ledger::{LedgerService, LedgerServiceTrait},
    queries::{QueryService, QueryServiceTrait},
    wagers::{WagerService, WagerServiceTrait},
};
use stakebook_storage_sqlite::{
    db, BankrollRepository, LedgerRepository, QueryRepository, WagerRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Lifetime of tokens signed by [`AuthManager::issue_token`].
const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

pub struct AppState {
    pub bankroll_service: Arc<dyn BankrollServiceTrait>,
    pub wager_service: Arc<dyn WagerServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
    pub query_service: Arc<dyn QueryServiceTrait>,
    pub auth: Arc<AuthManager>,
}

pub fn init_tracing() {
    let log_format = std::env::var("SB_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let bankroll_repo = Arc::new(BankrollRepository::new(pool.clone(), writer.clone()));
    let wager_repo = Arc::new(WagerRepository::new(pool.clone(), writer.clone()));
    let ledger_repo = Arc::new(LedgerRepository::new(pool.clone(), writer));
    let query_repo = Arc::new(QueryRepository::new(pool));

    Ok(Arc::new(AppState {
        bankroll_service: Arc::new(BankrollService::new(bankroll_repo)),
        wager_service: Arc::new(WagerService::new(wager_repo)),
        ledger_service: Arc::new(LedgerService::new(ledger_repo)),
        query_service: Arc::new(QueryService::new(query_repo)),
        auth: Arc::new(AuthManager::new(&config.jwt_secret, TOKEN_TTL)),
    }))
}
