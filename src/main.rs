use meta::manager::{DepartmentManager, EmployeeManager, PersistenceManager};
use mimalloc::MiMalloc;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = meta::config::Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        fixture_path = %cfg
            .fixture_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string()),
        loglevel = %cfg.loglevel
    );

    let pool = meta::db::connect(&cfg.database_url).await?;
    meta::db::init_schema(&pool).await?;

    if let Some(path) = cfg.fixture_path.as_ref() {
        let script = std::fs::read_to_string(path)?;
        meta::db::execute_script(&pool, &script).await?;
        info!(path = %path.display(), "fixture script applied");
    }

    let departments = DepartmentManager::new(pool.clone()).get_all().await?;
    let employees = EmployeeManager::new(pool.clone()).get_all().await?;
    info!(
        departments = departments.len(),
        employees = employees.len(),
        "database loaded"
    );

    let report = json!({
        "departments": departments,
        "employees": employees,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    pool.close().await;
    Ok(())
}
