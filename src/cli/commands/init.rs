use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::migrate::run_pending_migrations_verbose;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the local storage database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.api.clone(), cli.test)?;

    println!("⚙️  Initializing rTimesheet…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);
    println!("🌐 API         : {}", &cfg.api_url);

    if let Some(dir) = Path::new(&cfg.database).parent() {
        std::fs::create_dir_all(dir)?;
    }
    let pool = DbPool::new(&cfg.database)?;
    let applied = run_pending_migrations_verbose(&pool.conn)?;
    tracing::debug!(applied, "local storage migrations");

    println!("✅ Local storage initialized at {}", &cfg.database);

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        &cfg.database,
        "Local storage initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rTimesheet initialization completed!");
    Ok(())
}
