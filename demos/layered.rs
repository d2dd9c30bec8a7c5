use serde::{Deserialize, Serialize};
use tiered_config::{record, Config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Serialize, Deserialize)]
struct AppSection {
    name: String,
    debug: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct DatabaseSection {
    host: String,
    port: u16,
    name: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct AppConfig {
    app: AppSection,
    database: DatabaseSection,
}

record! {
    AppSection { name, debug }
    DatabaseSection { host, port, name }
    AppConfig { app, database }
}

/// Usage: `layered [config.toml] [env-prefix] [dsn]`
///
/// Try `DEMO_DATABASE_PORT=6543 cargo run --example layered -- demos/default.toml DEMO`.
fn main() -> Result<(), tiered_config::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let mut builder = Config::builder();
    if let Some(path) = args.next() {
        builder = builder.with_file(path);
    }
    if let Some(prefix) = args.next() {
        builder = builder.with_env(prefix);
    }
    if let Some(dsn) = args.next() {
        builder = builder.with_dsn(dsn);
    }

    let mut config = AppConfig::default();
    builder.apply(&mut config)?;

    println!("App: {} (debug={})", config.app.name, config.app.debug);
    println!(
        "Database: {}:{}/{}",
        config.database.host, config.database.port, config.database.name
    );

    Ok(())
}
