//! Basic usage example

use envtag::EnvTag;

#[derive(Debug, Default, EnvTag)]
struct Config {
    #[env(name = "DATABASE_URL", description = "database connection string")]
    pub database_url: String,

    #[env(name = "MAX_CONNECTIONS", default = "10")]
    pub max_connections: u32,

    #[env(name = "DEBUG", default = "false")]
    pub debug: bool,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("DEBUG", "t");

    let config = Config::from_env()?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug: {}", config.debug);

    Ok(())
}
