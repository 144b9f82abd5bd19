//! File-based configuration example

use envtag::EnvTag;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Debug, Default, EnvTag)]
struct Config {
    // Load from API_KEY or API_KEY_FILE
    #[env(name = "API_KEY", from_file)]
    pub api_key: String,

    // Nested secrets work the same way: DATABASE_PASSWORD or DATABASE_PASSWORD_FILE
    #[env(name = "DATABASE")]
    pub database: Database,
}

#[derive(Debug, Default, EnvTag)]
struct Database {
    #[env(name = "PASSWORD", from_file)]
    pub password: String,

    #[env(name = "HOST", default = "localhost")]
    pub host: String,
}

fn main() -> anyhow::Result<()> {
    // Save API key to file
    let mut api_key_file = NamedTempFile::new()?;
    writeln!(api_key_file, "super_secret_api_key_12345")?;

    // Save database password to file
    let mut db_password_file = NamedTempFile::new()?;
    writeln!(db_password_file, "db_password_67890")?;

    // Set environment variables (with _FILE suffix)
    std::env::set_var("API_KEY_FILE", api_key_file.path());
    std::env::set_var("DATABASE_PASSWORD_FILE", db_password_file.path());

    // Load configuration
    let config = Config::from_env()?;

    println!("Configuration loaded from files:");
    println!("  API Key: {}", config.api_key);
    println!("  Database Password: {}", config.database.password);
    println!("  Database Host: {}", config.database.host);

    Ok(())
}
