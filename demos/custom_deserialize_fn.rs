//! Example demonstrating custom deserializer functions

use envtag::EnvTag;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
struct Database {
    pub host: String,
    pub port: u16,
}

fn parse_scopes(s: &str) -> Result<Vec<String>, String> {
    let scopes: Vec<String> = s.split_whitespace().map(str::to_string).collect();
    if scopes.is_empty() {
        return Err("at least one scope is required".to_string());
    }
    Ok(scopes)
}

#[derive(Debug, Default, EnvTag)]
struct Config {
    // Parsed as JSON instead of `key:value` pairs
    #[env(name = "DATABASE", deserializer = "serde_json::from_str")]
    pub database: Database,

    // Space separated instead of comma separated
    #[env(name = "SCOPES", default = "read", deserializer = "parse_scopes")]
    pub scopes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("DATABASE", r#"{"host":"localhost","port":5432}"#);
    std::env::set_var("SCOPES", "read write admin");

    let config = Config::from_env()?;

    println!("Configuration with custom deserializers:");
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  Scopes: {:?}", config.scopes);

    Ok(())
}
