//! Example demonstrating prefix attribute

use envtag::EnvTag;

#[derive(Debug, Default, EnvTag)]
#[env(prefix = "MYAPP")]
struct Config {
    // Environment variables will be prefixed: MYAPP_DATABASE_URL, MYAPP_PORT, etc.
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    #[env(name = "PORT", default = "8080")]
    pub port: u16,
}

fn main() -> anyhow::Result<()> {
    // Set environment variables with prefix
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_PORT", "3000");

    let config = Config::from_env()?;

    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);

    Ok(())
}
