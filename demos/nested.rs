//! Example demonstrating nested structs and the skip sentinel

use envtag::EnvTag;

#[derive(Debug, Default, EnvTag)]
struct Config {
    // Fields of `database` are read from DATABASE_*
    #[env(name = "DATABASE", description = "Database settings")]
    pub database: Database,

    // No variable of its own: TLS_CERT is read under the root key
    #[env(skip)]
    pub tls: Tls,
}

#[derive(Debug, Default, EnvTag)]
struct Database {
    #[env(name = "HOST", default = "localhost")]
    pub host: String, // DATABASE_HOST

    #[env(name = "PORT", default = "5432")]
    pub port: u16, // DATABASE_PORT
}

#[derive(Debug, Default, EnvTag)]
struct Tls {
    #[env(name = "TLS_CERT")]
    pub cert: String, // TLS_CERT
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    std::env::set_var("DATABASE_HOST", "db.internal");
    std::env::set_var("TLS_CERT", "/etc/tls/cert.pem");

    let config = Config::from_env()?;

    println!("Nested configuration:");
    println!("  Database: {}:{}", config.database.host, config.database.port);
    println!("  TLS cert: {}", config.tls.cert);

    Ok(())
}
