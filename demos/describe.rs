//! Example printing documentation for every variable a config reads

use envtag::EnvTag;
use std::collections::HashMap;

#[derive(Debug, Default, EnvTag)]
#[env(prefix = "APP")]
struct Config {
    #[env(name = "PORT", default = "8080", description = "listen port")]
    pub port: u16,

    #[env(name = "ORIGINS", description = "allowed CORS origins")]
    pub origins: Vec<String>,

    #[env(name = "LIMITS", default = "default:100")]
    pub limits: HashMap<String, u32>,

    #[env(name = "CACHE", description = "Cache settings")]
    pub cache: Cache,

    // Left out of the documentation
    #[env(skip)]
    pub internal: Internal,
}

#[derive(Debug, Default, EnvTag)]
struct Cache {
    #[env(name = "URL", description = "redis url")]
    pub url: String,

    #[env(name = "TTL", default = "60")]
    pub ttl: u64,
}

#[derive(Debug, Default, EnvTag)]
struct Internal {
    #[env(name = "TRACE_SAMPLE_RATE", default = "0.1")]
    pub trace_sample_rate: f64,
}

fn main() -> anyhow::Result<()> {
    // APP_PORT - listen port (default: 8080)
    // APP_ORIGINS - allowed CORS origins
    // APP_LIMITS - (default: default:100)
    // Cache settings
    // APP_CACHE_URL - redis url
    // APP_CACHE_TTL - (default: 60)
    println!("{}", Config::describe_env()?);

    Ok(())
}
