//! Example demonstrating sequences, mappings and optional values

use envtag::EnvTag;
use std::collections::HashMap;

#[derive(Debug, Default, EnvTag)]
struct Config {
    // Comma separated: "8080,8081"
    #[env(name = "PORTS", default = "8080")]
    pub ports: Vec<u16>,

    // Comma separated key:value pairs, split on the first colon
    #[env(name = "UPSTREAMS", default = "api:http://localhost:3000")]
    pub upstreams: HashMap<String, String>,

    // Allocated even when nothing is set
    #[env(name = "RETRIES")]
    pub retries: Option<u8>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("PORTS", "8080,8081,8082");
    std::env::set_var("UPSTREAMS", "api:http://api:3000,auth:http://auth:4000");

    let config = Config::from_env()?;

    println!("Collections:");
    println!("  Ports: {:?}", config.ports);
    println!("  Upstreams: {:?}", config.upstreams);
    println!("  Retries: {:?}", config.retries);

    Ok(())
}
