//! Example demonstrating a type that parses its own value

use envtag::{BoxError, EnvTag, UnmarshalText};
use std::time::Duration;

#[derive(Debug, Default, EnvTag)]
#[env(text)]
struct Timeout(Duration);

impl UnmarshalText for Timeout {
    fn unmarshal_text(&mut self, raw: &str) -> Result<(), BoxError> {
        let secs = raw
            .strip_suffix('s')
            .ok_or("expected a value like `30s`")?
            .parse()?;
        self.0 = Duration::from_secs(secs);
        Ok(())
    }
}

#[derive(Debug, Default, EnvTag)]
struct Config {
    #[env(name = "REQUEST_TIMEOUT", default = "30s", description = "per-request timeout")]
    pub request_timeout: Option<Timeout>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("REQUEST_TIMEOUT", "5s");

    let config = Config::from_env()?;
    println!("Request timeout: {:?}", config.request_timeout);

    std::env::set_var("REQUEST_TIMEOUT", "five seconds");
    match Config::from_env() {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("Rejected: {e}"),
    }

    Ok(())
}
