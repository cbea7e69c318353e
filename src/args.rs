use clap::Parser;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// Checks that need more than one argument at a time.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the fetch timeout is longer than the cache lifetime
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs > self.cache_ttl_secs {
            return Err(format!(
                "fetch timeout ({}s) must not exceed the cache ttl ({}s).",
                self.fetch_timeout_secs, self.cache_ttl_secs
            ));
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let nonce_secret = args
            .nonce_secret
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(startup_secret);
        CleanArgs {
            bind: args.bind,
            port: args.port,
            api_url: args.api_url,
            cache_ttl_seconds: args.cache_ttl_secs,
            fetch_timeout: Duration::from_secs(args.fetch_timeout_secs),
            nonce_secret,
            accept_invalid_certs: args.accept_invalid_certs,
            static_dir: args.static_dir,
            title: args.title,
            timezone: args.timezone,
        }
    }
}

// Tokens issued before a restart stop validating, like a rotated salt.
fn startup_secret() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    sha256::digest(format!("{}-{nanos}", std::process::id()))
}
