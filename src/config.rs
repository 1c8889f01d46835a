use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub marketplace_api_url: String,
    pub upstream_timeout_secs: u64,
    pub toast_ttl_secs: i64,
    pub sweep_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            marketplace_api_url: env::var("MARKETPLACE_API_URL").expect("MARKETPLACE_API_URL must be set"),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()).parse().expect("UPSTREAM_TIMEOUT_SECS must be a number"),
            toast_ttl_secs: env::var("TOAST_TTL_SECS").unwrap_or_else(|_| "3".to_string()).parse().expect("TOAST_TTL_SECS must be a number"),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS").unwrap_or_else(|_| "5".to_string()).parse().expect("SWEEP_INTERVAL_SECS must be a number"),
        }
    }
}
