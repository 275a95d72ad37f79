use std::{env, time::Duration};

// Runtime/server settings sourced from the environment.

pub fn http_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(3000)
}

pub fn platform_api_url() -> String {
    env::var("PLATFORM_API_URL").unwrap_or_else(|_| "http://127.0.0.1:3100".to_string())
}

pub fn platform_api_token() -> Option<String> {
    env::var("PLATFORM_API_TOKEN").ok()
}

pub fn attach_timeout() -> Duration {
    let millis = env::var("ATTACH_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(5000);
    Duration::from_millis(millis)
}
