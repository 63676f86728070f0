//! Build-time Configuration
//!
//! Values are baked in with `option_env!` since a CSR bundle has no runtime
//! environment to read from.

/// API origin used when `COOKFARM_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

pub fn api_base() -> &'static str {
    option_env!("COOKFARM_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Console log level from `COOKFARM_LOG`, default `info`
pub fn log_level() -> log::Level {
    parse_level(option_env!("COOKFARM_LOG").unwrap_or("info"))
}

fn parse_level(raw: &str) -> log::Level {
    raw.trim().parse().unwrap_or(log::Level::Info)
}

/// Join an API path onto a base origin
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Absolute URL for an API path
pub fn api_url(path: &str) -> String {
    join_url(api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8080/", "/api/users/login"),
            "http://localhost:8080/api/users/login"
        );
        assert_eq!(join_url("https://x.dev", "api/ingredients/3"), "https://x.dev/api/ingredients/3");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), log::Level::Debug);
        assert_eq!(parse_level(" WARN "), log::Level::Warn);
        assert_eq!(parse_level("nonsense"), log::Level::Info);
    }
}
