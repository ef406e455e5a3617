pub const API_URL_ENV: &str = "PLUGINMASTER_GITHUB_API_URL";

pub fn get_release_api_base_url() -> String {
    std::env::var(API_URL_ENV)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "https://api.github.com".to_string())
}

pub fn user_agent() -> String {
    format!("pluginmaster/{}", env!("CARGO_PKG_VERSION"))
}
