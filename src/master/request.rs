use crate::{types::manifest::ReleaseInfo, utils::api::user_agent};

pub fn build_http_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .user_agent(user_agent())
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

pub fn release_tag_url(api_base_url: &str, owner: &str, repo: &str, version: &str) -> String {
    format!(
        "{}/repos/{}/{}/releases/tags/v{}",
        api_base_url.trim_end_matches('/'),
        owner,
        repo,
        version
    )
}

/// Sums the download counts of every asset attached to release `v<version>`.
pub async fn get_release_download_count(
    client: &reqwest::Client,
    url: &str,
) -> Result<u64, String> {
    let response = match client
        .get(url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            return Err(format!("Failed to send request: {}", e));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(format!("Release lookup returned status {}", status));
    }

    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))?;

    let release: ReleaseInfo = serde_json::from_str(&body)
        .map_err(|e| format!("Failed to parse release response: {}", e))?;

    Ok(release.total_downloads())
}
