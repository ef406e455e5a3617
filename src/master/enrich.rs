use crate::{
    master::request::{get_release_download_count, release_tag_url},
    types::manifest::{
        ASSEMBLY_VERSION, AUTHOR, DOWNLOAD_COUNT, DOWNLOAD_LINK_INSTALL, DOWNLOAD_LINK_TESTING,
        DOWNLOAD_LINK_UPDATE, INTERNAL_NAME, Manifest, MasterEntry, NAME, REPO_URL,
    },
    utils::logger::{LogLevel, Logger},
};
use serde_json::Value;

/// Values filled in only when the manifest does not set the key at all.
pub fn defaults() -> [(&'static str, Value); 3] {
    [
        ("IsHide", Value::Bool(false)),
        ("IsTestingExclusive", Value::Bool(false)),
        ("ApplicableVersion", Value::String("any".to_string())),
    ]
}

/// Renders a manifest field for use inside a URL.
pub fn render_field(manifest: &Manifest, key: &str) -> String {
    match manifest.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

pub fn resolve_repo_url(manifest: &Manifest) -> String {
    match manifest.get(REPO_URL) {
        Some(Value::String(url)) if !url.is_empty() => url.clone(),
        _ => format!(
            "https://github.com/{}/{}",
            render_field(manifest, AUTHOR),
            render_field(manifest, NAME)
        ),
    }
}

pub fn download_link(repo_url: &str, version: &str) -> String {
    format!("{}/releases/download/v{}/latest.zip", repo_url, version)
}

/// Adds the derived fields to a trimmed manifest.
pub fn add_extra_fields(mut manifest: Manifest, download_count: u64) -> MasterEntry {
    let repo_url = resolve_repo_url(&manifest);
    let link = download_link(&repo_url, &render_field(&manifest, ASSEMBLY_VERSION));

    manifest.insert(REPO_URL.to_string(), Value::String(repo_url));
    for key in [
        DOWNLOAD_LINK_INSTALL,
        DOWNLOAD_LINK_TESTING,
        DOWNLOAD_LINK_UPDATE,
    ] {
        manifest.insert(key.to_string(), Value::String(link.clone()));
    }

    for (key, value) in defaults() {
        if !manifest.contains_key(key) {
            manifest.insert(key.to_string(), value);
        }
    }

    manifest.insert(DOWNLOAD_COUNT.to_string(), Value::from(download_count));

    MasterEntry::new(manifest)
}

#[derive(Debug, Clone)]
pub struct EnrichedEntry {
    pub entry: MasterEntry,
    pub lookup_failed: bool,
}

/// Shared, read-only state for enriching manifests concurrently.
pub struct Enricher {
    client: reqwest::Client,
    api_base_url: String,
    owner: String,
    logger: Logger,
}

impl Enricher {
    pub fn new(client: reqwest::Client, api_base_url: &str, owner: &str, logger: Logger) -> Self {
        Enricher {
            client,
            api_base_url: api_base_url.to_string(),
            owner: owner.to_string(),
            logger,
        }
    }

    /// Looks up the download count, falling back to zero on any failure.
    pub async fn download_count_or_zero(&self, manifest: &Manifest) -> (u64, bool) {
        let url = release_tag_url(
            &self.api_base_url,
            &self.owner,
            &render_field(manifest, INTERNAL_NAME),
            &render_field(manifest, ASSEMBLY_VERSION),
        );

        match get_release_download_count(&self.client, &url).await {
            Ok(count) => {
                self.logger
                    .log_message(LogLevel::Debug, &format!("{} -> {} downloads", url, count));
                (count, false)
            }
            Err(e) => {
                self.logger.log_message_with_trace(
                    LogLevel::Error,
                    &format!("Failed processing {}", url),
                    vec![e.as_str()],
                );
                (0, true)
            }
        }
    }

    pub async fn enrich(&self, manifest: Manifest) -> EnrichedEntry {
        let (count, lookup_failed) = self.download_count_or_zero(&manifest).await;
        EnrichedEntry {
            entry: add_extra_fields(manifest, count),
            lookup_failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::request::build_http_client;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn manifest(v: Value) -> Manifest {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn builds_repo_url_and_links_from_author_and_name() {
        let entry = add_extra_fields(
            manifest(json!({
                "InternalName": "Foo",
                "AssemblyVersion": "1.0",
                "Author": "X",
                "Name": "Y"
            })),
            0,
        );

        let link = "https://github.com/X/Y/releases/download/v1.0/latest.zip";
        assert_eq!(entry.get("RepoUrl"), Some(&json!("https://github.com/X/Y")));
        assert_eq!(entry.get("DownloadLinkInstall"), Some(&json!(link)));
        assert_eq!(entry.get("DownloadLinkTesting"), Some(&json!(link)));
        assert_eq!(entry.get("DownloadLinkUpdate"), Some(&json!(link)));
        assert_eq!(entry.get("DownloadCount"), Some(&json!(0)));
        assert_eq!(entry.get("IsHide"), Some(&json!(false)));
        assert_eq!(entry.get("IsTestingExclusive"), Some(&json!(false)));
        assert_eq!(entry.get("ApplicableVersion"), Some(&json!("any")));
        assert!(entry.last_update().is_none());
    }

    #[test]
    fn keeps_explicit_repo_url() {
        let entry = add_extra_fields(
            manifest(json!({
                "AssemblyVersion": "2.1.0",
                "Author": "X",
                "Name": "Y",
                "RepoUrl": "https://git.example.com/team/plugin"
            })),
            5,
        );
        assert_eq!(
            entry.get("DownloadLinkInstall"),
            Some(&json!(
                "https://git.example.com/team/plugin/releases/download/v2.1.0/latest.zip"
            ))
        );
        assert_eq!(entry.download_count(), 5);
    }

    #[test]
    fn empty_repo_url_falls_back() {
        let m = manifest(json!({ "Author": "X", "Name": "Y", "RepoUrl": "" }));
        assert_eq!(resolve_repo_url(&m), "https://github.com/X/Y");
    }

    #[test]
    fn defaults_never_override_present_keys() {
        let entry = add_extra_fields(
            manifest(json!({
                "ApplicableVersion": "",
                "IsHide": false,
                "IsTestingExclusive": true
            })),
            0,
        );
        assert_eq!(entry.get("ApplicableVersion"), Some(&json!("")));
        assert_eq!(entry.get("IsHide"), Some(&json!(false)));
        assert_eq!(entry.get("IsTestingExclusive"), Some(&json!(true)));
    }

    #[test]
    fn renders_non_string_fields() {
        let m = manifest(json!({ "AssemblyVersion": 3, "Name": null }));
        assert_eq!(render_field(&m, "AssemblyVersion"), "3");
        assert_eq!(render_field(&m, "Name"), "");
        assert_eq!(render_field(&m, "Author"), "");
    }

    #[tokio::test]
    async fn failed_lookup_still_produces_entry() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/ReiwaTech/Foo/releases/tags/v1.0")
            .with_status(500)
            .create_async()
            .await;

        let enricher = Enricher::new(
            build_http_client().unwrap(),
            &server.url(),
            "ReiwaTech",
            Logger::default(),
        );
        let enriched = enricher
            .enrich(manifest(json!({
                "InternalName": "Foo",
                "AssemblyVersion": "1.0",
                "Author": "X",
                "Name": "Y"
            })))
            .await;

        assert!(enriched.lookup_failed);
        assert_eq!(enriched.entry.download_count(), 0);
        assert_eq!(enriched.entry.label(), "Foo");
    }

    #[tokio::test]
    async fn successful_lookup_sets_download_count() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/Owner/Foo/releases/tags/v1.0")
            .with_status(200)
            .with_body(r#"{"assets":[{"download_count":10},{"download_count":32}]}"#)
            .create_async()
            .await;

        let enricher = Enricher::new(
            build_http_client().unwrap(),
            &server.url(),
            "Owner",
            Logger::default(),
        );
        let enriched = enricher
            .enrich(manifest(json!({ "InternalName": "Foo", "AssemblyVersion": "1.0" })))
            .await;

        assert!(!enriched.lookup_failed);
        assert_eq!(enriched.entry.download_count(), 42);
    }
}
