use crate::types::manifest::Manifest;

/// Fields that survive into the published master list.
pub const TRIMMED_KEYS: [&str; 14] = [
    "Author",
    "Name",
    "Punchline",
    "Description",
    "Changelog",
    "InternalName",
    "AssemblyVersion",
    "RepoUrl",
    "ApplicableVersion",
    "Tags",
    "CategoryTags",
    "DalamudApiLevel",
    "IconUrl",
    "ImageUrls",
];

pub fn trim_manifest(manifest: &Manifest) -> Manifest {
    manifest
        .iter()
        .filter(|(k, _)| TRIMMED_KEYS.contains(&k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn manifest(v: Value) -> Manifest {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn drops_unknown_keys() {
        let m = manifest(json!({
            "Author": "X",
            "Name": "Y",
            "InternalName": "Foo",
            "AssemblyVersion": "1.0",
            "LastUpdate": "123",
            "DownloadCount": 99,
            "IsHide": true,
            "Secret": { "nested": 1 }
        }));

        let trimmed = trim_manifest(&m);
        assert_eq!(
            Value::Object(trimmed),
            json!({
                "Author": "X",
                "Name": "Y",
                "InternalName": "Foo",
                "AssemblyVersion": "1.0"
            })
        );
    }

    #[test]
    fn does_not_fill_missing_keys() {
        let trimmed = trim_manifest(&manifest(json!({ "Name": "Y" })));
        assert_eq!(trimmed.len(), 1);
        assert!(!trimmed.contains_key("RepoUrl"));
    }

    #[test]
    fn trimming_is_idempotent() {
        let m = manifest(json!({
            "Tags": ["a", "b"],
            "IconUrl": "https://example.com/icon.png",
            "Extra": null,
            "DalamudApiLevel": 9
        }));
        let once = trim_manifest(&m);
        let twice = trim_manifest(&once);
        assert_eq!(once, twice);
        assert!(once.keys().all(|k| TRIMMED_KEYS.contains(&k.as_str())));
    }
}
