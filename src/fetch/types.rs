//! Upstream descriptors and the normalized package records built from them

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::SNAPSHOT_MARKER;

/// Body of a list endpoint: either the expected array or anything else
/// (typically an error object such as `{"message": "Bad credentials"}`).
///
/// Elements stay untyped here so that one malformed entry cannot reject
/// the whole list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiListResponse {
    List(Vec<Value>),
    Other(Value),
}

/// Reads a string field, treating null or any non-string value as missing.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Package entry as returned by `GET /users/{owner}/packages`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawPackage {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub package_type: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub html_url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
}

/// Version entry as returned by `GET /users/{owner}/packages/{type}/{name}/versions`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RawVersion {
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub html_url: Option<String>,
}

/// A published package with all of its listed versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub package_type: String,
    pub html_url: String,
    pub created_at: String,
    pub updated_at: String,
    /// In the order the API listed them, not necessarily chronological
    pub versions: Vec<PackageVersion>,
}

impl Package {
    /// Normalizes a raw descriptor, filling missing fields with defaults.
    ///
    /// A missing package type becomes `default_type`, every other missing
    /// field becomes an empty string.
    pub fn from_raw(raw: RawPackage, versions: Vec<RawVersion>, default_type: &str) -> Self {
        Self {
            name: raw.name.unwrap_or_default(),
            package_type: raw
                .package_type
                .unwrap_or_else(|| default_type.to_string()),
            html_url: raw.html_url.unwrap_or_default(),
            created_at: raw.created_at.unwrap_or_default(),
            updated_at: raw.updated_at.unwrap_or_default(),
            versions: versions.into_iter().map(PackageVersion::from).collect(),
        }
    }
}

/// One published version of a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageVersion {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
    pub html_url: String,
    /// Derived from `name`; the page's badge is read from this field
    pub channel: VersionChannel,
}

impl PackageVersion {
    pub fn new(name: &str, created_at: &str, updated_at: &str, html_url: &str) -> Self {
        Self {
            name: name.to_string(),
            created_at: created_at.to_string(),
            updated_at: updated_at.to_string(),
            html_url: html_url.to_string(),
            channel: VersionChannel::of(name),
        }
    }
}

impl From<RawVersion> for PackageVersion {
    fn from(raw: RawVersion) -> Self {
        let name = raw.name.unwrap_or_default();
        Self {
            channel: VersionChannel::of(&name),
            name,
            created_at: raw.created_at.unwrap_or_default(),
            updated_at: raw.updated_at.unwrap_or_default(),
            html_url: raw.html_url.unwrap_or_default(),
        }
    }
}

/// Whether a version is a pre-release or a final release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionChannel {
    Snapshot,
    Release,
}

impl VersionChannel {
    /// Classifies a version name by the presence of the snapshot marker
    pub fn of(version_name: &str) -> Self {
        if version_name.contains(SNAPSHOT_MARKER) {
            Self::Snapshot
        } else {
            Self::Release
        }
    }
}

/// Total number of versions across all packages
pub fn total_versions(packages: &[Package]) -> usize {
    packages.iter().map(|p| p.versions.len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.0.0-SNAPSHOT", VersionChannel::Snapshot)]
    #[case("3.13-SNAPSHOT", VersionChannel::Snapshot)]
    #[case("1.0.0-SNAPSHOT-20240101", VersionChannel::Snapshot)]
    #[case("1.0.0", VersionChannel::Release)]
    #[case("1.0.0-snapshot", VersionChannel::Release)]
    #[case("", VersionChannel::Release)]
    fn version_channel_of_checks_marker_case_sensitively(
        #[case] name: &str,
        #[case] expected: VersionChannel,
    ) {
        assert_eq!(VersionChannel::of(name), expected);
    }

    #[test]
    fn api_list_response_parses_array_as_list() {
        let body = r#"[{"name": "com.acme.core", "package_type": "maven"}, {}, "junk"]"#;

        let parsed: ApiListResponse = serde_json::from_str(body).unwrap();

        let ApiListResponse::List(items) = parsed else {
            panic!("expected a list");
        };
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn api_list_response_parses_error_object_as_other() {
        let body = r#"{"message": "Bad credentials", "status": "401"}"#;

        let parsed: ApiListResponse = serde_json::from_str(body).unwrap();

        assert!(matches!(parsed, ApiListResponse::Other(_)));
    }

    #[test]
    fn raw_package_tolerates_null_fields() {
        let raw: RawPackage =
            serde_json::from_str(r#"{"name": "a", "html_url": null, "owner": {"login": "x"}}"#)
                .unwrap();

        assert_eq!(raw.name.as_deref(), Some("a"));
        assert_eq!(raw.html_url, None);
    }

    #[test]
    fn raw_package_treats_wrong_typed_fields_as_missing() {
        let raw: RawPackage = serde_json::from_str(
            r#"{"name": "other", "html_url": 42, "created_at": ["x"], "updated_at": {"a": 1}}"#,
        )
        .unwrap();

        assert_eq!(
            raw,
            RawPackage {
                name: Some("other".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn raw_version_treats_wrong_typed_name_as_missing() {
        let raw: RawVersion =
            serde_json::from_str(r#"{"name": 7, "updated_at": "2024-01-01T00:00:00Z"}"#).unwrap();

        assert_eq!(raw.name, None);
        assert_eq!(raw.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn package_version_carries_channel_into_serialized_data() {
        let snapshot = PackageVersion::new("2.0.0-SNAPSHOT", "", "", "");
        let release = PackageVersion::from(RawVersion {
            name: Some("1.0.0".to_string()),
            ..Default::default()
        });

        let json = serde_json::to_value(vec![snapshot, release]).unwrap();

        assert_eq!(json[0]["channel"], "snapshot");
        assert_eq!(json[1]["channel"], "release");
    }

    #[test]
    fn package_from_raw_fills_missing_fields_with_defaults() {
        let raw = RawPackage {
            name: Some("com.acme.widgets".to_string()),
            ..Default::default()
        };
        let versions = vec![RawVersion {
            name: Some("1.0.0".to_string()),
            ..Default::default()
        }];

        let package = Package::from_raw(raw, versions, "maven");

        assert_eq!(
            package,
            Package {
                name: "com.acme.widgets".to_string(),
                package_type: "maven".to_string(),
                html_url: String::new(),
                created_at: String::new(),
                updated_at: String::new(),
                versions: vec![PackageVersion::new("1.0.0", "", "", "")],
            }
        );
    }

    #[test]
    fn package_from_raw_keeps_version_order() {
        let versions = ["1.0.0", "3.0.0", "2.0.0"]
            .into_iter()
            .map(|name| RawVersion {
                name: Some(name.to_string()),
                ..Default::default()
            })
            .collect();

        let package = Package::from_raw(RawPackage::default(), versions, "maven");

        let names: Vec<&str> = package.versions.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["1.0.0", "3.0.0", "2.0.0"]);
    }

    #[test]
    fn total_versions_sums_all_packages() {
        let package = |n: usize| Package {
            name: String::new(),
            package_type: "maven".to_string(),
            html_url: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
            versions: (0..n)
                .map(|i| PackageVersion::from(RawVersion {
                    name: Some(i.to_string()),
                    ..Default::default()
                }))
                .collect(),
        };

        assert_eq!(total_versions(&[]), 0);
        assert_eq!(total_versions(&[package(2), package(0), package(3)]), 5);
    }
}
