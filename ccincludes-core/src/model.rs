use crate::error::BuildError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One navigation menu record as served by the `ccnavigation-*` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    #[serde(rename = "ID")]
    pub id: i64,
    pub title: String,
    pub url: String,
    /// Any other fields WordPress sends along, kept for templates
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl MenuEntry {
    pub fn new(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Asset identifier to URL mapping from the `cc-wpscripts` / `cc-wpstyles` endpoints.
///
/// Keeps the order the API sent for debug tables and rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetMap(IndexMap<String, String>);

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; a replaced key keeps its original position.
    pub fn insert(&mut self, id: impl Into<String>, url: impl Into<String>) {
        self.0.insert(id.into(), url.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(id, url)| (id.as_str(), url.as_str()))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.0.iter_mut().map(|(id, url)| (id.as_str(), url))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, url)| (id.into(), url.into())).collect())
    }
}

/// Which of the two parallel renderings a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// URLs left absolute
    Full,
    /// URLs rewritten to site-relative paths
    Path,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Path => "path",
        }
    }

    /// Output directory for fragments of this variant.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Variant::Full => "includes_full",
            Variant::Path => "includes_path",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Variant::Full),
            "path" => Ok(Variant::Path),
            other => Err(BuildError::UnknownVariant(other.to_string())),
        }
    }
}

/// Data handed to a template: the records plus the prefix their URLs are relative to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Payload<T> {
    #[serde(skip)]
    pub variant: Variant,
    pub prefix: String,
    pub json: T,
}

/// The `full` and `path` payloads produced from a single fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPair<T> {
    pub full: Payload<T>,
    pub path: Payload<T>,
}

impl<T> VariantPair<T> {
    /// Full first, then path.
    pub fn iter(&self) -> impl Iterator<Item = &Payload<T>> {
        [&self.full, &self.path].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_entry_reads_wordpress_id() {
        let entry: MenuEntry = serde_json::from_value(serde_json::json!({
            "ID": 7,
            "title": "Licenses",
            "url": "https://creativecommons.org/licenses/",
            "target": "_blank"
        }))
        .unwrap();

        assert_eq!(entry.id, 7);
        assert_eq!(entry.title, "Licenses");
        assert_eq!(entry.extra.get("target"), Some(&serde_json::json!("_blank")));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back["ID"], 7);
        assert_eq!(back["target"], "_blank");
    }

    #[test]
    fn test_asset_map_preserves_order() {
        let map: AssetMap = serde_json::from_str(
            r#"{"zeta": "https://a/z.js", "alpha": "https://a/a.js", "mid": "https://a/m.js"}"#,
        )
        .unwrap();

        let ids: Vec<&str> = map.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"zeta":"https://a/z.js","alpha":"https://a/a.js","mid":"https://a/m.js"}"#
        );
    }

    #[test]
    fn test_asset_map_insert_replaces_in_place() {
        let mut map: AssetMap = [("a", "1"), ("b", "2")].into_iter().collect();
        map.insert("a", "3");
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next(), Some(("a", "3")));
        assert_eq!(map.get("b"), Some("2"));
        assert_eq!(map.get("c"), None);
    }

    #[test]
    fn test_asset_map_rejects_non_string_urls() {
        let result: Result<AssetMap, _> = serde_json::from_str(r#"{"a": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_variant_tags() {
        assert_eq!("full".parse::<Variant>().unwrap(), Variant::Full);
        assert_eq!("path".parse::<Variant>().unwrap(), Variant::Path);
        assert_eq!(Variant::Full.dir_name(), "includes_full");
        assert_eq!(Variant::Path.dir_name(), "includes_path");
    }

    #[test]
    fn test_unknown_variant_is_configuration_error() {
        let err = "relative".parse::<Variant>().unwrap_err();
        assert!(matches!(err, BuildError::UnknownVariant(ref tag) if tag == "relative"));
    }

    #[test]
    fn test_payload_serializes_prefix_and_json_only() {
        let payload = Payload {
            variant: Variant::Path,
            prefix: String::new(),
            json: vec![1, 2],
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({"prefix": "", "json": [1, 2]})
        );
    }
}
