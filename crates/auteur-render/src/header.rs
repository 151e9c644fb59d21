//! Structured header decoded from frontmatter.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Placement controls attached to a documentation fragment.
///
/// All fields are optional in the source YAML or TOML. Keys other than the known
/// ones are kept in [`extra`](Self::extra).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Header {
    /// Slash-separated target path in the site tree.
    pub path: String,
    /// Title overriding the one derived from the source file.
    pub title: String,
    /// Sort key among siblings.
    pub order: i64,
    /// Drop the fragment entirely.
    pub ignore: bool,
    /// Unrecognized keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Header {
    /// Decode a header from YAML text.
    ///
    /// Blank input yields the default header.
    pub(crate) fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let trimmed = yaml.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(trimmed)
    }

    /// Decode a header from TOML text.
    ///
    /// Blank input yields the default header.
    pub(crate) fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        toml::from_str(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_from_yaml_known_fields() {
        let header =
            Header::from_yaml("path: guides/setup\ntitle: Setup\norder: -4\nignore: true").unwrap();
        assert_eq!(header.path, "guides/setup");
        assert_eq!(header.title, "Setup");
        assert_eq!(header.order, -4);
        assert!(header.ignore);
        assert!(header.extra.is_empty());
    }

    #[test]
    fn test_from_yaml_defaults() {
        let header = Header::from_yaml("title: Only Title").unwrap();
        assert_eq!(header.path, "");
        assert_eq!(header.order, 0);
        assert!(!header.ignore);
    }

    #[test]
    fn test_from_yaml_blank() {
        assert_eq!(Header::from_yaml("  \n").unwrap(), Header::default());
    }

    #[test]
    fn test_from_yaml_keeps_unknown_keys() {
        let header = Header::from_yaml("title: A\nauthor: Jane\ntags: [x, y]").unwrap();
        assert_eq!(header.title, "A");
        assert_eq!(
            header.extra.get("author"),
            Some(&serde_yaml::Value::String("Jane".to_owned()))
        );
        assert!(header.extra.contains_key("tags"));
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(Header::from_yaml("title: [unclosed").is_err());
    }

    #[test]
    fn test_from_toml_known_fields() {
        let text = "path = \"guides/setup\"\n\
                    title = \"Setup\"\n\
                    order = 2\n\
                    ignore = true\n\
                    author = \"Jane\"";
        let header = Header::from_toml(text).unwrap();
        assert_eq!(header.path, "guides/setup");
        assert_eq!(header.title, "Setup");
        assert_eq!(header.order, 2);
        assert!(header.ignore);
        assert_eq!(
            header.extra.get("author"),
            Some(&serde_yaml::Value::String("Jane".to_owned()))
        );
    }

    #[test]
    fn test_from_toml_blank() {
        assert_eq!(Header::from_toml("\n").unwrap(), Header::default());
    }

    #[test]
    fn test_from_toml_invalid() {
        assert!(Header::from_toml("title = ").is_err());
    }

    #[test]
    fn test_from_yaml_wrong_type() {
        assert!(Header::from_yaml("order: first").is_err());
    }
}
