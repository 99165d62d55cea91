//! Front matter extraction and decoding.
//!
//! Two block styles are recognized at the very start of a document:
//!
//! ```text
//! ---                         +++
//! title: Hello                title = "Hello"
//! date: 2024-08-10            date = 2024-08-10
//! ---                         +++
//! body...                     body...
//! ```
//!
//! Both decode into the same [`RawFrontMatter`] shape.

use super::error::ParseError;
use crate::utils::date::stringify_toml_datetimes;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Front matter block syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `---` delimited YAML
    Yaml,
    /// `+++` delimited TOML
    Toml,
}

impl Format {
    const fn delimiter(self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }

    fn from_delimiter(line: &str) -> Option<Self> {
        match line {
            "---" => Some(Self::Yaml),
            "+++" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// A document split into its metadata block and body.
#[derive(Debug, PartialEq, Eq)]
pub struct Split<'a> {
    pub format: Format,
    pub metadata: &'a str,
    pub body: &'a str,
}

/// A single tag as written. Bare numbers and booleans are read as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl TagValue {
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

/// Tags may be written as a list or as a single value.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagList {
    One(TagValue),
    Many(Vec<TagValue>),
}

impl Default for TagList {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl TagList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(tag) => vec![tag.into_text()],
            Self::Many(tags) => tags.into_iter().map(TagValue::into_text).collect(),
        }
    }
}

/// Front matter keys before validation.
///
/// Dates stay textual here; TOML datetimes are converted to their string
/// form before decoding so both syntaxes share one parser.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub lastmod: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: TagList,
    #[serde(rename = "type")]
    pub doc_type: Option<String>,
    pub weight: Option<i64>,
    #[serde(default)]
    pub show_table_of_contents: bool,
    #[serde(default)]
    pub draft: bool,
    pub slug: Option<String>,
    /// Keys this crate does not interpret, carried through for the renderer.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Split `raw` into front matter and body.
///
/// The opening delimiter must be the first line (a UTF-8 BOM is skipped).
/// The body is everything after the closing delimiter line, verbatim.
pub fn split(raw: &str) -> Result<Split<'_>, ParseError> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let (first_line, metadata_start) = match raw.find('\n') {
        Some(i) => (&raw[..i], i + 1),
        None => (raw, raw.len()),
    };

    let format = Format::from_delimiter(first_line.trim_end()).ok_or_else(|| {
        ParseError::MalformedMetadata("document does not start with `---` or `+++`".into())
    })?;
    let delimiter = format.delimiter();

    let mut offset = metadata_start;
    while offset < raw.len() {
        let end = raw[offset..].find('\n').map_or(raw.len(), |i| offset + i);
        if raw[offset..end].trim_end() == delimiter {
            let body_start = (end + 1).min(raw.len());
            return Ok(Split {
                format,
                metadata: &raw[metadata_start..offset],
                body: &raw[body_start..],
            });
        }
        offset = end + 1;
    }

    Err(ParseError::MalformedMetadata(format!(
        "unterminated `{delimiter}` block"
    )))
}

/// Decode a metadata block into [`RawFrontMatter`].
pub fn decode(format: Format, metadata: &str) -> Result<RawFrontMatter, ParseError> {
    if metadata.trim().is_empty() {
        return Ok(RawFrontMatter::default());
    }

    match format {
        Format::Yaml => serde_yaml_ng::from_str(metadata)
            .map_err(|err| ParseError::MalformedMetadata(err.to_string())),
        Format::Toml => {
            let table: toml::Table = metadata
                .parse()
                .map_err(|err: toml::de::Error| ParseError::MalformedMetadata(err.to_string()))?;
            let mut value = toml::Value::Table(table);
            stringify_toml_datetimes(&mut value);
            RawFrontMatter::deserialize(value)
                .map_err(|err| ParseError::MalformedMetadata(err.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_yaml() {
        let raw = "---\ntitle: Hello\n---\n\nBody text\n";
        let split = split(raw).unwrap();
        assert_eq!(split.format, Format::Yaml);
        assert_eq!(split.metadata, "title: Hello\n");
        assert_eq!(split.body, "\nBody text\n");
    }

    #[test]
    fn test_split_toml() {
        let raw = "+++\ntitle = \"Hello\"\n+++\nBody";
        let split = split(raw).unwrap();
        assert_eq!(split.format, Format::Toml);
        assert_eq!(split.metadata, "title = \"Hello\"\n");
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn test_split_crlf_and_bom() {
        let raw = "\u{feff}---\r\ntitle: Hello\r\n---\r\nBody\r\n";
        let split = split(raw).unwrap();
        assert_eq!(split.metadata, "title: Hello\r\n");
        assert_eq!(split.body, "Body\r\n");
    }

    #[test]
    fn test_split_closing_delimiter_at_eof() {
        let split = split("---\ntitle: Hello\n---").unwrap();
        assert_eq!(split.metadata, "title: Hello\n");
        assert_eq!(split.body, "");
    }

    #[test]
    fn test_split_body_keeps_later_rules() {
        // A horizontal rule in the body is not a delimiter
        let raw = "---\ntitle: A\n---\nintro\n---\nmore\n";
        let split = split(raw).unwrap();
        assert_eq!(split.body, "intro\n---\nmore\n");
    }

    #[test]
    fn test_split_missing_block() {
        let err = split("# Just markdown\n").unwrap_err();
        assert!(matches!(err, ParseError::MalformedMetadata(_)));
        assert!(matches!(split(""), Err(ParseError::MalformedMetadata(_))));
    }

    #[test]
    fn test_split_unterminated() {
        let err = split("---\ntitle: Hello\nbody without end\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedMetadata("unterminated `---` block".into())
        );
    }

    #[test]
    fn test_split_mismatched_delimiters() {
        assert!(split("+++\ntitle = \"a\"\n---\n").is_err());
    }

    #[test]
    fn test_decode_yaml_fields() {
        let fm = decode(
            Format::Yaml,
            "title: Hello\ndate: 2024-08-10\ntags: [rust, solana]\nweight: 25\nshowTableOfContents: true\nauthor: me\n",
        )
        .unwrap();
        assert_eq!(fm.title.as_deref(), Some("Hello"));
        assert_eq!(fm.date.as_deref(), Some("2024-08-10"));
        assert_eq!(fm.tags.into_vec(), vec!["rust", "solana"]);
        assert_eq!(fm.weight, Some(25));
        assert!(fm.show_table_of_contents);
        assert_eq!(fm.extra.get("author"), Some(&serde_json::json!("me")));
    }

    #[test]
    fn test_decode_yaml_single_tag() {
        let fm = decode(Format::Yaml, "title: A\ntags: rust\n").unwrap();
        assert_eq!(fm.tags.into_vec(), vec!["rust"]);
    }

    #[test]
    fn test_decode_toml_datetime_becomes_text() {
        let fm = decode(
            Format::Toml,
            "title = \"Hello\"\ndate = 2024-08-10T09:30:00+08:00\ntags = [\"rust\"]\n",
        )
        .unwrap();
        assert_eq!(fm.date.as_deref(), Some("2024-08-10T09:30:00+08:00"));
        assert_eq!(fm.tags.into_vec(), vec!["rust"]);
    }

    #[test]
    fn test_decode_toml_nested_table_datetime() {
        let fm = decode(
            Format::Toml,
            "title = \"Hello\"\n[history]\nupdated = 2024-08-11\n",
        )
        .unwrap();
        assert_eq!(
            fm.extra.get("history"),
            Some(&serde_json::json!({ "updated": "2024-08-11" }))
        );
    }

    #[test]
    fn test_decode_scalar_tags_as_text() {
        let fm = decode(Format::Yaml, "title: A\ntags: [2024, solana, true]\n").unwrap();
        assert_eq!(fm.tags.into_vec(), vec!["2024", "solana", "true"]);

        let fm = decode(Format::Yaml, "title: A\ntags: 1984\n").unwrap();
        assert_eq!(fm.tags.into_vec(), vec!["1984"]);

        let fm = decode(Format::Toml, "title = \"A\"\ntags = [2024, \"solana\"]\n").unwrap();
        assert_eq!(fm.tags.into_vec(), vec!["2024", "solana"]);
    }

    #[test]
    fn test_decode_empty_block() {
        let fm = decode(Format::Yaml, "\n").unwrap();
        assert!(fm.title.is_none());
    }

    #[test]
    fn test_decode_not_a_mapping() {
        assert!(matches!(
            decode(Format::Yaml, "- just\n- a list\n"),
            Err(ParseError::MalformedMetadata(_))
        ));
        assert!(matches!(
            decode(Format::Toml, "title = \n"),
            Err(ParseError::MalformedMetadata(_))
        ));
    }

    #[test]
    fn test_decode_wrong_shape() {
        // weight must be an integer
        assert!(matches!(
            decode(Format::Yaml, "title: A\nweight: heavy\n"),
            Err(ParseError::MalformedMetadata(_))
        ));
    }
}
