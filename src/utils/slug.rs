//! URL slugification and logical path utilities.
//!
//! Converts tag names and content file locations into URL-safe forms.

use anyhow::{Result, anyhow};
use std::path::Path;

/// Markdown file extensions recognized as content.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// File stems that stand for their parent directory (page bundles and
/// section lists).
const INDEX_STEMS: &[&str] = &["index", "_index"];

/// Logical path of the site root document.
pub const ROOT_PATH: &str = "index";

// ============================================================================
// Slugification
// ============================================================================

/// Convert free text (a tag name) into a lowercase, hyphen-joined slug.
///
/// Non-ASCII characters are transliterated first, so `"Zürich"` becomes
/// `"zurich"` and `"你好"` becomes `"ni-hao"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text).to_ascii_lowercase();
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

// ============================================================================
// Content Path Utilities
// ============================================================================

/// Whether `path` has a markdown content extension.
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Compute the logical path of a content file.
///
/// # Path Mapping Examples
///
/// | Source                          | logical path       |
/// |---------------------------------|--------------------|
/// | `content/posts/hello.md`        | `posts/hello`      |
/// | `content/posts/hello/index.md`  | `posts/hello`      |
/// | `content/posts/_index.md`       | `posts`            |
/// | `content/_index.md`             | `index`            |
pub fn logical_path(source: &Path, content_dir: &Path) -> Result<String> {
    let relative = source
        .strip_prefix(content_dir)
        .map_err(|_| anyhow!("File is not in content directory: {}", source.display()))?;

    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("Invalid path encoding: {}", source.display()))?;

    let mut segments = Vec::new();
    if let Some(parent) = relative.parent() {
        for component in parent.components() {
            let segment = component
                .as_os_str()
                .to_str()
                .ok_or_else(|| anyhow!("Invalid path encoding: {}", source.display()))?;
            segments.push(segment);
        }
    }
    if !INDEX_STEMS.contains(&stem) {
        segments.push(stem);
    }

    if segments.is_empty() {
        Ok(ROOT_PATH.to_owned())
    } else {
        Ok(segments.join("/"))
    }
}

/// Replace the last segment of a logical path with `slug`.
pub fn with_slug(path: &str, slug: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => format!("{parent}/{slug}"),
        None => slug.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Rust"), "rust");
        assert_eq!(slugify("Smart Contracts"), "smart-contracts");
        assert_eq!(slugify("  C++ / Rust  "), "c-rust");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Zürich"), "zurich");
        assert_eq!(slugify("你好"), "ni-hao");
    }

    #[test]
    fn test_slugify_only_symbols() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("posts/a.md")));
        assert!(is_content_file(Path::new("posts/a.MARKDOWN")));
        assert!(!is_content_file(Path::new("posts/a.png")));
        assert!(!is_content_file(Path::new("posts/README")));
    }

    #[test]
    fn test_logical_path_regular_file() {
        let root = PathBuf::from("/site/content");
        let path = logical_path(&root.join("posts/hello.md"), &root).unwrap();
        assert_eq!(path, "posts/hello");
    }

    #[test]
    fn test_logical_path_bundles() {
        let root = PathBuf::from("/site/content");
        assert_eq!(logical_path(&root.join("posts/hello/index.md"), &root).unwrap(), "posts/hello");
        assert_eq!(logical_path(&root.join("posts/_index.md"), &root).unwrap(), "posts");
        assert_eq!(logical_path(&root.join("_index.md"), &root).unwrap(), "index");
        assert_eq!(logical_path(&root.join("index.md"), &root).unwrap(), "index");
    }

    #[test]
    fn test_logical_path_outside_content_dir() {
        let root = PathBuf::from("/site/content");
        assert!(logical_path(Path::new("/elsewhere/a.md"), &root).is_err());
    }

    #[test]
    fn test_with_slug() {
        assert_eq!(with_slug("posts/hello", "bonjour"), "posts/bonjour");
        assert_eq!(with_slug("about", "me"), "me");
    }
}
