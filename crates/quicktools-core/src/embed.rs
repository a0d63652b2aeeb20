//! HTML embed code generation.
//!
//! The embed tool turns a URL plus a few attributes into a copy-pastable
//! HTML snippet. Everything user-controlled goes through attribute escaping
//! so a pasted URL can never break out of its attribute.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What kind of element to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    /// An `<iframe>` embedding another page.
    #[default]
    Iframe,
    /// An `<img>` tag.
    Image,
    /// A `<video>` tag with controls.
    Video,
    /// An `<audio>` tag with controls.
    Audio,
}

/// Options for the embed snippet builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    pub kind: EmbedKind,
    /// Source URL for the embedded content.
    pub url: String,
    /// Width attribute in pixels.
    pub width: u32,
    /// Height attribute in pixels.
    pub height: u32,
    /// Accessible title (iframe `title` / image `alt`).
    #[serde(default)]
    pub title: Option<String>,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            kind: EmbedKind::Iframe,
            url: String::new(),
            width: 560,
            height: 315,
            title: None,
        }
    }
}

/// Errors for embed code generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmbedError {
    /// The URL field was left empty.
    #[error("URL must not be empty")]
    EmptyUrl,

    /// Width or height is zero.
    #[error("Dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Escape text for use inside a double-quoted HTML attribute.
pub fn escape_attribute(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the HTML snippet for the given options.
pub fn embed_snippet(options: &EmbedOptions) -> Result<String, EmbedError> {
    let url = options.url.trim();
    if url.is_empty() {
        return Err(EmbedError::EmptyUrl);
    }
    if options.width == 0 || options.height == 0 {
        return Err(EmbedError::InvalidDimensions {
            width: options.width,
            height: options.height,
        });
    }

    let src = escape_attribute(url);
    let title = options
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(escape_attribute);

    let snippet = match options.kind {
        EmbedKind::Iframe => {
            let title_attr = title
                .map(|t| format!(" title=\"{}\"", t))
                .unwrap_or_default();
            format!(
                "<iframe src=\"{}\" width=\"{}\" height=\"{}\"{} frameborder=\"0\" allowfullscreen></iframe>",
                src, options.width, options.height, title_attr
            )
        }
        EmbedKind::Image => {
            let alt = title.unwrap_or_default();
            format!(
                "<img src=\"{}\" width=\"{}\" height=\"{}\" alt=\"{}\">",
                src, options.width, options.height, alt
            )
        }
        EmbedKind::Video => format!(
            "<video src=\"{}\" width=\"{}\" height=\"{}\" controls></video>",
            src, options.width, options.height
        ),
        EmbedKind::Audio => format!("<audio src=\"{}\" controls></audio>", src),
    };

    Ok(snippet)
}
