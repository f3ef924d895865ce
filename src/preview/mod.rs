pub mod card;
pub mod extractor;

pub use card::render;
pub use extractor::{ExtractedPage, MetadataExtractor};

/// One extracted metadata entry. `key` is the `name` or `property`
/// attribute (with its `og:` namespace prefix), `value` the `content`
/// attribute. Built fresh per extraction, in document order, duplicates
/// included; downstream resolution is first-match-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaItem {
    pub key: String,
    pub value: String,
}

impl MetaItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Image block of a structured card. Alt text only ever appears together
/// with an image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardImage {
    pub url: String,
    pub alt: Option<String>,
}

/// Read-only view model produced from one extraction pass.
///
/// The two variants are a deliberate two-mode contract: the presence of any
/// `og:` metadata at all switches the whole card into structured mode;
/// without any, the card degrades to a bare labelled link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCard {
    Structured {
        href: String,
        image: Option<CardImage>,
        site_name: Option<String>,
        title: String,
        description: Option<String>,
    },
    Bare {
        href: String,
        label: String,
    },
}

impl PreviewCard {
    pub fn href(&self) -> &str {
        match self {
            PreviewCard::Structured { href, .. } | PreviewCard::Bare { href, .. } => href,
        }
    }

    /// The card's display label: the resolved title in structured mode, the
    /// bare label otherwise. Never empty.
    pub fn label(&self) -> &str {
        match self {
            PreviewCard::Structured { title, .. } => title,
            PreviewCard::Bare { label, .. } => label,
        }
    }
}
