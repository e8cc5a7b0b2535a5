//! Declarative slide content consumed by the slideshow renderer.
//!
//! Slides carry no behavior. Every layout kind is a [`Slide`] variant so the renderer's match
//! stays exhaustive and a new kind fails to compile until each dispatch site handles it.

use serde::{Deserialize, Serialize};

/// Reference to an image or video asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub src: String,
    pub alt: String,
}

impl MediaRef {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// Which side of a split layout holds the media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSide {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub heading: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// One table-of-contents link. `target` is a literal offset into the deck's slide list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub label: String,
    pub target: usize,
}

/// Year with optional month precision (`month` is 1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDate {
    pub year: i32,
    pub month: Option<u8>,
}

impl TimelineDate {
    pub const fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub const fn year_month(year: i32, month: u8) -> Self {
        Self {
            year,
            month: Some(month),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub label: String,
    pub sub_label: Option<String>,
    pub start: TimelineDate,
    /// `None` means the entry is ongoing.
    pub end: Option<TimelineDate>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Closed set of slide layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slide {
    Intro {
        title: String,
        subtitle: Option<String>,
        hero: Option<MediaRef>,
        tags: Vec<String>,
    },
    Image {
        title: Option<String>,
        image: MediaRef,
        caption: Option<String>,
    },
    Columns {
        title: String,
        columns: Vec<Column>,
    },
    Split {
        title: String,
        body: Vec<String>,
        media: MediaRef,
        media_side: MediaSide,
    },
    Timeline {
        title: String,
        entries: Vec<TimelineEntry>,
    },
    Title {
        title: String,
        kicker: Option<String>,
    },
    TableOfContents {
        title: String,
        entries: Vec<TocEntry>,
    },
    Quote {
        quote: String,
        attribution: Option<String>,
    },
    DualVideo {
        title: Option<String>,
        left: MediaRef,
        right: MediaRef,
    },
    SectionsSplit {
        title: String,
        sections: Vec<Section>,
        media: Option<MediaRef>,
    },
    /// Empty frame hosting a component supplied by the embedding view, looked up by key.
    Blank { component: String },
}

impl Slide {
    /// Short kind name, used for DOM data attributes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Intro { .. } => "intro",
            Self::Image { .. } => "image",
            Self::Columns { .. } => "columns",
            Self::Split { .. } => "split",
            Self::Timeline { .. } => "timeline",
            Self::Title { .. } => "title",
            Self::TableOfContents { .. } => "table_of_contents",
            Self::Quote { .. } => "quote",
            Self::DualVideo { .. } => "dual_video",
            Self::SectionsSplit { .. } => "sections_split",
            Self::Blank { .. } => "blank",
        }
    }
}

/// A titled, ordered deck of slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub slides: Vec<Slide>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn slides_deserialize_from_tagged_json() {
        let raw = r#"[
            {"kind": "title", "title": "Process", "kicker": null},
            {"kind": "table_of_contents", "title": "Contents", "entries": [{"label": "Process", "target": 0}]},
            {"kind": "blank", "component": "paint-demo"}
        ]"#;
        let slides: Vec<Slide> = serde_json::from_str(raw).expect("parse slides");

        assert_eq!(slides.len(), 3);
        assert_eq!(slides[0].kind(), "title");
        assert_eq!(
            slides[2],
            Slide::Blank {
                component: "paint-demo".to_string()
            }
        );
    }

    #[test]
    fn timeline_details_default_to_empty() {
        let raw = r#"{"label": "Studio", "sub_label": null, "start": {"year": 2019, "month": null}, "end": null}"#;
        let entry: TimelineEntry = serde_json::from_str(raw).expect("parse entry");
        assert!(entry.details.is_empty());
        assert_eq!(entry.start, TimelineDate::year(2019));
    }
}
