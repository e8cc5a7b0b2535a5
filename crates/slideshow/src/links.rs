//! Cross-slide link checks.
//!
//! Table-of-contents entries address slides by literal index. Nothing rewrites those indices
//! when a deck is reordered, so decks are validated up front instead.

use thiserror::Error;

use crate::model::Slide;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlideLinkError {
    #[error("slide {slide} links `{label}` to slide {target}, but the deck has {len} slides")]
    TargetOutOfRange {
        slide: usize,
        label: String,
        target: usize,
        len: usize,
    },
}

/// Returns every table-of-contents link as `(slide index, label, target)`.
pub fn toc_links(slides: &[Slide]) -> Vec<(usize, &str, usize)> {
    slides
        .iter()
        .enumerate()
        .filter_map(|(index, slide)| match slide {
            Slide::TableOfContents { entries, .. } => Some(
                entries
                    .iter()
                    .map(move |entry| (index, entry.label.as_str(), entry.target)),
            ),
            _ => None,
        })
        .flatten()
        .collect()
}

/// Checks that every table-of-contents target points inside the deck.
///
/// # Errors
///
/// Returns the first dangling link found.
pub fn validate_slide_links(slides: &[Slide]) -> Result<(), SlideLinkError> {
    let len = slides.len();
    match toc_links(slides)
        .into_iter()
        .find(|(_, _, target)| *target >= len)
    {
        Some((slide, label, target)) => Err(SlideLinkError::TargetOutOfRange {
            slide,
            label: label.to_string(),
            target,
            len,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::TocEntry;

    fn toc(targets: &[usize]) -> Slide {
        Slide::TableOfContents {
            title: "Contents".to_string(),
            entries: targets
                .iter()
                .map(|target| TocEntry {
                    label: format!("Part {target}"),
                    target: *target,
                })
                .collect(),
        }
    }

    fn title(text: &str) -> Slide {
        Slide::Title {
            title: text.to_string(),
            kicker: None,
        }
    }

    #[test]
    fn in_range_links_pass() {
        let slides = vec![toc(&[1, 2]), title("a"), title("b")];
        assert_eq!(validate_slide_links(&slides), Ok(()));
        assert_eq!(toc_links(&slides).len(), 2);
    }

    #[test]
    fn dangling_link_is_reported_with_context() {
        let slides = vec![title("a"), toc(&[0, 3])];
        assert_eq!(
            validate_slide_links(&slides),
            Err(SlideLinkError::TargetOutOfRange {
                slide: 1,
                label: "Part 3".to_string(),
                target: 3,
                len: 2,
            })
        );
    }
}
