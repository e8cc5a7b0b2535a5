//! Case-study decks shown by the Projects window and the `/case-studies/:slug` route.

use slideshow::{
    CaseStudy, Column, MediaRef, MediaSide, Section, Slide, TimelineDate, TimelineEntry, TocEntry,
};

/// Component key rendered into the blank slide of the desktop deck.
pub const PAINT_DEMO_COMPONENT: &str = "paint-demo";

fn strings<const N: usize>(items: [&str; N]) -> Vec<String> {
    items.into_iter().map(str::to_string).collect()
}

fn column(heading: &str, bullets: Vec<String>) -> Column {
    Column {
        heading: heading.to_string(),
        bullets,
    }
}

fn section(heading: &str, body: &str) -> Section {
    Section {
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

fn toc(label: &str, target: usize) -> TocEntry {
    TocEntry {
        label: label.to_string(),
        target,
    }
}

fn era(
    label: &str,
    sub_label: Option<&str>,
    start: TimelineDate,
    end: Option<TimelineDate>,
) -> TimelineEntry {
    TimelineEntry {
        label: label.to_string(),
        sub_label: sub_label.map(str::to_string),
        start,
        end,
        details: Vec::new(),
    }
}

fn retro_desktop() -> CaseStudy {
    CaseStudy {
        slug: "retro-desktop".to_string(),
        title: "Retro Desktop".to_string(),
        summary: "This portfolio, built as a windowed desktop in the browser.".to_string(),
        slides: vec![
            Slide::Intro {
                title: "Retro Desktop".to_string(),
                subtitle: Some("A portfolio you can drag around".to_string()),
                hero: Some(MediaRef::new(
                    "/assets/case-studies/retro-desktop/hero.png",
                    "Desktop with three overlapping windows",
                )),
                tags: strings(["rust", "wasm", "leptos"]),
            },
            Slide::TableOfContents {
                title: "Contents".to_string(),
                entries: vec![
                    toc("The problem", 2),
                    toc("Window manager", 3),
                    toc("Try it", 5),
                    toc("Timeline", 7),
                ],
            },
            Slide::Columns {
                title: "The problem".to_string(),
                columns: vec![
                    column(
                        "Visitors",
                        strings(["skim for ten seconds", "rarely scroll past the fold"]),
                    ),
                    column(
                        "Goal",
                        strings(["reward curiosity", "keep every page one click away"]),
                    ),
                ],
            },
            Slide::Split {
                title: "Window manager".to_string(),
                body: strings([
                    "Windows live in one reducer-owned list.",
                    "Focus bumps a monotonic z counter, so stacking order never needs a sort.",
                    "Drags render an offset and commit once on release.",
                ]),
                media: MediaRef::new(
                    "/assets/case-studies/retro-desktop/drag.png",
                    "A window mid-drag with its outline offset",
                ),
                media_side: MediaSide::Left,
            },
            Slide::Quote {
                quote: "I spent ten minutes just opening and closing windows.".to_string(),
                attribution: Some("An early visitor".to_string()),
            },
            Slide::Title {
                title: "Try it".to_string(),
                kicker: Some("Interactive".to_string()),
            },
            Slide::Blank {
                component: PAINT_DEMO_COMPONENT.to_string(),
            },
            Slide::Timeline {
                title: "Timeline".to_string(),
                entries: vec![
                    era(
                        "Prototype",
                        Some("static mockups"),
                        TimelineDate::year_month(2023, 2),
                        Some(TimelineDate::year_month(2023, 5)),
                    ),
                    era(
                        "Desktop shell",
                        None,
                        TimelineDate::year_month(2023, 6),
                        Some(TimelineDate::year_month(2024, 1)),
                    ),
                    era(
                        "Case studies",
                        Some("slideshow engine"),
                        TimelineDate::year(2024),
                        None,
                    ),
                ],
            },
        ],
    }
}

fn field_recorder() -> CaseStudy {
    CaseStudy {
        slug: "field-recorder".to_string(),
        title: "Field Recorder".to_string(),
        summary: "Firmware and companion app for a pocket audio recorder.".to_string(),
        slides: vec![
            Slide::Title {
                title: "Field Recorder".to_string(),
                kicker: Some("Embedded + mobile".to_string()),
            },
            Slide::Image {
                title: Some("Hardware".to_string()),
                image: MediaRef::new(
                    "/assets/case-studies/field-recorder/board.jpg",
                    "Recorder circuit board on a bench",
                ),
                caption: Some("Rev C board, hand assembled".to_string()),
            },
            Slide::SectionsSplit {
                title: "Approach".to_string(),
                sections: vec![
                    section("Capture", "Lock-free ring buffer between the codec ISR and the SD writer."),
                    section("Sync", "Resumable chunked uploads over BLE, verified by hash."),
                    section("Review", "Waveform previews rendered on device for quick culling."),
                ],
                media: Some(MediaRef::new(
                    "/assets/case-studies/field-recorder/app.png",
                    "Companion app waveform view",
                )),
            },
            Slide::DualVideo {
                title: Some("Before and after".to_string()),
                left: MediaRef::new(
                    "/assets/case-studies/field-recorder/before.mp4",
                    "Upload stalling on the first firmware",
                ),
                right: MediaRef::new(
                    "/assets/case-studies/field-recorder/after.mp4",
                    "Resumable upload finishing after reconnect",
                ),
            },
            Slide::Timeline {
                title: "Project timeline".to_string(),
                entries: vec![
                    era(
                        "Research",
                        None,
                        TimelineDate::year_month(2021, 9),
                        Some(TimelineDate::year_month(2021, 12)),
                    ),
                    era(
                        "Firmware",
                        Some("C, later Rust"),
                        TimelineDate::year(2022),
                        Some(TimelineDate::year_month(2023, 3)),
                    ),
                    era(
                        "Companion app",
                        None,
                        TimelineDate::year_month(2022, 6),
                        Some(TimelineDate::year(2023)),
                    ),
                ],
            },
            Slide::Quote {
                quote: "The first recorder that never lost a take.".to_string(),
                attribution: Some("Sound recordist".to_string()),
            },
        ],
    }
}

/// All case studies in display order.
pub fn case_studies() -> Vec<CaseStudy> {
    vec![retro_desktop(), field_recorder()]
}

pub fn case_study(slug: &str) -> Option<CaseStudy> {
    case_studies().into_iter().find(|study| study.slug == slug)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use pretty_assertions::assert_eq;
    use slideshow::validate_slide_links;

    use super::*;

    #[test]
    fn every_deck_has_valid_contents_links() {
        for study in case_studies() {
            assert!(!study.slides.is_empty(), "{}", study.slug);
            validate_slide_links(&study.slides)
                .unwrap_or_else(|err| panic!("{}: {err}", study.slug));
        }
    }

    #[test]
    fn decks_cover_every_slide_kind() {
        let kinds: BTreeSet<&str> = case_studies()
            .iter()
            .flat_map(|study| study.slides.iter().map(Slide::kind))
            .collect();
        assert_eq!(kinds.len(), 11);
    }

    #[test]
    fn lookup_by_slug() {
        assert_eq!(
            case_study("field-recorder").map(|study| study.title),
            Some("Field Recorder".to_string())
        );
        assert_eq!(case_study("missing"), None);
    }
}
