//! Case-study slideshow: slide content model, navigation state machine, input mapping,
//! timeline layout, and the Leptos viewer.
//!
//! Everything except the Leptos view is plain data and logic with no browser dependency, so the
//! navigation and layout rules are testable natively.

mod components;
pub mod input;
pub mod links;
pub mod model;
pub mod navigation;
pub mod timeline;

pub use components::{current_year_month, Slideshow};
pub use links::{validate_slide_links, SlideLinkError};
pub use model::{
    CaseStudy, Column, MediaRef, MediaSide, Section, Slide, TimelineDate, TimelineEntry, TocEntry,
};
pub use navigation::{NavOutcome, NavPhase, NavRequest, SlideNavigator};
