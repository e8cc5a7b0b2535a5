//! Timeline layout: shared month axis, per-entry bars, and tick label density.
//!
//! Dates are normalized onto a linear month axis (`year * 12 + month`, months 1-based). A
//! missing start month means January; a missing end month means December; a missing end means
//! the entry is ongoing and ends at the supplied "now".

use crate::model::{TimelineDate, TimelineEntry};

/// Pixels per month needed before month ticks carry text labels.
pub const MONTH_LABEL_MIN_PX: f64 = 28.0;
/// Pixels per month needed before month ticks render at all (as unlabeled dots).
pub const MONTH_DOT_MIN_PX: f64 = 8.0;
/// Containers narrower than this render the vertical stacked list.
pub const VERTICAL_LAYOUT_MAX_WIDTH_PX: f64 = 600.0;

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn month_ordinal(year: i32, month: u8) -> i32 {
    year * 12 + i32::from(month.clamp(1, 12))
}

pub fn start_ordinal(date: TimelineDate) -> i32 {
    month_ordinal(date.year, date.month.unwrap_or(1))
}

pub fn end_ordinal(date: TimelineDate) -> i32 {
    month_ordinal(date.year, date.month.unwrap_or(12))
}

/// Inverse of [`month_ordinal`].
pub fn ordinal_to_year_month(ordinal: i32) -> (i32, u8) {
    let zero_based = ordinal - 1;
    let month = zero_based.rem_euclid(12) + 1;
    (zero_based.div_euclid(12), month as u8)
}

pub fn month_abbreviation(month: u8) -> &'static str {
    MONTH_ABBREVIATIONS[usize::from(month.clamp(1, 12) - 1)]
}

/// One entry projected onto the month axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSpan {
    pub start: i32,
    pub end: i32,
    pub ongoing: bool,
}

impl ResolvedSpan {
    pub fn months(&self) -> i32 {
        self.end - self.start + 1
    }
}

/// Resolves an entry against `now`. An end that precedes the start collapses onto the start.
pub fn resolve_span(entry: &TimelineEntry, now: TimelineDate) -> ResolvedSpan {
    let start = start_ordinal(entry.start);
    let (end, ongoing) = match entry.end {
        Some(end) => (end_ordinal(end), false),
        None => (start_ordinal(now), true),
    };
    ResolvedSpan {
        start,
        end: end.max(start),
        ongoing,
    }
}

/// Inclusive month range covered by a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineAxis {
    pub start: i32,
    pub end: i32,
}

impl TimelineAxis {
    pub fn months(&self) -> i32 {
        self.end - self.start + 1
    }

    /// Percentage offset of the beginning of `ordinal` along the axis.
    pub fn offset_pct(&self, ordinal: i32) -> f64 {
        f64::from(ordinal - self.start) / f64::from(self.months()) * 100.0
    }

    pub fn start_year_month(&self) -> (i32, u8) {
        ordinal_to_year_month(self.start)
    }

    pub fn end_year_month(&self) -> (i32, u8) {
        ordinal_to_year_month(self.end)
    }
}

/// Axis bounds: earliest start to latest end. `None` for an empty list.
pub fn compute_axis(spans: &[ResolvedSpan]) -> Option<TimelineAxis> {
    let start = spans.iter().map(|span| span.start).min()?;
    let end = spans.iter().map(|span| span.end).max()?;
    Some(TimelineAxis { start, end })
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBar {
    pub entry_index: usize,
    pub span: ResolvedSpan,
    pub offset_pct: f64,
    pub width_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub axis: TimelineAxis,
    pub bars: Vec<TimelineBar>,
}

pub fn layout_timeline(entries: &[TimelineEntry], now: TimelineDate) -> Option<TimelineLayout> {
    let spans: Vec<ResolvedSpan> = entries.iter().map(|e| resolve_span(e, now)).collect();
    let axis = compute_axis(&spans)?;
    let total = f64::from(axis.months());
    let bars = spans
        .into_iter()
        .enumerate()
        .map(|(entry_index, span)| TimelineBar {
            entry_index,
            span,
            offset_pct: axis.offset_pct(span.start),
            width_pct: f64::from(span.months()) / total * 100.0,
        })
        .collect();
    Some(TimelineLayout { axis, bars })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthLabelDensity {
    Labeled,
    Dots,
    Hidden,
}

pub fn month_label_density(track_width_px: f64, months: i32) -> MonthLabelDensity {
    if months <= 0 {
        return MonthLabelDensity::Hidden;
    }
    let px_per_month = track_width_px / f64::from(months);
    if px_per_month >= MONTH_LABEL_MIN_PX {
        MonthLabelDensity::Labeled
    } else if px_per_month >= MONTH_DOT_MIN_PX {
        MonthLabelDensity::Dots
    } else {
        MonthLabelDensity::Hidden
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Year,
    Month,
    MonthDot,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub ordinal: i32,
    pub offset_pct: f64,
    pub kind: TickKind,
    pub label: Option<String>,
}

/// Ticks for every month on the axis. Year ticks (each January, plus the first month) are
/// always labeled; other months degrade with [`month_label_density`].
pub fn axis_ticks(axis: TimelineAxis, track_width_px: f64) -> Vec<AxisTick> {
    let density = month_label_density(track_width_px, axis.months());
    (axis.start..=axis.end)
        .filter_map(|ordinal| {
            let (year, month) = ordinal_to_year_month(ordinal);
            let (kind, label) = if month == 1 || ordinal == axis.start {
                (TickKind::Year, Some(year.to_string()))
            } else {
                match density {
                    MonthLabelDensity::Labeled => {
                        (TickKind::Month, Some(month_abbreviation(month).to_string()))
                    }
                    MonthLabelDensity::Dots => (TickKind::MonthDot, None),
                    MonthLabelDensity::Hidden => return None,
                }
            };
            Some(AxisTick {
                ordinal,
                offset_pct: axis.offset_pct(ordinal),
                kind,
                label,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineOrientation {
    Horizontal,
    Vertical,
}

pub fn orientation_for_width(container_width_px: f64) -> TimelineOrientation {
    if container_width_px < VERTICAL_LAYOUT_MAX_WIDTH_PX {
        TimelineOrientation::Vertical
    } else {
        TimelineOrientation::Horizontal
    }
}

fn format_date(date: TimelineDate) -> String {
    match date.month {
        Some(month) => format!("{} {}", month_abbreviation(month), date.year),
        None => date.year.to_string(),
    }
}

/// Human-readable range, e.g. `2012 - 2018` or `Mar 2019 - Present`.
pub fn format_range(entry: &TimelineEntry) -> String {
    let end = entry
        .end
        .map(format_date)
        .unwrap_or_else(|| "Present".to_string());
    format!("{} - {}", format_date(entry.start), end)
}
