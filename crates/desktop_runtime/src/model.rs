use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in pseudo-applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppId {
    About,
    Projects,
    Resume,
    Contact,
    Terminal,
    Paint,
    Secrets,
}

impl AppId {
    pub const ALL: [AppId; 7] = [
        Self::About,
        Self::Projects,
        Self::Resume,
        Self::Contact,
        Self::Terminal,
        Self::Paint,
        Self::Secrets,
    ];

    /// Stable lowercase identifier, matching the app catalog keys.
    pub fn slug(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Resume => "resume",
            Self::Contact => "contact",
            Self::Terminal => "terminal",
            Self::Paint => "paint",
            Self::Secrets => "secrets",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app_id| app_id.slug() == slug)
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Window identity: the app it hosts plus the wall-clock millisecond it was opened at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId {
    pub app_id: AppId,
    pub opened_at_ms: u64,
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.app_id, self.opened_at_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn position(self) -> WindowPosition {
        WindowPosition {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(self) -> WindowSize {
        WindowSize {
            w: self.w,
            h: self.h,
        }
    }

    pub fn right(self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(self) -> i32 {
        self.y + self.h
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Shrinks the rect by `margin` on every side.
    pub fn inset(self, margin: i32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            w: (self.w - 2 * margin).max(0),
            h: (self.h - 2 * margin).max(0),
        }
    }
}

/// Browser viewport dimensions, read at event time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportMetrics {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub z_index: u32,
    pub expanded: bool,
}

/// Desktop session state. One instance lives for the page session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopState {
    /// Open windows in the order they were opened.
    pub windows: Vec<WindowRecord>,
    pub next_z_index: u32,
    pub active_window: Option<WindowId>,
    /// One-shot easter-egg unlock.
    pub hidden_revealed: bool,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            windows: Vec::new(),
            next_z_index: 1,
            active_window: None,
            hidden_revealed: false,
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.app_id == app_id)
    }

    /// Window with the highest z-index.
    pub fn topmost_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().max_by_key(|w| w.z_index)
    }

    pub fn is_active(&self, window_id: WindowId) -> bool {
        self.active_window == Some(window_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub fn moves_right_edge(self) -> bool {
        matches!(self, Self::East | Self::NorthEast | Self::SouthEast)
    }

    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }

    pub fn moves_bottom_edge(self) -> bool {
        matches!(self, Self::South | Self::SouthEast | Self::SouthWest)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_id_display_combines_app_and_timestamp() {
        let id = WindowId {
            app_id: AppId::Terminal,
            opened_at_ms: 1_700_000_000_123,
        };
        assert_eq!(id.to_string(), "terminal-1700000000123");
    }

    #[test]
    fn app_slugs_round_trip() {
        for app_id in AppId::ALL {
            assert_eq!(AppId::from_slug(app_id.slug()), Some(app_id));
        }
        assert_eq!(AppId::from_slug("minesweeper"), None);
    }

    #[test]
    fn every_edge_moves_at_least_one_side() {
        for edge in ResizeEdge::ALL {
            let moved = [
                edge.moves_left_edge(),
                edge.moves_right_edge(),
                edge.moves_top_edge(),
                edge.moves_bottom_edge(),
            ];
            assert!(moved.iter().any(|m| *m), "{edge:?}");
            assert!(!(edge.moves_left_edge() && edge.moves_right_edge()));
        }
    }
}
