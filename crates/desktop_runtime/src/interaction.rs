//! Pointer drag/resize controller.
//!
//! A gesture never touches [`crate::model::DesktopState`] while it runs. Pointer moves update a
//! visual offset held in [`InteractionState`]; the window view renders committed geometry plus
//! that offset. Releasing the pointer produces exactly one [`DesktopAction`] to commit.

use crate::{
    model::{
        PointerPosition, ResizeEdge, WindowId, WindowPosition, WindowRecord, WindowRect,
        WindowSize,
    },
    reducer::DesktopAction,
    window_manager::{clamp_drag_delta, clamp_resize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Move,
    Resize(ResizeEdge),
}

/// Uncommitted geometry delta applied on top of the committed window rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisualOffset {
    pub dx: i32,
    pub dy: i32,
    pub dw: i32,
    pub dh: i32,
}

impl VisualOffset {
    fn between(from: WindowRect, to: WindowRect) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
            dw: to.w - from.w,
            dh: to.h - from.h,
        }
    }

    pub fn apply(self, rect: WindowRect) -> WindowRect {
        WindowRect {
            x: rect.x + self.dx,
            y: rect.y + self.dy,
            w: rect.w + self.dw,
            h: rect.h + self.dh,
        }
    }

    pub fn is_zero(self) -> bool {
        self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureSession {
    pub window_id: WindowId,
    pub kind: GestureKind,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
    offset: VisualOffset,
}

impl GestureSession {
    pub fn begin_move(window: &WindowRecord, pointer: PointerPosition) -> Self {
        Self::begin(window, GestureKind::Move, pointer)
    }

    pub fn begin_resize(window: &WindowRecord, edge: ResizeEdge, pointer: PointerPosition) -> Self {
        Self::begin(window, GestureKind::Resize(edge), pointer)
    }

    fn begin(window: &WindowRecord, kind: GestureKind, pointer: PointerPosition) -> Self {
        Self {
            window_id: window.id,
            kind,
            pointer_start: pointer,
            rect_start: window.rect,
            offset: VisualOffset::default(),
        }
    }

    /// Recomputes the visual offset for the current pointer, clamped to `area`.
    pub fn update(&mut self, pointer: PointerPosition, area: WindowRect) {
        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        let target = match self.kind {
            GestureKind::Move => {
                let (dx, dy) = clamp_drag_delta(self.rect_start, dx, dy, area);
                self.rect_start.offset(dx, dy)
            }
            GestureKind::Resize(edge) => clamp_resize(self.rect_start, edge, dx, dy, area),
        };
        self.offset = VisualOffset::between(self.rect_start, target);
    }

    pub fn visual_offset(&self) -> VisualOffset {
        self.offset
    }

    pub fn preview_rect(&self) -> WindowRect {
        self.offset.apply(self.rect_start)
    }

    /// The single committing action for this gesture.
    pub fn commit(self) -> DesktopAction {
        let rect = self.preview_rect();
        match self.kind {
            GestureKind::Move => DesktopAction::MoveWindow {
                window_id: self.window_id,
                position: rect.position(),
            },
            GestureKind::Resize(edge) => DesktopAction::ResizeWindow {
                window_id: self.window_id,
                size: WindowSize {
                    w: rect.w,
                    h: rect.h,
                },
                position: (edge.moves_left_edge() || edge.moves_top_edge()).then_some(
                    WindowPosition {
                        x: rect.x,
                        y: rect.y,
                    },
                ),
            },
        }
    }
}

/// Pointer interaction state, kept apart from the desktop state so live gestures do not
/// re-render sibling windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub gesture: Option<GestureSession>,
}

impl InteractionState {
    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Offset to render for `window_id`; zero unless it is the gesture target.
    pub fn visual_offset_for(&self, window_id: WindowId) -> VisualOffset {
        self.gesture
            .filter(|gesture| gesture.window_id == window_id)
            .map(|gesture| gesture.visual_offset())
            .unwrap_or_default()
    }

    pub fn update(&mut self, pointer: PointerPosition, area: WindowRect) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.update(pointer, area);
        }
    }

    /// Ends the gesture, returning its commit action. The visual offset resets with it.
    pub fn finish(&mut self) -> Option<DesktopAction> {
        self.gesture.take().map(GestureSession::commit)
    }

    /// Drops the gesture without committing anything.
    pub fn cancel(&mut self) {
        self.gesture = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{AppId, DesktopState, ViewportMetrics},
        reducer::reduce_desktop,
        window_manager::{work_area, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
    };

    const VIEWPORT: ViewportMetrics = ViewportMetrics {
        width: 1280,
        height: 800,
    };

    fn window() -> WindowRecord {
        WindowRecord {
            id: WindowId {
                app_id: AppId::About,
                opened_at_ms: 1,
            },
            app_id: AppId::About,
            title: "About".to_string(),
            rect: WindowRect {
                x: 200,
                y: 150,
                w: 500,
                h: 400,
            },
            z_index: 1,
            expanded: false,
        }
    }

    fn at(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn zero_movement_drag_commits_the_original_position() {
        let win = window();
        let mut interaction = InteractionState {
            gesture: Some(GestureSession::begin_move(&win, at(300, 160))),
        };
        interaction.update(at(300, 160), work_area(VIEWPORT));

        assert_eq!(
            interaction.finish(),
            Some(DesktopAction::MoveWindow {
                window_id: win.id,
                position: win.rect.position(),
            })
        );
        assert!(!interaction.is_active());
    }

    #[test]
    fn drag_updates_only_the_visual_offset_until_release() {
        let mut state = DesktopState::default();
        let win = window();
        state.windows.push(win.clone());
        let before = state.clone();

        let mut interaction = InteractionState {
            gesture: Some(GestureSession::begin_move(&win, at(300, 160))),
        };
        interaction.update(at(340, 190), work_area(VIEWPORT));
        interaction.update(at(360, 210), work_area(VIEWPORT));

        assert_eq!(state, before);
        assert_eq!(
            interaction.visual_offset_for(win.id),
            VisualOffset {
                dx: 60,
                dy: 50,
                dw: 0,
                dh: 0,
            }
        );

        let commit = interaction.finish().expect("commit action");
        reduce_desktop(&mut state, commit).expect("commit");
        assert_eq!(state.windows[0].rect.position(), WindowPosition { x: 260, y: 200 });
        assert!(interaction.visual_offset_for(win.id).is_zero());
    }

    #[test]
    fn drag_preview_is_clamped_to_work_area() {
        let win = window();
        let mut gesture = GestureSession::begin_move(&win, at(300, 160));
        gesture.update(at(-900, -900), work_area(VIEWPORT));
        assert_eq!(gesture.preview_rect().position(), WindowPosition { x: 0, y: 32 });
    }

    #[test]
    fn north_west_resize_below_floor_keeps_opposite_corner() {
        let win = window();
        let mut gesture = GestureSession::begin_resize(&win, ResizeEdge::NorthWest, at(200, 150));
        gesture.update(at(650, 520), work_area(VIEWPORT));

        assert_eq!(
            gesture.commit(),
            DesktopAction::ResizeWindow {
                window_id: win.id,
                size: WindowSize {
                    w: MIN_WINDOW_WIDTH,
                    h: MIN_WINDOW_HEIGHT,
                },
                position: Some(WindowPosition {
                    x: 700 - MIN_WINDOW_WIDTH,
                    y: 550 - MIN_WINDOW_HEIGHT,
                }),
            }
        );
    }

    #[test]
    fn south_east_resize_commits_without_position() {
        let win = window();
        let mut gesture = GestureSession::begin_resize(&win, ResizeEdge::SouthEast, at(700, 550));
        gesture.update(at(740, 570), work_area(VIEWPORT));

        assert_eq!(
            gesture.commit(),
            DesktopAction::ResizeWindow {
                window_id: win.id,
                size: WindowSize { w: 540, h: 420 },
                position: None,
            }
        );
    }

    #[test]
    fn offsets_are_scoped_to_the_gesture_window() {
        let win = window();
        let mut interaction = InteractionState {
            gesture: Some(GestureSession::begin_move(&win, at(0, 0))),
        };
        interaction.update(at(10, 10), work_area(VIEWPORT));
        let other = WindowId {
            app_id: AppId::Paint,
            opened_at_ms: 2,
        };
        assert!(interaction.visual_offset_for(other).is_zero());

        interaction.cancel();
        assert_eq!(interaction.finish(), None);
    }
}
