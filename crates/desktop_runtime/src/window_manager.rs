//! Window geometry rules shared by the reducer and the pointer interaction controller.

use crate::model::{ResizeEdge, ViewportMetrics, WindowRect};

/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 280;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 180;
/// Height reserved for the top menu bar.
pub const MENU_BAR_HEIGHT_PX: i32 = 32;
/// Height reserved for the taskbar.
pub const TASKBAR_HEIGHT_PX: i32 = 40;
/// Gap between an expanded window and the work-area edges.
pub const EXPANDED_INSET_PX: i32 = 12;
/// Viewports narrower than this open every window expanded.
pub const NARROW_VIEWPORT_MAX_WIDTH_PX: i32 = 768;

/// Area windows may occupy: the viewport minus the menu bar and taskbar.
pub fn work_area(viewport: ViewportMetrics) -> WindowRect {
    WindowRect {
        x: 0,
        y: MENU_BAR_HEIGHT_PX,
        w: viewport.width.max(0),
        h: (viewport.height - MENU_BAR_HEIGHT_PX - TASKBAR_HEIGHT_PX).max(0),
    }
}

pub fn is_narrow_viewport(viewport: ViewportMetrics) -> bool {
    viewport.width < NARROW_VIEWPORT_MAX_WIDTH_PX
}

pub fn expanded_rect(viewport: ViewportMetrics) -> WindowRect {
    work_area(viewport).inset(EXPANDED_INSET_PX)
}

/// Shrinks `rect` to fit inside `area` and slides it fully on-screen.
pub fn fit_rect_to_area(rect: WindowRect, area: WindowRect) -> WindowRect {
    let w = rect.w.min(area.w).max(0);
    let h = rect.h.min(area.h).max(0);
    WindowRect {
        x: rect.x.max(area.x).min(area.right() - w),
        y: rect.y.max(area.y).min(area.bottom() - h),
        w,
        h,
    }
}

/// Geometry for a newly opened window, and whether it is expanded.
pub fn initial_window_rect(
    default_rect: WindowRect,
    always_expanded: bool,
    viewport: ViewportMetrics,
) -> (WindowRect, bool) {
    if always_expanded || is_narrow_viewport(viewport) {
        (expanded_rect(viewport), true)
    } else {
        (fit_rect_to_area(default_rect, work_area(viewport)), false)
    }
}

/// Limits a drag delta so the window never moves further outside `area` than it started.
pub fn clamp_drag_delta(start: WindowRect, dx: i32, dy: i32, area: WindowRect) -> (i32, i32) {
    let clamp_axis = |origin: i32, len: i32, delta: i32, lo: i32, hi: i32| {
        let min = lo.min(origin);
        let max = (hi - len).max(origin);
        (origin + delta).clamp(min, max) - origin
    };
    (
        clamp_axis(start.x, start.w, dx, area.x, area.right()),
        clamp_axis(start.y, start.h, dy, area.y, area.bottom()),
    )
}

/// One axis of a resize: `(origin, length)` after moving the near or far edge by `delta`.
///
/// The minimum length is enforced first. For a near-edge (north/west) drag the origin moves with
/// it so the far edge stays put. Viewport limits are applied second and only cap growth.
fn resize_axis(
    origin: i32,
    len: i32,
    delta: i32,
    moves_near: bool,
    moves_far: bool,
    (lo, hi): (i32, i32),
    min_len: i32,
) -> (i32, i32) {
    if moves_far {
        let mut new_len = (len + delta).max(min_len);
        if new_len > len {
            new_len = new_len.min((hi - origin).max(len));
        }
        (origin, new_len)
    } else if moves_near {
        let far = origin + len;
        let mut new_origin = (origin + delta).min(far - min_len);
        if new_origin < origin {
            new_origin = new_origin.max(lo.min(origin));
        }
        (new_origin, far - new_origin)
    } else {
        (origin, len)
    }
}

/// Resize with the minimum size floor and viewport limits applied.
pub fn clamp_resize(
    start: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    area: WindowRect,
) -> WindowRect {
    let (x, w) = resize_axis(
        start.x,
        start.w,
        dx,
        edge.moves_left_edge(),
        edge.moves_right_edge(),
        (area.x, area.right()),
        MIN_WINDOW_WIDTH,
    );
    let (y, h) = resize_axis(
        start.y,
        start.h,
        dy,
        edge.moves_top_edge(),
        edge.moves_bottom_edge(),
        (area.y, area.bottom()),
        MIN_WINDOW_HEIGHT,
    );
    WindowRect { x, y, w, h }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const DESKTOP: ViewportMetrics = ViewportMetrics {
        width: 1280,
        height: 800,
    };

    fn rect(x: i32, y: i32, w: i32, h: i32) -> WindowRect {
        WindowRect { x, y, w, h }
    }

    #[test]
    fn work_area_reserves_menu_bar_and_taskbar() {
        assert_eq!(work_area(DESKTOP), rect(0, 32, 1280, 728));
        assert_eq!(expanded_rect(DESKTOP), rect(12, 44, 1256, 704));
    }

    #[test]
    fn oversized_default_is_shrunk_and_moved_on_screen() {
        let fitted = fit_rect_to_area(rect(900, 10, 1600, 400), work_area(DESKTOP));
        assert_eq!(fitted, rect(0, 32, 1280, 400));

        let fitted = fit_rect_to_area(rect(1100, 600, 400, 300), work_area(DESKTOP));
        assert_eq!(fitted, rect(880, 460, 400, 300));
    }

    #[test]
    fn narrow_viewport_expands_every_window() {
        let phone = ViewportMetrics {
            width: 390,
            height: 844,
        };
        let (geometry, expanded) = initial_window_rect(rect(40, 40, 300, 200), false, phone);
        assert!(expanded);
        assert_eq!(geometry, expanded_rect(phone));

        let (_, expanded) = initial_window_rect(rect(40, 40, 300, 200), false, DESKTOP);
        assert!(!expanded);
    }

    #[test]
    fn north_west_resize_within_limits_moves_origin_and_keeps_far_corner() {
        let start = rect(100, 100, 400, 300);
        let resized = clamp_resize(start, ResizeEdge::NorthWest, -10, 20, work_area(DESKTOP));
        assert_eq!(resized, rect(90, 120, 410, 280));
        assert_eq!((resized.right(), resized.bottom()), (start.right(), start.bottom()));
    }

    #[test]
    fn drag_delta_stops_at_work_area_edges() {
        let area = work_area(DESKTOP);
        let start = rect(100, 100, 400, 300);
        assert_eq!(clamp_drag_delta(start, -500, -500, area), (-100, -68));
        assert_eq!(clamp_drag_delta(start, 2000, 2000, area), (780, 360));
        assert_eq!(clamp_drag_delta(start, 15, -5, area), (15, -5));
    }

    #[test]
    fn drag_delta_never_pulls_an_off_screen_window_further_out() {
        let area = work_area(DESKTOP);
        let start = rect(-50, 100, 400, 300);
        assert_eq!(clamp_drag_delta(start, 0, 0, area), (0, 0));
        assert_eq!(clamp_drag_delta(start, -20, 0, area), (0, 0));
        assert_eq!(clamp_drag_delta(start, 20, 0, area), (20, 0));
    }

    #[test]
    fn west_and_north_shrink_stop_at_floor_with_far_edge_fixed() {
        let area = work_area(DESKTOP);
        let start = rect(100, 100, 400, 300);

        let west = clamp_resize(start, ResizeEdge::West, 350, 0, area);
        assert_eq!(west.w, MIN_WINDOW_WIDTH);
        assert_eq!(west.right(), start.right());

        let north = clamp_resize(start, ResizeEdge::North, 0, 250, area);
        assert_eq!(north.h, MIN_WINDOW_HEIGHT);
        assert_eq!(north.bottom(), start.bottom());

        let corner = clamp_resize(start, ResizeEdge::NorthWest, 1000, 1000, area);
        assert_eq!(corner.size(), crate::model::WindowSize { w: 280, h: 180 });
        assert_eq!((corner.right(), corner.bottom()), (start.right(), start.bottom()));
    }

    #[test]
    fn growth_is_capped_by_work_area() {
        let area = work_area(DESKTOP);
        let start = rect(100, 100, 400, 300);

        let east = clamp_resize(start, ResizeEdge::East, 5000, 0, area);
        assert_eq!(east.right(), area.right());

        let south = clamp_resize(start, ResizeEdge::South, 0, 5000, area);
        assert_eq!(south.bottom(), area.bottom());

        let north = clamp_resize(start, ResizeEdge::North, 0, -5000, area);
        assert_eq!(north.y, area.y);
        assert_eq!(north.bottom(), start.bottom());

        let west = clamp_resize(start, ResizeEdge::West, -5000, 0, area);
        assert_eq!(west.x, 0);
        assert_eq!(west.right(), start.right());
    }

    #[test]
    fn east_shrink_stops_at_floor() {
        let area = work_area(DESKTOP);
        let shrunk = clamp_resize(rect(100, 100, 400, 300), ResizeEdge::SouthEast, -900, -900, area);
        assert_eq!(shrunk, rect(100, 100, MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT));
    }
}
