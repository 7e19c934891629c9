//! Mobile behaviour of the shell: breakpoint tracking, edge swipes for the
//! sidebar, Escape to close it and the `--vh` viewport-height variable.

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::config;

/// Minimum horizontal travel for a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 100.0;
/// Opening swipes must start this close to the left edge
pub const EDGE_ZONE_PX: f64 = 50.0;
const RESIZE_DEBOUNCE_MS: u32 = 100;

pub fn is_mobile_width(width: f64, breakpoint_px: u32) -> bool {
    width <= breakpoint_px as f64
}

fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

/// Current viewport is at or below the configured breakpoint
pub fn is_mobile() -> bool {
    viewport_size()
        .map(|(w, _)| is_mobile_width(w, config().ui.mobile_breakpoint_px))
        .unwrap_or(false)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeAction {
    OpenSidebar,
    CloseSidebar,
    Ignore,
}

pub fn classify_swipe(start_x: f64, end_x: f64, mobile: bool, sidebar_open: bool) -> SwipeAction {
    let distance = end_x - start_x;
    if distance > SWIPE_THRESHOLD_PX && start_x < EDGE_ZONE_PX && mobile {
        SwipeAction::OpenSidebar
    } else if distance < -SWIPE_THRESHOLD_PX && sidebar_open {
        SwipeAction::CloseSidebar
    } else {
        SwipeAction::Ignore
    }
}

/// Value for the `--vh` custom property: 1% of the inner height
pub fn vh_value(inner_height: f64) -> String {
    format!("{}px", inner_height * 0.01)
}

fn update_viewport_height() {
    let Some((_, height)) = viewport_size() else {
        return;
    };
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property("--vh", &vh_value(height));
    }
}

fn set_body_scroll_locked(locked: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

fn first_touch_x(event: &web_sys::TouchEvent) -> Option<f64> {
    event.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

/// Installs the window listeners; renders nothing
#[component]
pub fn ResponsiveController() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let touch_start_x = StoredValue::new(0.0_f64);
    let pending_resize = StoredValue::new_local(None::<Timeout>);

    update_viewport_height();

    let resize = window_event_listener(ev::resize, move |_| {
        // dropping the previous Timeout cancels it
        let timeout = Timeout::new(RESIZE_DEBOUNCE_MS, move || {
            ctx.set_mobile(is_mobile());
            update_viewport_height();
        });
        pending_resize.set_value(Some(timeout));
    });

    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && ctx.is_mobile.get_untracked() {
            ctx.set_left_open(false);
        }
    });

    let touchstart = window_event_listener(ev::touchstart, move |event| {
        if let Some(x) = first_touch_x(&event) {
            touch_start_x.set_value(x);
        }
    });

    let touchend = window_event_listener(ev::touchend, move |event| {
        let Some(end_x) = first_touch_x(&event) else {
            return;
        };
        match classify_swipe(
            touch_start_x.get_value(),
            end_x,
            ctx.is_mobile.get_untracked(),
            ctx.left_open.get_untracked(),
        ) {
            SwipeAction::OpenSidebar => ctx.set_left_open(true),
            SwipeAction::CloseSidebar => ctx.set_left_open(false),
            SwipeAction::Ignore => {}
        }
    });

    // the page behind an open mobile sidebar must not scroll
    Effect::new(move |_| {
        set_body_scroll_locked(ctx.is_mobile.get() && ctx.left_open.get());
    });

    on_cleanup(move || {
        resize.remove();
        keydown.remove();
        touchstart.remove();
        touchend.remove();
        set_body_scroll_locked(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_mobile_width(768.0, 768));
        assert!(is_mobile_width(375.0, 768));
        assert!(!is_mobile_width(769.0, 768));
    }

    #[test]
    fn right_swipe_from_edge_opens_on_mobile() {
        assert_eq!(classify_swipe(10.0, 150.0, true, false), SwipeAction::OpenSidebar);
        // too far from the edge
        assert_eq!(classify_swipe(60.0, 300.0, true, false), SwipeAction::Ignore);
        // desktop
        assert_eq!(classify_swipe(10.0, 150.0, false, false), SwipeAction::Ignore);
        // exactly the threshold is not enough
        assert_eq!(classify_swipe(0.0, 100.0, true, false), SwipeAction::Ignore);
    }

    #[test]
    fn left_swipe_closes_an_open_sidebar() {
        assert_eq!(classify_swipe(300.0, 150.0, true, true), SwipeAction::CloseSidebar);
        assert_eq!(classify_swipe(300.0, 150.0, true, false), SwipeAction::Ignore);
        assert_eq!(classify_swipe(300.0, 250.0, true, true), SwipeAction::Ignore);
    }

    #[test]
    fn vh_is_one_percent_of_height() {
        assert_eq!(vh_value(800.0), "8px");
        assert_eq!(vh_value(0.0), "0px");
    }
}
