//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged key `K` and the drop target `T`, both small
//! `Copy` values (an index, an id, a slot address).

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K, T>
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    pub dragging_read: ReadSignal<Option<K>>,
    pub dragging_write: WriteSignal<Option<K>>,
    pub drop_target_read: ReadSignal<Option<T>>,
    pub drop_target_write: WriteSignal<Option<T>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending key (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<K>>,
    pub pending_write: WriteSignal<Option<K>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long the "drag just ended" flag stays up, swallowing the trailing click
const DRAG_END_CLICK_GUARD_MS: i32 = 100;

/// True once the pointer has moved far enough from the press to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<K, T>() -> DndSignals<K, T>
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    let (dragging_read, dragging_write) = signal(None::<K>);
    let (drop_target_read, drop_target_write) = signal(None::<T>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<K>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl<K, T> DndSignals<K, T>
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    /// Whether `key` is the item being dragged (tracked)
    pub fn is_dragging(&self, key: K) -> bool
    where
        K: PartialEq,
    {
        self.dragging_read.get() == Some(key)
    }

    /// Whether `target` is the hovered drop target (tracked)
    pub fn is_over(&self, target: T) -> bool
    where
        T: PartialEq,
    {
        self.drop_target_read.get() == Some(target)
    }

    /// True right after a drop; click handlers should bail out
    pub fn click_suppressed(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// End drag operation
pub fn end_drag<K, T>(dnd: &DndSignals<K, T>)
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    let was_dragging = dnd.dragging_read.get_untracked().is_some();
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);
    if !was_dragging {
        return;
    }
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            DRAG_END_CLICK_GUARD_MS,
        );
        cb.forget();
    }
}

/// Create mousedown handler for draggable elements
/// Records pending drag with start position
pub fn make_on_mousedown<K, T>(dnd: DndSignals<K, T>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep the browser's native image drag from taking over
            ev.prevent_default();
            dnd.pending_write.set(Some(key));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for drop targets
pub fn make_on_target_mouseenter<K, T>(dnd: DndSignals<K, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<K, T>(dnd: DndSignals<K, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind document mousemove - starts drag if moved enough
fn bind_global_mousemove<K, T>(dnd: DndSignals<K, T>)
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<K, T, F>(dnd: DndSignals<K, T>, on_drop: F)
where
    K: Copy + Send + Sync + 'static,
    T: Copy + Send + Sync + 'static,
    F: Fn(K, T) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);
        // Only a real drag over a target drops; a plain press falls through to click
        if let (Some(dragged), Some(target)) = (dragging, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_moves_stay_clicks() {
        assert!(!exceeds_threshold((100, 100), (100, 100)));
        assert!(!exceeds_threshold((100, 100), (105, 95)));
    }

    #[test]
    fn moving_past_threshold_on_either_axis_drags() {
        assert!(exceeds_threshold((100, 100), (106, 100)));
        assert!(exceeds_threshold((100, 100), (100, 94)));
    }

    #[test]
    fn dragging_tracks_the_exact_key() {
        let owner = Owner::new();
        owner.with(|| {
            let dnd = create_dnd_signals::<(u8, usize), u32>();
            assert!(!dnd.is_dragging((0, 3)));

            dnd.dragging_write.set(Some((0, 3)));
            assert!(dnd.is_dragging((0, 3)));
            assert!(!dnd.is_dragging((1, 3)));
            assert!(!dnd.is_dragging((0, 4)));
        });
    }
}
