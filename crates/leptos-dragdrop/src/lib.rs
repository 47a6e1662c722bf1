//! Leptos DragDrop Utilities
//! 
//! Free placement drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag, and reports the
//! drop as a canvas-relative point centered on the pointer.

use gloo_timers::callback::Timeout;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Id of the element being dragged
pub type DragId = u64;

/// Canvas-relative position where the dragged icon's top-left corner lands
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropPoint {
    pub x: f64,
    pub y: f64,
}

/// Canvas bounds in client (viewport) coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

/// Rendered size of a draggable icon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSize {
    pub width: f64,
    pub height: f64,
}

impl IconSize {
    pub fn square(side: f64) -> Self {
        Self { width: side, height: side }
    }
}

/// Translate a pointer release into canvas coordinates.
///
/// Subtracts half the icon size so the icon centers on the pointer.
/// Returns `None` when the pointer is outside the canvas.
pub fn drop_point(client_x: f64, client_y: f64, canvas: CanvasRect, icon: IconSize) -> Option<DropPoint> {
    if !canvas.contains(client_x, client_y) {
        return None;
    }
    Some(DropPoint {
        x: client_x - canvas.left - icon.width / 2.0,
        y: client_y - canvas.top - icon.height / 2.0,
    })
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<DragId>>,
    pub dragging_id_write: WriteSignal<Option<DragId>>,
    /// Pointer currently over the drop canvas
    pub over_canvas_read: ReadSignal<bool>,
    pub over_canvas_write: WriteSignal<bool>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<DragId>>,
    pub pending_id_write: WriteSignal<Option<DragId>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are suppressed after a drop
const CLICK_SUPPRESS_MS: u32 = 100;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<DragId>);
    let (over_canvas_read, over_canvas_write) = signal(false);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<DragId>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        over_canvas_read,
        over_canvas_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

impl DndSignals {
    pub fn is_dragging(&self, id: DragId) -> bool {
        self.dragging_id_read.get() == Some(id)
    }

    /// True right after a drop, so the element's click handler can ignore it
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_id_read.get_untracked().is_some();
    dnd.dragging_id_write.set(None);
    dnd.over_canvas_write.set(false);
    dnd.pending_id_write.set(None);

    if was_dragging {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        Timeout::new(CLICK_SUPPRESS_MS, move || clear.set(false)).forget();
    }
}

/// Create mousedown handler for draggable icons
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, id: DragId) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Keep the browser from starting a text selection
            ev.prevent_default();
            dnd.pending_id_write.set(Some(id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for the drop canvas
pub fn make_on_canvas_mouseenter(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.over_canvas_write.set(true);
        }
    }
}

/// Create mouseleave handler for the drop canvas
pub fn make_on_canvas_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.over_canvas_write.set(false);
    }
}

/// Bind mousemove on the document - starts drag if moved enough
fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        
        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();
            
            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_id_write.set(pending);
                dnd.over_canvas_write.set(true);
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

/// Bind global mouseup handler for drops onto `canvas`
///
/// `on_drop` receives the dragged id and the canvas-relative point for the
/// icon's top-left corner. Releases outside the canvas cancel the drag.
pub fn bind_canvas_drop<F>(dnd: DndSignals, canvas: NodeRef<Div>, icon: IconSize, on_drop: F)
where
    F: Fn(DragId, DropPoint) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let bounds = canvas.get_untracked().map(|el| {
            let rect = el.get_bounding_client_rect();
            CanvasRect {
                left: rect.left(),
                top: rect.top(),
                width: rect.width(),
                height: rect.height(),
            }
        });
        let point = bounds.and_then(|rect| {
            drop_point(f64::from(ev.client_x()), f64::from(ev.client_y()), rect, icon)
        });

        end_drag(&dnd);

        // Plain clicks fall through to the element's click handler
        if let (Some(dragged), Some(point)) = (dragging_id, point) {
            on_drop(dragged, point);
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

    const CANVAS: CanvasRect = CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 400.0,
    };

    #[test]
    fn test_drop_centers_icon_on_pointer() {
        let point = drop_point(300.0, 250.0, CANVAS, IconSize::square(50.0));
        assert_eq!(point, Some(DropPoint { x: 175.0, y: 175.0 }));
    }

    #[test]
    fn test_drop_near_corner_can_go_negative() {
        let point = drop_point(100.0, 50.0, CANVAS, IconSize::square(50.0));
        assert_eq!(point, Some(DropPoint { x: -25.0, y: -25.0 }));
    }

    #[test]
    fn test_drop_outside_canvas() {
        assert_eq!(drop_point(99.0, 200.0, CANVAS, IconSize::square(50.0)), None);
        assert_eq!(drop_point(200.0, 451.0, CANVAS, IconSize::square(50.0)), None);
    }

    #[test]
    fn test_non_square_icon() {
        let icon = IconSize { width: 40.0, height: 20.0 };
        let point = drop_point(150.0, 100.0, CANVAS, icon);
        assert_eq!(point, Some(DropPoint { x: 30.0, y: 40.0 }));
    }
}
