//! Backpack Canvas Component
//!
//! Backpack silhouette with one draggable icon per item.
//! Uses leptos-dragdrop for free placement; drops center the icon on the pointer.

use leptos::html::Div;
use leptos::prelude::*;

use backpack_core::ItemId;
use leptos_dragdrop::*;

use crate::components::ItemIcon;
use crate::context::use_backpack;

/// Rendered icon size, must match `.item-icon` in the stylesheet
pub const ICON_SIZE_PX: f64 = 50.0;

#[component]
pub fn BackpackCanvas() -> impl IntoView {
    let ctx = use_backpack();
    let canvas = NodeRef::<Div>::new();
    let dnd = create_dnd_signals();

    bind_canvas_drop(dnd, canvas, IconSize::square(ICON_SIZE_PX), move |dragged_id, point| {
        log::debug!("[DND] Drop #{} at ({:.1}, {:.1})", dragged_id, point.x, point.y);
        ctx.reposition_item(ItemId(dragged_id), point.x, point.y);
    });

    let canvas_class = move || {
        let mut c = String::from("backpack-visual");
        if dnd.dragging_id_read.get().is_some() { c.push_str(" dragging"); }
        if dnd.over_canvas_read.get() { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=canvas_class
            node_ref=canvas
            on:mouseenter=make_on_canvas_mouseenter(dnd)
            on:mouseleave=make_on_canvas_mouseleave(dnd)
        >
            <svg viewBox="0 0 100 100" class="backpack-svg">
                <path d="M20,80 Q50,100 80,80 L80,30 Q50,10 20,30 Z" fill="#4A5568" />
                <path d="M30,30 Q50,10 70,30 L70,70 Q50,90 30,70 Z" fill="#2D3748" />
                <rect x="45" y="20" width="10" height="5" fill="#718096" />
                <path d="M35,25 Q50,35 65,25" fill="none" stroke="#718096" stroke-width="2" />
            </svg>
            <For
                each=move || ctx.items()
                // Position and category in the key so moved or edited icons re-render
                key=|item| (item.id, item.category, item.x.to_bits(), item.y.to_bits())
                children=move |item| view! { <ItemIcon item=item dnd=dnd /> }
            />
        </div>
    }
}
