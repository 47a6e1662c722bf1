use leptos::prelude::*;

use backpack_core::Item;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::context::use_backpack;

/// One item on the canvas. A click without drag movement opens the edit form.
#[component]
pub fn ItemIcon(item: Item, dnd: DndSignals) -> impl IntoView {
    let ctx = use_backpack();
    let id = item.id;

    let on_mousedown = make_on_mousedown(dnd, id.0);
    let icon_class = format!("fas {}", item.category.icon());
    let item_class = move || {
        if dnd.is_dragging(id.0) { "item-icon dragging" } else { "item-icon" }
    };

    view! {
        <div
            class=item_class
            style:left=format!("{}px", item.x)
            style:top=format!("{}px", item.y)
            title=item.name.clone()
            on:mousedown=on_mousedown
            on:click=move |_| {
                if !dnd.suppress_click() {
                    ctx.select(id);
                }
            }
        >
            <i class=icon_class></i>
        </div>
    }
}
