//! Item List Component
//!
//! Plain list of the trip's items, toggled from the controls.

use leptos::prelude::*;

use crate::context::use_backpack;

#[component]
pub fn ItemList() -> impl IntoView {
    let ctx = use_backpack();

    view! {
        <div class="item-list">
            <h3>"Item List"</h3>
            <ul>
                <For
                    each=move || ctx.items()
                    // Key on the displayed fields so edits re-render the row
                    key=|item| (item.id, item.name.clone(), item.category, item.weight.to_bits())
                    children=move |item| {
                        let icon_class = format!("fas {}", item.category.icon());
                        view! {
                            <li>
                                <span><i class=icon_class></i>" "{item.name.clone()}</span>
                                <span>{format!("{} kg", item.weight)}</span>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
