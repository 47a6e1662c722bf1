use leptos::prelude::*;

use backpack_core::format_weight;

use crate::context::use_backpack;

#[component]
pub fn TotalWeight() -> impl IntoView {
    let ctx = use_backpack();

    view! {
        <div class="total-weight">
            <h3>"Total Weight"</h3>
            <p>{move || format!("{} kg", format_weight(ctx.total_weight()))}</p>
        </div>
    }
}
