//! MyBackpack Frontend App
//!
//! Controls on top, backpack canvas on the left, weight and forms on the right.

use leptos::prelude::*;

use backpack_core::{PackingList, TripType};

use crate::components::{BackpackCanvas, ItemFormPanel, ItemList, TotalWeight, TripSelector};
use crate::context::BackpackContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let ctx = BackpackContext::new(PackingList::open(BrowserStorage, TripType::default()));
    provide_context(ctx);

    view! {
        <div class="container">
            <h1>"MyBackpack"</h1>
            <div class="controls">
                <TripSelector />
                <button on:click=move |_| ctx.select_for_add()>"Add Item"</button>
                <button on:click=move |_| ctx.show_list.update(|shown| *shown = !*shown)>
                    {move || if ctx.show_list.get() { "Hide List" } else { "Show List" }}
                </button>
            </div>
            <div class="main-content">
                <BackpackCanvas />
                <div class="sidebar">
                    <TotalWeight />
                    <Show when=move || ctx.show_list.get()>
                        <ItemList />
                    </Show>
                    <ItemFormPanel />
                </div>
            </div>
        </div>
    }
}
