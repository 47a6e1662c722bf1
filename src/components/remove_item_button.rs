use leptos::prelude::*;

/// "Delete Item" button that asks once before removing `item_name` from the pack
#[component]
pub fn RemoveItemButton(
    #[prop(into)] item_name: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let asking = RwSignal::new(false);
    let prompt = format!("Remove {} from the pack?", item_name);

    view! {
        <div class="remove-item">
            <Show
                when=move || asking.get()
                fallback=move || view! {
                    <button type="button" class="delete-item-btn" on:click=move |_| asking.set(true)>
                        "Delete Item"
                    </button>
                }
            >
                <p class="remove-item-prompt">{prompt.clone()}</p>
                <button type="button" class="confirm-btn" on:click=move |_| on_confirm.run(())>
                    "Remove"
                </button>
                <button type="button" class="cancel-btn" on:click=move |_| asking.set(false)>
                    "Keep"
                </button>
            </Show>
        </div>
    }
}
