//! Item Form Component
//!
//! Add and edit form. Raw field strings are parsed by `ItemDraft::parse`;
//! validation errors are shown inline and nothing is saved.

use leptos::prelude::*;

use backpack_core::{Category, Item, ItemDraft, Selection};

use crate::components::RemoveItemButton;
use crate::context::use_backpack;

/// Shows the add or edit form for the current selection
#[component]
pub fn ItemFormPanel() -> impl IntoView {
    let ctx = use_backpack();
    // Re-render only when the selection changes, not on every list change
    let selection = Memo::new(move |_| ctx.selection());

    move || match selection.get() {
        Selection::Idle => None,
        Selection::Adding => Some(view! { <ItemForm item=None /> }.into_any()),
        Selection::Editing(_) => ctx
            .selected_item_untracked()
            .map(|item| view! { <ItemForm item=Some(item) /> }.into_any()),
    }
}

#[component]
pub fn ItemForm(item: Option<Item>) -> impl IntoView {
    let ctx = use_backpack();
    let editing_id = item.as_ref().map(|item| item.id);
    let editing_name = item.as_ref().map(|item| item.name.clone());

    let (name, set_name) = signal(item.as_ref().map(|item| item.name.clone()).unwrap_or_default());
    let (category, set_category) = signal(item.as_ref().map(|item| item.category).unwrap_or_default());
    let (weight, set_weight) = signal(item.as_ref().map(|item| item.weight.to_string()).unwrap_or_default());
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = ItemDraft::parse(
            &name.get_untracked(),
            category.get_untracked().as_str(),
            &weight.get_untracked(),
        )
        .and_then(|draft| match editing_id {
            Some(id) => ctx.update_item(id, draft.into()),
            None => ctx.add_item(draft),
        });
        if let Err(e) = result {
            set_error.set(Some(e.to_string()));
        }
    };

    let on_category_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<Category>() {
            Ok(parsed) => set_category.set(parsed),
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="item-form">
            <h3>{if editing_id.is_some() { "Edit Item" } else { "Add Item" }}</h3>
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Item name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <select on:change=on_category_change>
                    {Category::ALL.into_iter().map(|option| {
                        view! {
                            <option value=option.as_str() selected=move || category.get() == option>
                                {option.as_str()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <input
                    type="number"
                    placeholder="Weight (kg)"
                    step="0.1"
                    min="0"
                    prop:value=move || weight.get()
                    on:input=move |ev| set_weight.set(event_target_value(&ev))
                />
                <button type="submit">"Save"</button>
                <button type="button" on:click=move |_| ctx.clear_selection()>"Cancel"</button>
            </form>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            {editing_id.zip(editing_name).map(|(id, item_name)| view! {
                <RemoveItemButton
                    item_name=item_name
                    on_confirm=move |_: ()| ctx.delete_item(id)
                />
            })}
        </div>
    }
}
