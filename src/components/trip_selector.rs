//! Trip Selector Component
//!
//! Switching trips swaps the whole packing list.

use leptos::prelude::*;

use backpack_core::TripType;

use crate::context::use_backpack;

#[component]
pub fn TripSelector() -> impl IntoView {
    let ctx = use_backpack();

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<TripType>() {
            Ok(trip) => ctx.select_trip(trip),
            Err(e) => log::warn!("[TRIP] {}", e),
        }
    };

    view! {
        <select class="trip-selector" on:change=on_change>
            {TripType::ALL.into_iter().map(|trip| {
                let is_selected = move || ctx.trip() == trip;
                view! {
                    <option value=trip.label() selected=is_selected>
                        {trip.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
