//! UI Components
//!
//! Leptos views over the packing list context.

mod trip_selector;
mod backpack_canvas;
mod item_icon;
mod item_form;
mod item_list;
mod total_weight;
mod remove_item_button;

pub use trip_selector::TripSelector;
pub use backpack_canvas::BackpackCanvas;
pub use item_icon::ItemIcon;
pub use item_form::ItemFormPanel;
pub use item_list::ItemList;
pub use total_weight::TotalWeight;
pub use remove_item_button::RemoveItemButton;
