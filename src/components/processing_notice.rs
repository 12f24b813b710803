use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_regular_icons::FaClock, Icon};

/// Shown while the irrigation model has not finished for the field.
#[component]
pub fn ProcessingNotice() -> Element {
    rsx! {
        div { class: "m-2 p-3 flex items-center gap-2 rounded-md bg-yellow-100 text-yellow-900",
            Icon { width: 18, height: 18, fill: "currentColor", icon: FaClock }
            span {
                "The irrigation model is still running for this field. "
                "The results below may be stale or incomplete."
            }
        }
    }
}
