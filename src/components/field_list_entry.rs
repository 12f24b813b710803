use crate::models::agrifield::AgrifieldModel;
use dioxus::prelude::*;

#[component]
pub fn FieldListEntry(field: AgrifieldModel, odd: bool) -> Element {
    let background = if odd { "bg-slate-800" } else { "" };
    let status = field.status.label();

    rsx! {
        td { class: "p-2 px-3 rounded-s-md {background}", {field.performance_url_element()} }
        td { class: "p-2 px-3 {background}",
            Link {
                to: crate::Route::Fields {
                    owner: field.owner.clone(),
                },
                "{field.owner}"
            }
        }
        td { class: "p-2 px-3 {background}", "{field.crop_type}" }
        td { class: "p-2 px-3 {background}", "{field.irrigation_type}" }
        td { class: "p-2 px-3 {background}", "{status}" }
        td { class: "p-2 px-3 rounded-e-md {background}", "{field.days()} days" }
    }
}
