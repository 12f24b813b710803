use crate::chart::{summary::summary_lines, NumberFormat, Totals};
use dioxus::prelude::*;

#[component]
pub fn SummaryBlock(totals: Totals, number_format: NumberFormat) -> Element {
    let lines = summary_lines(&totals, number_format);

    rsx! {
        dl { class: "m-2 grid grid-cols-2 gap-x-4 gap-y-1 text-white",
            {lines.into_iter().map(|line| rsx! {
                dt { class: "font-semibold", "{line.label}:" }
                dd { "{line.value}" }
            })}
        }
    }
}
