use crate::chart::{payload::chart_script, ChartPayload, ViewModel};
use dioxus::prelude::*;

pub const CHART_ELEMENT_ID: &str = "performance-chart";

/// Column chart of the view's three series. Redrawn whenever the container is resized.
#[component]
pub fn PerformanceChart(view: ViewModel) -> Element {
    let mut chart_width = use_signal(|| 0.0_f64);
    let payload = ChartPayload::from(&view);

    use_effect(move || {
        let width = chart_width();
        if width <= 0.0 {
            return;
        }
        let script = chart_script(CHART_ELEMENT_ID, &payload, view.bar_width(width));
        document::eval(&script);
    });

    rsx! {
        div {
            id: CHART_ELEMENT_ID,
            class: "m-2 h-96 rounded-md bg-white",
            onresize: move |event| {
                if let Ok(size) = event.data().get_content_box_size() {
                    chart_width.set(size.width);
                }
            },
        }
    }
}
