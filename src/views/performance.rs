use crate::chart::{
    render,
    summary::{applied_irrigation_sum, estimated_irrigation_sum, percentage_diff},
    NumberFormat, ViewModel,
};
use crate::components::{
    performance_chart::PerformanceChart, processing_notice::ProcessingNotice,
    summary_block::SummaryBlock,
};
use crate::models::agrifield::AgrifieldModel;
use crate::DB;
use dioxus::prelude::*;

#[component]
pub fn Performance(owner: String, field: i64) -> Element {
    let view = use_server_future(move || get_field_performance(owner.clone(), field))?;
    let view = view.value();
    let view = view.read();

    let view = match &*view {
        Some(Ok(view)) => view,
        Some(Err(err)) => return rsx!( "Unable to load field: {err}" ),
        None => unreachable!(),
    };

    rsx! {
        div {
            h1 { class: "m-y-2 text-4xl text-white", "Irrigation performance: {view.title}" }
            h2 { class: "m-y-2 text-xl text-gray-300", "{view.subtitle}" }

            if view.is_processing {
                ProcessingNotice {}
            }

            if view.show_summary {
                SummaryBlock { totals: view.totals.clone(), number_format: NumberFormat::Plain }
            }

            PerformanceChart { view: view.clone() }

            a {
                class: "m-2 inline-block hover:underline text-white",
                href: "{view.download_url}",
                "Download as a spreadsheet"
            }
        }
    }
}

#[server]
pub async fn get_field_performance(owner: String, field: i64) -> Result<ViewModel, ServerFnError> {
    let mut results = DB
        .query(
            r#"SELECT * FROM agrifield
            WHERE id = type::thing("agrifield", $field)
            AND owner = $owner
            "#,
        )
        .bind(("field", field))
        .bind(("owner", owner.clone()))
        .await?;
    let agrifield: Option<AgrifieldModel> = results.take(0)?;

    let Some(agrifield) = agrifield else {
        return Err(format!("Agrifield {field} of {owner} not found")).map_err(ServerFnError::new);
    };

    let (applied, diff) = match &agrifield.results {
        Some(results) => {
            let applied = applied_irrigation_sum(results);
            (applied, percentage_diff(applied, estimated_irrigation_sum(results)))
        }
        None => (0.0, None),
    };

    Ok(render(&agrifield, applied, diff))
}
