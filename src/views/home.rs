use crate::components::field_list_entry::FieldListEntry;
use crate::models::agrifield::{AgrifieldModel, AGRIFIELD_TABLE};
use crate::DB;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let fields = use_server_future(get_fields)?;
    let fields = fields.value();
    let fields = fields.read();

    let fields = match &*fields {
        Some(Ok(fields)) => fields,
        Some(Err(err)) => return rsx!( "Unable to load fields: {err}" ),
        None => unreachable!(),
    };

    rsx! {
        div {
            h1 { class: "m-2 text-4xl text-white", "Fields" }
            table { class: "w-full border-collapse",
                {fields.iter().enumerate().map(|(i, field)| rsx! {
                    tr { class: "w-full border-field-green border-solid border-[1px] hover:bg-slate-600 rounded-sm text-field-green",
                        FieldListEntry { field: field.clone(), odd: i % 2 != 0 }
                    }
                })}
            }
        }
    }
}

#[server]
async fn get_fields() -> Result<Vec<AgrifieldModel>, ServerFnError> {
    let fields: Vec<AgrifieldModel> = DB.select(AGRIFIELD_TABLE).await?;
    Ok(fields)
}
