use crate::components::field_list_entry::FieldListEntry;
use crate::models::agrifield::AgrifieldModel;
use crate::DB;
use dioxus::prelude::*;

#[component]
pub fn Fields(owner: String) -> Element {
    let title = format!("Fields of {owner}");
    let fields = use_server_future(move || get_owner_fields(owner.clone()))?;
    let fields = fields.value();
    let fields = fields.read();

    let fields = match &*fields {
        Some(Ok(fields)) => fields,
        Some(Err(err)) => return rsx!( "Unable to load fields: {err}" ),
        None => unreachable!(),
    };

    rsx! {
        div {
            h1 { class: "m-2 text-4xl text-white", "{title}" }
            if fields.is_empty() {
                p { class: "m-2 text-white", "No fields yet." }
            }
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
async fn get_owner_fields(owner: String) -> Result<Vec<AgrifieldModel>, ServerFnError> {
    let mut results = DB
        .query("SELECT * FROM agrifield WHERE owner = $owner ORDER BY name")
        .bind(("owner", owner))
        .await?;
    let fields: Vec<AgrifieldModel> = results.take(0)?;
    Ok(fields)
}
