pub mod store_field;
pub mod update_status;
