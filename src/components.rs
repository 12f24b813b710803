pub mod field_list_entry;
pub mod navbar;
pub mod performance_chart;
pub mod processing_notice;
pub mod summary_block;
