pub mod fields;
pub mod home;
pub mod performance;
