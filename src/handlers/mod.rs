pub mod dashboard;
pub mod readings;
