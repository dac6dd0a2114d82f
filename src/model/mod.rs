pub mod build_details;
pub mod build_report;
pub mod build_status;
pub mod scm;
