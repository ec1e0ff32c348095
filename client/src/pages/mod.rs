//! Page components, one per routed view.

pub mod dashboard;
pub mod main_page;
pub mod project;
pub mod signin;
