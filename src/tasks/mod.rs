pub mod install_dependencies;
pub mod run_pipeline;

pub mod convert_dataset;
pub mod fix_dashboard;
pub mod fix_unicode;
