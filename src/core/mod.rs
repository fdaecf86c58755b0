pub mod host_registry;
pub mod interfaces;
pub mod models;
pub mod orchestrators;
pub mod response_interpreter;
