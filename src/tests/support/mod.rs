pub mod app_state_builder;
pub mod auth_helper;
pub mod fixed_clock;
pub mod in_memory_store;
pub mod stubs;
