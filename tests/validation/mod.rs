pub mod core;
pub mod status;
