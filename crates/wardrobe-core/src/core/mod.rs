pub mod constants;
pub mod engine;
pub mod layout;
pub mod opening;
pub mod result;
pub mod services;
