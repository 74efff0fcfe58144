pub mod config;
pub mod errors;
pub mod interfaces;
pub mod services;
pub mod utils;
