//! Application layer - Use cases and orchestration

pub mod generate;
pub mod manage_config;

pub use generate::{GenerateRequest, GenerateService, Generation};
pub use manage_config::ConfigService;
