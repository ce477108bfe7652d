mod config;
pub mod controller;
pub mod live;
pub mod mocks;
pub mod notify;
pub mod runner;
pub mod state;

pub use config::{ConfigError, UniformCheckConfig};
