// Core business logic module

pub mod config;
pub mod media;
pub mod runtime;
pub mod tasks;
pub mod telemetry;

// Re-export commonly used items
pub use config::{Config, ConfigStore, Theme};
pub use runtime::{AppEvent, AppRuntime, RuntimeOptions};
pub use tasks::{TaskKind, TaskOutcome};
pub use telemetry::SystemSnapshot;
