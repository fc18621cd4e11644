pub mod bootstrap;
pub mod compose;
pub mod config;
pub mod dev_env;
pub mod log;
pub mod paths;
pub mod pipeline;
pub mod preflight;
pub mod scaffold;

// Re-export commonly used types
pub use config::RunConfig;
pub use dev_env::{CommandOutcome, DevEnvironment};
pub use paths::ProjectLayout;
pub use pipeline::PipelineReport;
