mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    GenerationSettings, LoggingSettings, PaginationSettings, ServerSettings, Settings,
};
