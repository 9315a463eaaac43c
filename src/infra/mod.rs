pub mod config;
pub mod input;
pub mod observer;

pub use config::{ConfigError, ConfigFile, load_config};
pub use input::{InputError, QuerySource};
pub use observer::TracingScanObserver;
