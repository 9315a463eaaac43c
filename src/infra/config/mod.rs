pub mod config_file;

pub use config_file::{
    CONFIG_ENV_VAR, ConfigError, ConfigFile, default_config_path, load_config, load_config_from,
};
