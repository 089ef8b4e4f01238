mod env;
mod logging;

pub use env::{
    load_dotenv, parse_log_level, resolve_log_level, resolve_seed, LOG_LEVEL_VAR, SEED_VAR,
};
pub use logging::setup_logging;
