pub mod categories;
pub mod config;
mod context;
pub mod generate;
pub mod init;

pub use categories::run_categories;
pub use config::run_config;
pub use generate::run_generate;
pub use init::{generate_config_template, run_init, run_init_impl};
