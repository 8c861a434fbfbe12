mod config_gen;
mod links;
mod stats;

pub use config_gen::config_generate;
pub use links::{add_link, list_links, remove_link, update_link};
pub use stats::show_stats;
