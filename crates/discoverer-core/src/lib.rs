pub mod config;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod error;
pub mod extract;
pub mod reindex;
pub mod site_config;
pub mod summary;
pub mod url_model;
