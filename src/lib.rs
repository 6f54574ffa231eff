// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod config;
pub mod locale;
pub mod model;
pub mod paths;
pub mod storage;
