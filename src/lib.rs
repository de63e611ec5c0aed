pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod server;
pub mod storage;
