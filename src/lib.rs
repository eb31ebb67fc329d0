pub mod cli;
pub mod db;
pub mod demo;
pub mod ipc;
pub mod logging;
pub mod reports;
