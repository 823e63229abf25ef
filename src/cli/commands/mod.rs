pub mod backup;
pub mod calendar;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod init;
pub mod log;
pub mod receipt;
pub mod summary;
