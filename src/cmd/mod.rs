pub mod advance;
pub mod config;
pub mod generate;
pub mod init;
pub mod onboard;
pub mod show;
pub mod status;
