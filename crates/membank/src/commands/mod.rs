pub mod audit;
pub mod defaults;
pub mod init;
