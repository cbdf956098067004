//! Command implementations for the notegen CLI

pub mod dispatch;
pub mod init;
pub mod status;
pub mod sync;
pub mod transcribe;
