pub mod components;
pub mod config;
pub mod dialogs;
pub mod export;
pub mod storage;
