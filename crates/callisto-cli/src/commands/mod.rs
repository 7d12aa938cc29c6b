pub mod boundary;
pub mod config;
pub mod info;
pub mod label;
pub mod morph;
pub mod pipeline;
