#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod render;
pub mod tool;
pub mod util;

pub use pipeline::tree;
