#[macro_use]
extern crate lazy_static;

pub mod archive;
pub mod cli;
pub mod config;
pub mod downloader;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod lister;
pub mod models;
pub mod prompt;
pub mod requester;
pub mod saver;
pub mod scheduler;
pub mod stitcher;

mod util;
