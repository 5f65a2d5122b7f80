#![forbid(unsafe_code)]

pub mod aggregate;
pub mod api;
pub mod chapters;
pub mod cli;
pub mod fetch;
pub mod logging;
pub mod normalize;
pub mod site;
pub mod title;
