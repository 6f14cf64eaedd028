pub mod calendar;
pub mod cli;
pub mod error;
pub mod git;
pub mod logging;
pub mod model;
pub mod registry;
pub mod render;
pub mod scan;
pub mod stats;
pub mod util;
