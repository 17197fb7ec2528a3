pub mod cli;
pub mod collapse;
pub mod completions;
pub mod config;
pub mod eol;
pub mod fixer;
pub mod fsio;
pub mod line;
pub mod report;
pub mod scan;
pub mod targets;
