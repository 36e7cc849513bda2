// Presentation layer - Command line surface and console output
pub mod cli;
pub mod command;
pub mod report;
