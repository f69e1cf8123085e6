// Command-line front end: argument parsing, subcommand handlers and text
// reports.

pub mod cli;
pub mod commands;
pub mod report;
