//! Command line front end for the feed filter.
pub mod cli;
pub mod config;
pub mod run;
