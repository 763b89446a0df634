//! FabLabel command-line application: bootstrap and commands on top of the
//! `fl-*` crates.

pub mod bootstrap;
pub mod cli;
pub mod commands;
