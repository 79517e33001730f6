//! taskpick CLI - terminal front end for taskpick-core

pub mod cli;
pub mod commands;
pub mod selector;
