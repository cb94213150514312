//! CLI command definitions and dispatch for the `amity` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod chat;
pub mod levels;
pub mod personas;

use clap::{Parser, Subcommand};

/// Chat with a companion that grows on you.
#[derive(Parser)]
#[command(name = "amity", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up a companion and start chatting.
    Chat {
        /// Companion display name. Prompted for when omitted.
        #[arg(long)]
        name: Option<String>,

        /// Personality key: study-buddy, friend, or confidant.
        /// Prompted for when omitted.
        #[arg(long)]
        persona: Option<String>,
    },

    /// List the available personalities.
    Personas,

    /// Show the friendship ladder.
    Levels,
}
