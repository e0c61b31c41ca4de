//! Contains [Args], which are parsed command-line flags.

use clap::{Parser, Subcommand};
use flow::NodeCategory;

use crate::steps::Step;

/// Parsed command line arguments.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "flow-builder",
    about = "Inspect the connection rules of the flow editor and replay editing sessions."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[cfg(debug_assertions)]
    /// Disable debug logging. This option only exists if `debug_assertions` are
    /// enabled.
    #[arg(long, global = true)]
    pub no_debug_logging: bool,

    #[cfg(debug_assertions)]
    /// Enable debug error log panics. This option only exists if
    /// `debug_assertions` are enabled.
    #[arg(long, global = true, conflicts_with = "no_debug_logging")]
    pub debug_error_log_panics: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print which source categories may connect to which target categories.
    Matrix,

    /// Check a single source/target category pair. Exits with an error status
    /// if the connection is not allowed.
    Check {
        /// Category of the source node (start, end, connector, transformation
        /// or job).
        source: NodeCategory,

        /// Category of the target node.
        target: NodeCategory,
    },

    /// List the components that can be dropped onto the canvas.
    Palette,

    /// Replay editing steps against a new graph and print the result.
    ///
    /// Steps are `drop:<kind>[@x]`, `connect:<source>:<target>`,
    /// `select:<id>`, `delete`, and `rename:<id>:<label>`.
    Session {
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

impl Default for Args {
    fn default() -> Self {
        Self::parse()
    }
}
