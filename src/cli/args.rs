use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the packtree binary.
#[derive(Parser, Debug)]
#[command(
    name = "packtree",
    version,
    about = "Static package-path resolution for scripting-host class catalogs"
)]
pub struct CliArgs {
    /// Path to a catalog JSON file. Defaults to the bundled JVM core catalog.
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve dotted paths and print the type each one names.
    Resolve {
        /// Paths to resolve (e.g. `java.io.File`).
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Print every valid class path in the catalog, in declaration order.
    Paths {
        /// Only print paths inside this dotted subtree.
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Bulk-validate a list of paths (one per line, `#` starts a comment).
    ///
    /// Exits with status 1 when any path fails to resolve.
    Check {
        /// File of paths to validate; stdin when omitted.
        file: Option<PathBuf>,
    },

    /// Re-serialize the active catalog as pretty-printed JSON on stdout.
    Dump,
}
