use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(version, about)]
pub struct Options {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a database, then look up recognition sequences read from stdin,
    /// one per line. A line holding only `N` stops the session.
    Query {
        /// Enzyme database in REBASE format.
        database: PathBuf,
        /// Which tree to index the database with.
        #[arg(value_enum, ignore_case = true)]
        tree: TreeKind,
    },

    /// Report the tree's shape, search every sequence of a query file, remove
    /// every other one, and report the shape again.
    Stats {
        /// Enzyme database in REBASE format.
        database: PathBuf,
        /// Recognition sequences to search for, one per line.
        queries: PathBuf,
        /// Which tree to index the database with.
        #[arg(value_enum, ignore_case = true)]
        tree: TreeKind,
    },

    /// Print every entry whose sequence lies in `[LOW, HIGH]`.
    Range {
        /// Enzyme database in REBASE format.
        database: PathBuf,
        /// Smallest sequence to print.
        low: String,
        /// Largest sequence to print.
        high: String,
        /// Which tree to index the database with.
        #[arg(long, value_enum, ignore_case = true, default_value_t = TreeKind::Avl)]
        tree: TreeKind,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TreeKind {
    /// Unbalanced binary search tree.
    Bst,
    /// AVL tree.
    Avl,
}
