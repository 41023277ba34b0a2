// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Command-line front end: load a REBASE database into a tree, then query
//! it, measure it, or print a key range.

use std::error::Error;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing::debug;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rebase_db::ParseError;
use seqtree::Avl;
use seqtree::Balance;
use seqtree::Entry;
use seqtree::Tree;
use seqtree::Unbalanced;

mod args;

use args::Command;
use args::Options;
use args::TreeKind;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let options = Options::parse();
    return match options.command {
        Command::Query { database, tree } => match tree {
            TreeKind::Bst => query::<Unbalanced>(&database),
            TreeKind::Avl => query::<Avl>(&database),
        },
        Command::Stats { database, queries, tree } => match tree {
            TreeKind::Bst => stats::<Unbalanced>(&database, &queries),
            TreeKind::Avl => stats::<Avl>(&database, &queries),
        },
        Command::Range { database, low, high, tree } => match tree {
            TreeKind::Bst => range::<Unbalanced>(&database, &low, &high),
            TreeKind::Avl => range::<Avl>(&database, &low, &high),
        },
    };
}

/// Build a tree from every (sequence, enzyme) pair of a database file.
fn load<B: Balance>(path: &Path) -> Result<Tree<B>, ParseError> {
    let mut tree = Tree::new();
    let mut sites = 0usize;
    for site in rebase_db::open_database(path)? {
        let site = site?;
        tree.insert(Entry::new(site.sequence, site.enzyme));
        sites += 1;
    }
    info!(tree = B::NAME, sites, path = %path.display(), "loaded database");
    return Ok(tree);
}

fn query<B: Balance>(database: &Path) -> Result<(), Box<dyn Error>> {
    let tree = load::<B>(database)?;
    let mut out = io::stdout().lock();
    writeln!(out, "Enter one recognition sequence per line, or N to quit.")?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let sequence = line.trim();
        if sequence.is_empty() {
            continue;
        }
        if sequence == "N" {
            break;
        }
        tree.write_find(sequence, &mut out)?;
        out.flush()?;
    }
    return Ok(());
}

fn stats<B: Balance>(database: &Path, queries: &Path) -> Result<(), Box<dyn Error>> {
    let mut tree = load::<B>(database)?;
    let queries: Vec<String> = rebase_db::open_queries(queries)?.collect::<Result<_, _>>()?;
    let mut out = io::stdout().lock();

    write_shape(&tree, &mut out)?;

    let mut found = 0usize;
    let mut steps = 0usize;
    for sequence in &queries {
        let probe = tree.find(sequence);
        found += usize::from(probe.found);
        steps += probe.steps;
    }
    writeln!(out, "Successful queries: {}", found)?;
    writeln!(out, "Total queries: {}", queries.len())?;
    writeln!(out, "Average find steps: {}", average(steps, queries.len()))?;

    let mut removed = 0usize;
    let mut attempts = 0usize;
    steps = 0;
    for sequence in queries.iter().step_by(2) {
        let probe = tree.remove(sequence);
        removed += usize::from(probe.found);
        attempts += 1;
        steps += probe.steps;
    }
    debug!(attempts, removed, "removed every other query");
    writeln!(out, "Successful removes: {}", removed)?;
    writeln!(out, "Average remove steps: {}", average(steps, attempts))?;

    writeln!(out, "After removals:")?;
    write_shape(&tree, &mut out)?;
    return Ok(());
}

fn range<B: Balance>(database: &Path, low: &str, high: &str) -> Result<(), Box<dyn Error>> {
    let tree = load::<B>(database)?;
    debug!(low, high, "printing range");
    tree.print_between(low, high)?;
    return Ok(());
}

fn write_shape<B: Balance>(tree: &Tree<B>, out: &mut impl Write) -> io::Result<()> {
    let stats = tree.stats();
    writeln!(out, "Nodes: {}", stats.nodes)?;
    match stats.average_depth() {
        Ok(depth) => writeln!(out, "Average depth: {:.4}", depth)?,
        Err(err) => writeln!(out, "Average depth: undefined ({})", err)?,
    }
    match stats.ratio() {
        Ok(ratio) => writeln!(out, "Average depth / log2(n): {:.4}", ratio)?,
        Err(err) => writeln!(out, "Average depth / log2(n): undefined ({})", err)?,
    }
    return Ok(());
}

fn average(total: usize, count: usize) -> String {
    if count == 0 {
        return "n/a".to_string();
    }
    return format!("{:.2}", total as f64 / count as f64);
}
