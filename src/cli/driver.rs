//! Command dispatch for the packtree binary.
//!
//! Catalog selection happens once, up front: `--catalog <file>` loads and
//! validates a JSON catalog, otherwise the bundled JVM core catalog is
//! used. Every subcommand then runs against that one catalog through a
//! fresh solver.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use packtree_catalog::{Catalog, dump_catalog_json, jvm_core, load_catalog_str};
use packtree_solver::{PathSolver, TypeFormatter, TypeId, TypeInterner};

use crate::cli::args::{CliArgs, Command};
use crate::cli::reporter::Reporter;

/// Exit codes. `check` reports failures through the process status so
/// scripts can gate on it; everything else is success or an `anyhow` error.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECK_FAILED: i32 = 1;

/// Load the catalog named by `--catalog`. `Ok(None)` means no file was
/// given and the bundled catalog should be used instead.
pub fn load_catalog(path: Option<&Path>) -> Result<Option<Catalog>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let catalog = load_catalog_str(&text)
        .with_context(|| format!("invalid catalog in {}", path.display()))?;
    debug!(path = %path.display(), nodes = catalog.len(), "loaded catalog file");
    Ok(Some(catalog))
}

/// Run one parsed command to completion and return the process exit code.
pub fn run(args: &CliArgs, reporter: &Reporter) -> Result<i32> {
    let loaded = load_catalog(args.catalog.as_deref())?;
    let catalog: &Catalog = match &loaded {
        Some(catalog) => catalog,
        None => {
            debug!("no --catalog given, using the bundled JVM core catalog");
            jvm_core()
        }
    };

    let types = TypeInterner::new();
    let solver = PathSolver::new(catalog, &types);

    match &args.command {
        Command::Resolve { paths } => {
            let formatter = TypeFormatter::new(catalog, &types);
            for path in paths {
                let node = solver.resolve_node(path);
                let result = match node {
                    Some(node) => types.class_type(node),
                    None => TypeId::UNKNOWN,
                };
                let rendered = formatter.format(result);
                println!("{}", reporter.resolution(path, &rendered, result));

                // Detail the construction surface of a resolved entity
                if let Some(entity) = node.and_then(|node| catalog.entity(node)) {
                    for ctor in &entity.ctors {
                        println!("{}", reporter.ctor_line(&formatter.format_ctor(ctor)));
                    }
                }
            }
            Ok(EXIT_SUCCESS)
        }

        Command::Paths { prefix } => {
            for path in subtree_paths(&solver, prefix.as_deref()) {
                println!("{path}");
            }
            Ok(EXIT_SUCCESS)
        }

        Command::Check { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read paths file {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read paths from stdin")?;
                    buf
                }
            };

            let report = check_paths(&solver, &text);
            for (path, ok) in &report.verdicts {
                println!("{}", reporter.verdict(path, *ok));
            }
            println!(
                "{}",
                reporter.check_summary(report.verdicts.len(), report.failed)
            );

            if report.failed == 0 {
                Ok(EXIT_SUCCESS)
            } else {
                Ok(EXIT_CHECK_FAILED)
            }
        }

        Command::Dump => {
            let json = dump_catalog_json(catalog).context("failed to serialize catalog")?;
            println!("{json}");
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Class paths, optionally restricted to one dotted subtree.
///
/// The filter is segment-wise: `--prefix a.b` keeps `a.b` itself and
/// everything under `a.b.`, but not `a.bc.D`.
pub fn subtree_paths(solver: &PathSolver<'_>, prefix: Option<&str>) -> Vec<String> {
    let paths = solver.class_paths();
    let Some(prefix) = prefix else {
        return paths;
    };

    paths
        .into_iter()
        .filter(|path| {
            path.as_str() == prefix
                || (path.len() > prefix.len()
                    && path.starts_with(prefix)
                    && path.as_bytes()[prefix.len()] == b'.')
        })
        .collect()
}

/// Outcome of a `check` run, one verdict per checked path.
pub struct CheckReport {
    pub verdicts: Vec<(String, bool)>,
    pub failed: usize,
}

/// Validate a newline-separated path list against the flat path index.
///
/// Blank lines are skipped; `#` starts a comment, whole-line or trailing.
pub fn check_paths(solver: &PathSolver<'_>, text: &str) -> CheckReport {
    let index = solver.path_index();
    let mut verdicts = Vec::new();
    let mut failed = 0usize;

    for line in text.lines() {
        let path = line.split('#').next().unwrap_or("").trim();
        if path.is_empty() {
            continue;
        }

        let ok = index.contains(path);
        if !ok {
            failed += 1;
        }
        verdicts.push((path.to_string(), ok));
    }

    CheckReport { verdicts, failed }
}
