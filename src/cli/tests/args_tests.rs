use clap::Parser;
use std::path::PathBuf;

use super::args::{CliArgs, Command};

#[test]
fn parses_resolve() {
    let args = CliArgs::try_parse_from(["packtree", "resolve", "java.io.File", "x.y"])
        .expect("resolve args should parse");

    assert!(args.catalog.is_none());
    match args.command {
        Command::Resolve { paths } => assert_eq!(paths, vec!["java.io.File", "x.y"]),
        other => panic!("expected resolve, got {other:?}"),
    }
}

#[test]
fn resolve_requires_at_least_one_path() {
    assert!(CliArgs::try_parse_from(["packtree", "resolve"]).is_err());
}

#[test]
fn parses_paths_with_prefix() {
    let args = CliArgs::try_parse_from(["packtree", "paths", "--prefix", "java.util"])
        .expect("paths args should parse");

    match args.command {
        Command::Paths { prefix } => assert_eq!(prefix.as_deref(), Some("java.util")),
        other => panic!("expected paths, got {other:?}"),
    }

    let bare = CliArgs::try_parse_from(["packtree", "paths"]).expect("bare paths should parse");
    match bare.command {
        Command::Paths { prefix } => assert!(prefix.is_none()),
        other => panic!("expected paths, got {other:?}"),
    }
}

#[test]
fn parses_check() {
    let args = CliArgs::try_parse_from(["packtree", "check", "paths.txt"])
        .expect("check args should parse");
    match args.command {
        Command::Check { file } => {
            assert_eq!(file, Some(PathBuf::from("paths.txt")));
        }
        other => panic!("expected check, got {other:?}"),
    }

    let stdin = CliArgs::try_parse_from(["packtree", "check"]).expect("bare check should parse");
    match stdin.command {
        Command::Check { file } => assert!(file.is_none()),
        other => panic!("expected check, got {other:?}"),
    }
}

#[test]
fn parses_dump() {
    let args = CliArgs::try_parse_from(["packtree", "dump"]).expect("dump args should parse");
    assert!(matches!(args.command, Command::Dump));
}

#[test]
fn catalog_flag_is_global() {
    // Before the subcommand
    let args = CliArgs::try_parse_from(["packtree", "--catalog", "cat.json", "dump"])
        .expect("leading --catalog should parse");
    assert_eq!(args.catalog, Some(PathBuf::from("cat.json")));

    // After the subcommand
    let args =
        CliArgs::try_parse_from(["packtree", "resolve", "--catalog", "cat.json", "java.io.File"])
            .expect("trailing --catalog should parse");
    assert_eq!(args.catalog, Some(PathBuf::from("cat.json")));
}

#[test]
fn missing_subcommand_is_an_error() {
    assert!(CliArgs::try_parse_from(["packtree"]).is_err());
}
