// Plain-mode output only: the colored crate routes its TTY/NO_COLOR
// decision through process-global state, so colored strings are not
// byte-stable across test environments.

use packtree_solver::TypeId;

use super::reporter::Reporter;

#[test]
fn resolution_line() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.resolution("java.io.File", "class java.io.File", TypeId::STRING),
        "java.io.File -> class java.io.File"
    );
    assert_eq!(
        reporter.resolution("java.io", "unknown", TypeId::UNKNOWN),
        "java.io -> unknown"
    );
}

#[test]
fn ctor_lines_are_indented() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.ctor_line("new(pathName: string)"),
        "    new(pathName: string)"
    );
    assert_eq!(reporter.ctor_line("new()"), "    new()");
}

#[test]
fn verdict_lines() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.verdict("java.io.File", true), "java.io.File: ok");
    assert_eq!(reporter.verdict("no.such.Class", false), "no.such.Class: FAIL");
}

#[test]
fn summary_lines() {
    let reporter = Reporter::new(false);
    assert_eq!(reporter.check_summary(3, 0), "3 paths checked, all ok");
    assert_eq!(reporter.check_summary(5, 2), "5 paths checked, 2 failed");
}
