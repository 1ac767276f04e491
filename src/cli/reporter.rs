use colored::Colorize;

use packtree_solver::TypeId;

/// Renders CLI output lines, with ANSI color when writing to a terminal.
///
/// All methods return plain strings; the driver decides which stream they
/// go to.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// One `resolve` result line: `java.io.File -> class java.io.File`.
    ///
    /// Resolved paths render green, fallback results red, so a scan of a
    /// long listing picks out the failures immediately.
    pub fn resolution(&self, path: &str, rendered: &str, result: TypeId) -> String {
        if !self.color {
            return format!("{path} -> {rendered}");
        }

        let rendered = if result == TypeId::UNKNOWN {
            rendered.red().to_string()
        } else {
            rendered.green().to_string()
        };
        format!("{path} -> {rendered}")
    }

    /// One construction-signature line under a `resolve` result, indented
    /// below its resolution line: `    new(pathName: string)`.
    pub fn ctor_line(&self, rendered: &str) -> String {
        if self.color {
            format!("    {}", rendered.dimmed())
        } else {
            format!("    {rendered}")
        }
    }

    /// One `check` verdict line: `java.io.File: ok` / `java.io.Fils: FAIL`.
    pub fn verdict(&self, path: &str, ok: bool) -> String {
        let label = match (ok, self.color) {
            (true, false) => "ok".to_string(),
            (false, false) => "FAIL".to_string(),
            (true, true) => "ok".green().to_string(),
            (false, true) => "FAIL".red().bold().to_string(),
        };
        format!("{path}: {label}")
    }

    /// `check` summary line.
    pub fn check_summary(&self, checked: usize, failed: usize) -> String {
        if failed == 0 {
            let status = if self.color {
                "ok".green().to_string()
            } else {
                "ok".to_string()
            };
            return format!("{checked} paths checked, all {status}");
        }

        let status = if self.color {
            "failed".red().bold().to_string()
        } else {
            "failed".to_string()
        };
        format!("{checked} paths checked, {failed} {status}")
    }
}
