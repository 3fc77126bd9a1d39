use std::path::{Path, PathBuf};
use std::process::{Child, Command};

use crate::error::{LaunchError, Result};

/// A fixed command line (program plus arguments) with a working
/// directory, optionally extended with extra arguments appended after
/// the base arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    program: String,
    args: Vec<String>,
    dir: PathBuf,
}

impl CommandSpec {
    pub fn new(
        name: impl Into<String>,
        program: impl Into<String>,
        args: &[&str],
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            dir: dir.into(),
        }
    }

    /// Append extra arguments, preserving their order.
    pub fn with_extra_args(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Spawn the process. Stdout/stderr are inherited from the
    /// launcher; the caller owns the returned handle and must wait on
    /// it exactly once.
    pub fn spawn(&self) -> Result<Child> {
        Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.dir)
            .spawn()
            .map_err(|source| LaunchError {
                name: self.name.clone(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_keeps_base_command_when_no_extras() {
        let spec = CommandSpec::new("frontend", "pnpm", &["dev"], "frontend");
        assert_eq!(spec.program(), "pnpm");
        assert_eq!(spec.args(), &["dev".to_string()]);
        assert_eq!(spec.dir(), Path::new("frontend"));
    }

    #[test]
    fn extra_args_are_appended_in_order() {
        let extra = vec!["--port".to_string(), "4000".to_string()];
        let spec =
            CommandSpec::new("backend", "deno", &["task", "serve"], "backend")
                .with_extra_args(&extra);
        assert_eq!(
            spec.args(),
            &[
                "task".to_string(),
                "serve".to_string(),
                "--port".to_string(),
                "4000".to_string(),
            ]
        );
    }

    #[test]
    fn empty_extras_leave_args_unchanged() {
        let spec = CommandSpec::new("frontend", "pnpm", &["dev"], "frontend")
            .with_extra_args(&[]);
        assert_eq!(spec.args(), &["dev".to_string()]);
    }

    #[test]
    fn spawn_in_missing_directory_is_a_launch_error() {
        let spec = CommandSpec::new(
            "frontend",
            "pnpm",
            &["dev"],
            "no-such-directory-anywhere",
        );
        let err = spec.spawn().unwrap_err();
        assert_eq!(err.name, "frontend");
        assert!(err.to_string().starts_with("failed to start frontend"));
    }
}
