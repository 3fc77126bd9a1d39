use std::process::Child;

use colored::Colorize;

use crate::command::CommandSpec;
use crate::error::Result;

/// Fixed command for the frontend dev server: `pnpm dev` in `frontend/`.
pub fn frontend_command(extra: &[String]) -> CommandSpec {
    CommandSpec::new("frontend", "pnpm", &["dev"], "frontend").with_extra_args(extra)
}

/// Fixed command for the backend dev server: `deno task serve` in `backend/`.
pub fn backend_command(extra: &[String]) -> CommandSpec {
    CommandSpec::new("backend", "deno", &["task", "serve"], "backend").with_extra_args(extra)
}

/// Announce and spawn a command, returning its handle.
pub fn start(spec: &CommandSpec) -> Result<Child> {
    println!("{}", format!("Running {}...", spec.name()).bold());
    spec.spawn()
}

/// Spawn the frontend dev server and return its handle.
pub fn start_frontend(extra: &[String]) -> Result<Child> {
    start(&frontend_command(extra))
}

/// Spawn the backend dev server and return its handle.
pub fn start_backend(extra: &[String]) -> Result<Child> {
    start(&backend_command(extra))
}

/// Start both dev servers and block until each has exited.
pub fn run() -> Result<()> {
    run_commands(frontend_command(&[]), backend_command(&[]))
}

/// Spawn the frontend command first, then the backend command, then
/// wait on the frontend, then on the backend. The waits are sequential
/// even though both children run concurrently. A spawn failure
/// propagates immediately: the backend is never spawned if the
/// frontend fails to start, and an already-started sibling is left
/// running. Children's exit statuses do not affect the launcher's own
/// exit code.
pub fn run_commands(frontend: CommandSpec, backend: CommandSpec) -> Result<()> {
    let mut frontend = start(&frontend)?;
    let mut backend = start(&backend)?;

    let _ = frontend.wait();
    let _ = backend.wait();

    Ok(())
}
