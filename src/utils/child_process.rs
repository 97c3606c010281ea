//! Fire-and-forget spawning of external programs.

use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

/// Spawns `command` through the shell in its own session. The child is
/// intentionally not tracked: exit status and output are discarded, and
/// reaping is left to the `SIGCHLD` disposition installed at startup.
pub fn spawn(command: &str) {
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    unsafe {
        // Detach from our process group so the child outlives us and
        // never receives our terminal signals.
        cmd.pre_exec(|| {
            libc::setsid();
            Ok(())
        });
    }
    match cmd.spawn() {
        Ok(child) => tracing::debug!("spawned {command} as pid {}", child.id()),
        Err(err) => tracing::error!("failed to spawn {command}: {err}"),
    }
}

/// Tells the kernel to reap our children automatically so short-lived
/// spawned programs never linger as zombies.
pub fn register_child_hook() {
    unsafe {
        libc::signal(libc::SIGCHLD, libc::SIG_IGN);
    }
}
