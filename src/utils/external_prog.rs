use std::{
    io::Write,
    os::unix::prelude::AsRawFd,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use memfd::MemfdOptions;
use subprocess::unix::PopenExt;

/// Run a script embedded in the binary without unpacking it to disk.
///
/// The script is written into a memfd and executed through /proc/<pid>/fd,
/// so it has to start with a shebang line. Ctrl+C is forwarded to the child
/// instead of killing it outright.
pub fn run_embedded_script(script: &[u8], args: &[&str]) -> anyhow::Result<()> {
    let mfd = MemfdOptions::default().create("embedded-script")?;
    mfd.as_file().write_all(script)?;
    let script_fd = mfd.as_file().as_raw_fd();

    let mut popen = subprocess::Exec::cmd(format!(
        "/proc/{}/fd/{}",
        nix::unistd::getpid(),
        script_fd
    ))
    .args(args)
    .popen()?;

    let interrupted = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&interrupted))?;

    let status = loop {
        if let Some(status) = popen.wait_timeout(Duration::from_millis(200))? {
            break status;
        }
        if interrupted.load(Ordering::Relaxed) {
            _ = popen.send_signal(libc::SIGINT);
            break popen.wait()?;
        }
    };

    if status.success() {
        Ok(())
    } else {
        Err(anyhow::format_err!(
            "embedded script exited with exit code {:?}",
            status
        ))
    }
}
