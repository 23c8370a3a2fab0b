use clap::Parser;
use pypig::cli::Cli;
use pypig::logging;
use std::process::ExitCode;

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: only changes the signal disposition back to the POSIX default.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() -> ExitCode {
    reset_sigpipe();

    let cli = Cli::parse();
    let result = logging::init(cli.verbose).and_then(|()| pypig::run(cli));
    match result {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}
