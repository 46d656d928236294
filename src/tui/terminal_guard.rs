//! Raw mode and the alternate screen, entered once and always left again.
//!
//! The guard leaves the screen mode on drop; a [`ScreenRestore`] handle lets a
//! signal thread do the same. Whichever runs first wins.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub trait ScreenMode: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

/// Raw mode, alternate screen, hidden cursor.
#[derive(Debug, Default)]
pub struct FullScreen;

impl ScreenMode for FullScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        // Every step runs; the first failure is reported.
        let raw = terminal::disable_raw_mode();
        let screen = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
        raw.and(screen)
    }
}

#[derive(Clone)]
pub struct ScreenRestore {
    done: Arc<AtomicBool>,
    mode: Arc<dyn ScreenMode>,
}

impl ScreenRestore {
    /// Leaves the screen mode; later calls are no-ops.
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.mode.leave()
    }
}

pub struct TerminalGuard {
    restore: ScreenRestore,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_mode(Arc::new(FullScreen))
    }

    pub fn with_mode(mode: Arc<dyn ScreenMode>) -> io::Result<Self> {
        mode.enter()?;
        Ok(Self {
            restore: ScreenRestore {
                done: Arc::new(AtomicBool::new(false)),
                mode,
            },
        })
    }

    pub fn restorer(&self) -> ScreenRestore {
        self.restore.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restore.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }

    /// Shell convention: 128 + signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Restores the terminal and exits when SIGINT or SIGTERM arrives.
///
/// The main loop blocks on terminal input, so the handler thread does not wait
/// for it to notice.
#[cfg(unix)]
pub fn install_termination_signals(
    restore: ScreenRestore,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for raw in signals.forever() {
            let Some(signal) = TerminationSignal::from_raw(raw) else {
                continue;
            };
            tracing::info!(?signal, "terminating");
            let _ = restore.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
