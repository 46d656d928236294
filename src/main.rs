use ism::app::editor::{Editor, ScratchEditor};
use ism::app::{build_main_frame, event_loop, settings};
use ism::tui::terminal_guard::TerminalGuard;
use ism::ui::backend::terminal::RatatuiTerminal;
use ism::ui::backend::Backend;
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

mod logging;

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Some(guard) = &logging {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    if let Err(err) = settings::ensure_settings_file() {
        tracing::error!(error = %err, "ensure_settings_file failed");
    }
    let settings = settings::load_settings();

    let editor: Rc<RefCell<dyn Editor>> = Rc::new(RefCell::new(ScratchEditor::new()));
    let mut frame = build_main_frame(editor, settings.keymap()).map_err(io::Error::other)?;

    let guard = TerminalGuard::new()?;
    #[cfg(unix)]
    ism::tui::terminal_guard::install_termination_signals(guard.restorer())?;

    let mut terminal = RatatuiTerminal::new(io::stdout())?;
    terminal.register_palette(settings.palette());

    let result = event_loop::run(&mut terminal, &mut frame);
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "main loop failed");
    }
    result
}
