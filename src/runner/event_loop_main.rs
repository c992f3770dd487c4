use crate::app::settings::Settings;
use crate::app::App;
use crate::data::DataManager;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, TerminalError};
use crate::ui;

use std::time::Duration;

/// Load the fixtures, take over the terminal and run until the user quits.
pub fn run_app(settings: Settings) -> anyhow::Result<()> {
    let data = DataManager::load(&settings.data_paths());

    let mut terminal = init_terminal()?;
    let size = terminal.size()?;
    let mut app = App::new(settings, data, (size.width, size.height));

    let result = event_loop(&mut terminal, &mut app);
    let restored = restore_terminal(terminal);
    finish(result, restored)
}

// The loop error wins; a restore failure on top of it is only logged.
fn finish(result: anyhow::Result<()>, restored: Result<(), TerminalError>) -> anyhow::Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!("failed to restore terminal: {}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => Ok(restored?),
    }
}

fn event_loop(terminal: &mut crate::runner::terminal::Tui, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if !poll(Duration::from_millis(100))? {
            continue;
        }
        match read_event()? {
            InputEvent::Key(key) => {
                if handlers::handle_key(app, key) {
                    tracing::info!("quit requested");
                    return Ok(());
                }
            }
            InputEvent::Mouse(me) => handlers::handle_mouse(app, me),
            InputEvent::Resize(w, h) => app.on_resize(w, h),
            InputEvent::Other => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn restore_failure() -> Result<(), TerminalError> {
        Err(TerminalError::Io(io::Error::new(io::ErrorKind::Other, "restore failed")))
    }

    #[test]
    fn loop_error_is_kept_when_restore_also_fails() {
        let err = finish(Err(anyhow::anyhow!("draw failed")), restore_failure()).unwrap_err();
        assert_eq!(err.to_string(), "draw failed");
    }

    #[test]
    fn restore_error_surfaces_after_clean_loop() {
        let err = finish(Ok(()), restore_failure()).unwrap_err();
        assert!(err.to_string().contains("restore failed"));
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
