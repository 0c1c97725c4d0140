//! Terminal setup and restoration

use ecourse_core::prelude::*;

/// Enter raw mode and the alternate screen
///
/// Also installs ratatui's panic hook, which restores the terminal before
/// chaining to the previously installed hook.
pub fn init() -> Result<ratatui::DefaultTerminal> {
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode and the alternate screen
pub fn restore() {
    ratatui::restore();
}

/// Install a panic hook that writes the panic to the log file
///
/// Only logs. Terminal restoration belongs to the hook `init` installs, and
/// the report on stderr to color-eyre's hook, which this one chains to.
/// Call before `init` so the terminal is restored first.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        error!("Panic: {}", panic_info);
        original_hook(panic_info);
    }));
}
