//! Restore the terminal before a panic message is printed.

use std::panic;

use super::setup::restore_terminal;

/// Chain a terminal restore in front of the current panic hook.
///
/// Call after `color_eyre::install()` so its report is printed on a usable
/// terminal.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        tracing::error!(panic = %info, "Client panicked");
        previous(info);
    }));
}
