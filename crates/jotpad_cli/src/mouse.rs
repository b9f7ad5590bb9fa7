//! Terminal mouse capture as the document-level pointer listener.

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use jotpad_core::PointerSource;
use log::warn;
use std::io::{self, Write};

/// Enables mouse reporting on `out` while attached.
pub struct MouseCapture<W: Write> {
    out: W,
}

impl<W: Write> MouseCapture<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> PointerSource for MouseCapture<W> {
    type Error = io::Error;

    fn attach(&mut self) -> io::Result<()> {
        execute!(self.out, EnableMouseCapture)
    }

    fn detach(&mut self) {
        if let Err(err) = execute!(self.out, DisableMouseCapture) {
            warn!(
                "event=mouse_capture_release module=cli status=error kind={:?}",
                err.kind()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MouseCapture;
    use jotpad_core::PointerSubscription;

    #[test]
    fn capture_sequences_are_written_on_acquire_and_drop() {
        let mut buffer = Vec::new();
        {
            let subscription =
                PointerSubscription::acquire(MouseCapture::new(&mut buffer)).expect("attach");
            drop(subscription);
        }
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\u{1b}[?1000h"));
        assert!(written.contains("\u{1b}[?1000l"));
    }
}
