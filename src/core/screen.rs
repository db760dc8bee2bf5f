use crossterm::event::KeyEvent;
use ratatui::Frame;

/// A full-screen view driven by [`Engine`](super::engine::Engine).
///
/// Screens own their state; the engine only forwards key presses and asks for frames.
pub trait Screen {
    /// What the screen hands back when it is done.
    type Exit;

    /// React to a key press. Returning `Some` ends the screen.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Exit>;

    /// Draw the current state into the frame. No state changes here.
    fn render(&self, frame: &mut Frame);
}
