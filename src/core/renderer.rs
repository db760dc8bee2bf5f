/// Generic game renderer trait - screens delegate drawing to one of these
use ratatui::Frame;

pub trait GameRenderer<State> {
    /// Pure rendering function - no game logic
    fn render(&self, frame: &mut Frame, state: &State);
}
