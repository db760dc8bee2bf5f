/// Hangman-specific renderer - draws a round snapshot, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::renderer::GameRenderer;
use crate::games::hangman::game::{Outcome, RoundState, MISTAKE_LIMIT, SCORE_STEPS};
use crate::games::hangman::words::Category;

const GALLOWS: [&str; SCORE_STEPS as usize] = [
    " +---+\n |   |\n     |\n     |\n     |\n=======",
    " +---+\n |   |\n O   |\n     |\n     |\n=======",
    " +---+\n |   |\n O   |\n/|\\  |\n     |\n=======",
    " +---+\n |   |\n O   |\n/|\\  |\n/ \\  |\n=======",
];

/// Everything the game screen shows besides the category.
pub struct HangmanView<'a> {
    pub round: &'a RoundState,
    pub message: &'a str,
}

pub struct HangmanRenderer {
    category: Category,
}

impl HangmanRenderer {
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    fn keyboard(round: &RoundState) -> Vec<Line<'static>> {
        let row = |letters: std::ops::RangeInclusive<char>| {
            let spans: Vec<Span> = letters
                .map(|c| {
                    let style = if !round.has_guessed(c) {
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                    } else if round.contains(c) {
                        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
                    } else {
                        Style::default().fg(Color::Red).add_modifier(Modifier::CROSSED_OUT)
                    };
                    Span::styled(format!("{c} "), style)
                })
                .collect();
            Line::from(spans)
        };
        vec![row('A'..='M'), row('N'..='Z')]
    }

    fn controls(outcome: Outcome) -> &'static str {
        match outcome {
            Outcome::InProgress => "Type a letter to guess  [Esc] Categories",
            Outcome::Won => "[N] Next word  [X] Exit",
            Outcome::Lost => "[R] Retry  [X] Exit",
        }
    }
}

impl<'a> GameRenderer<HangmanView<'a>> for HangmanRenderer {
    fn render(&self, frame: &mut Frame, view: &HangmanView<'a>) {
        let round = view.round;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Category + hint
                Constraint::Length(3), // Word
                Constraint::Min(8),    // Gallows + keyboard
                Constraint::Length(3), // Message
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        let header = Paragraph::new("🎩 ═══ HANGMAN ═══ 🎩")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let mut info = vec![Line::from(format!("Category: {}", self.category.display_name()))];
        if !round.outcome().is_over() {
            info.push(Line::from(format!("Hint: {}", round.hint())));
        }
        frame.render_widget(Paragraph::new(info).block(Block::default().borders(Borders::ALL)), chunks[1]);

        let word: Vec<String> = round.reveal().iter().map(char::to_string).collect();
        let word_style = match round.outcome() {
            Outcome::Won => Style::default().fg(Color::Green),
            Outcome::Lost => Style::default().fg(Color::Red),
            Outcome::InProgress => Style::default(),
        };
        frame.render_widget(
            Paragraph::new(word.join(" "))
                .block(Block::default().borders(Borders::ALL).title("Word"))
                .style(word_style.add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[2],
        );

        let play_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(chunks[3]);

        let stage = usize::from(round.mistakes()).min(GALLOWS.len() - 1);
        frame.render_widget(
            Paragraph::new(GALLOWS[stage]).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Mistakes: {}/{}", round.mistakes(), MISTAKE_LIMIT)),
            ),
            play_area[0],
        );
        frame.render_widget(
            Paragraph::new(Self::keyboard(round))
                .block(Block::default().borders(Borders::ALL).title("Letters"))
                .alignment(Alignment::Center),
            play_area[1],
        );

        frame.render_widget(
            Paragraph::new(view.message)
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().fg(Color::Yellow)),
            chunks[4],
        );
        frame.render_widget(
            Paragraph::new(Self::controls(round.outcome())).alignment(Alignment::Center),
            chunks[5],
        );
    }
}
