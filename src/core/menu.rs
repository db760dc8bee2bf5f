use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::core::screen::Screen;
use crate::games::hangman::Category;

pub enum MenuChoice {
    Play(Category),
    Quit,
}

/// Category selection screen shown before every round.
pub struct CategoryMenu {
    categories: Vec<Category>,
    selected: usize,
    status: Option<String>,
}

impl CategoryMenu {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            selected: 0,
            status: None,
        }
    }

    /// Message shown under the list, e.g. why the last category could not be played.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn selected(&self) -> Option<&Category> {
        self.categories.get(self.selected)
    }
}

impl Screen for CategoryMenu {
    type Exit = MenuChoice;

    fn handle_key(&mut self, key: KeyEvent) -> Option<MenuChoice> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected = (self.selected + 1).min(self.categories.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(category) = self.selected().cloned() {
                    self.status = None;
                    return Some(MenuChoice::Play(category));
                }
            }
            KeyCode::Char('q') => return Some(MenuChoice::Quit),
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" HANGTERM ")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[0],
        );

        if self.categories.is_empty() {
            f.render_widget(
                Paragraph::new("No categories found. Add <category>.txt files to the words directory.")
                    .block(Block::default().title(" CATEGORIES ").borders(Borders::ALL)),
                chunks[1],
            );
        } else {
            let items: Vec<ListItem> = self
                .categories
                .iter()
                .enumerate()
                .map(|(i, c)| {
                    let style = if i == self.selected {
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(format!(" » {}", c.display_name())).style(style)
                })
                .collect();

            f.render_widget(
                List::new(items).block(Block::default().title(" CATEGORIES ").borders(Borders::ALL)),
                chunks[1],
            );
        }

        if let Some(status) = &self.status {
            f.render_widget(
                Paragraph::new(status.as_str())
                    .block(Block::default().borders(Borders::ALL))
                    .style(Style::default().fg(Color::Red)),
                chunks[2],
            );
        }

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play  [Q/Esc] Quit").alignment(Alignment::Center),
            chunks[3],
        );
    }
}
