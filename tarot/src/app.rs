use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;
use tachyonfx::Duration;

use tarot_core::{ArtCatalog, Command, Input, Outcome, Tableau};
use tarot_widgets::status_bar::StatusBarWidget;
use tarot_widgets::tableau::TableauWidget;
use tarot_widgets::Theme;

use crate::effects::{self, FxManager};

/// Main application state
pub struct App<'a> {
    catalog: &'a ArtCatalog,
    pub tableau: Tableau,
    pub fx: FxManager,
    /// Drawn card waiting for its reveal effect, targeted on the next render
    reveal: Option<usize>,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a ArtCatalog, seed: Option<u64>) -> Self {
        let tableau = match seed {
            Some(seed) => Tableau::with_seed(catalog, seed),
            None => Tableau::new(catalog),
        };
        let mut fx = FxManager::default();
        fx.add_unique_effect(effects::DEAL, effects::deal_in());

        Self {
            catalog,
            tableau,
            fx,
            reveal: None,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let bg = Block::default().style(Style::default().bg(Theme::BG));
        frame.render_widget(bg, area);

        let [table_area, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        let tableau = TableauWidget::new(&self.tableau, self.catalog);
        if let Some(index) = self.reveal.take() {
            if let Some(rect) = tableau.drawn_card_rect(table_area, index) {
                let reveal = effects::card_reveal().with_area(rect);
                self.fx.add_unique_effect(effects::REVEAL, reveal);
            }
        }
        frame.render_widget(tableau, table_area);

        let status = StatusBarWidget::new(self.tableau.remaining(), self.tableau.drawn().len());
        frame.render_widget(status, status_area);

        // Apply effects on top of rendered content
        let tick_duration = Duration::from_millis(33); // ~30fps
        let buf = frame.buffer_mut();
        self.fx.process_effects(tick_duration, buf, area);
    }

    /// Handle key event. Returns true if should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match command_for(key) {
            Some(command) => self.apply(Input::Command(command)),
            None => false,
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        let input = match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Input::MousePress { x, y },
            MouseEventKind::Up(_) => Input::MouseRelease { x, y },
            _ => return,
        };
        self.apply(input);
    }

    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.apply(Input::Resize { width, height });
    }

    /// Feed one input to the tableau. Returns true if should quit.
    fn apply(&mut self, input: Input) -> bool {
        match self.tableau.handle(input) {
            Outcome::Quit => return true,
            Outcome::Drew => {
                self.reveal = self.tableau.drawn().len().checked_sub(1);
            }
            Outcome::Reset => {
                self.reveal = None;
                self.fx.cancel_unique_effect(effects::REVEAL);
                self.fx.add_unique_effect(effects::DEAL, effects::deal_in());
            }
            Outcome::Idle => {}
        }
        false
    }
}

fn command_for(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Char('d') | KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Draw),
        _ => None,
    }
}
