use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::Theme;

/// One-line key help plus pile counts, shown along the bottom of the screen
pub struct StatusBarWidget {
    pub remaining: usize,
    pub drawn: usize,
}

impl StatusBarWidget {
    pub fn new(remaining: usize, drawn: usize) -> Self {
        Self { remaining, drawn }
    }

    fn help_line(&self) -> Line<'static> {
        let key = Style::default().fg(Theme::GOLD);
        let dim = Style::default().fg(Theme::DIM_TEXT);
        Line::from(vec![
            Span::styled(" [", dim),
            Span::styled("d", key),
            Span::styled("] Draw  [", dim),
            Span::styled("r", key),
            Span::styled("] Reset  [", dim),
            Span::styled("q", key),
            Span::styled("] Quit", dim),
        ])
    }

    fn counts_line(&self) -> Line<'static> {
        let pile = if self.remaining == 0 {
            Span::styled(
                "deck empty, draw to reshuffle",
                Style::default().fg(Theme::GOLD).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                format!("{} in deck", self.remaining),
                Style::default().fg(Theme::CARD_FACE),
            )
        };
        Line::from(vec![
            pile,
            Span::styled("  \u{2502}  ", Style::default().fg(Theme::CARD_BORDER)),
            Span::styled(
                format!("{} drawn ", self.drawn),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ])
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let chunks =
            Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);
        Paragraph::new(self.help_line()).render(chunks[0], buf);
        Paragraph::new(self.counts_line())
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
