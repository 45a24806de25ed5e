use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;
use tarot_core::{ArtCatalog, Suit, Tableau, CARD_HEIGHT, CARD_WIDTH};

use crate::ansi::styled_segments;
use crate::card::CARD_BACK_FILL;
use crate::deck::DeckWidget;
use crate::grid::GridWidget;
use crate::layout::join_horizontal;
use crate::theme::Theme;

/// The draw pile with the drawn cards laid out to its right
pub struct TableauWidget<'a> {
    pub tableau: &'a Tableau,
    catalog: &'a ArtCatalog,
}

impl<'a> TableauWidget<'a> {
    pub fn new(tableau: &'a Tableau, catalog: &'a ArtCatalog) -> Self {
        Self { tableau, catalog }
    }

    fn grid(&self) -> GridWidget<'a> {
        GridWidget::new(self.tableau.drawn(), self.catalog)
            .viewport_width(self.tableau.viewport().map(|viewport| viewport.width))
    }

    pub fn view(&self) -> String {
        let pile = DeckWidget::new(self.tableau.deck(), self.catalog).view();
        let grid = self.grid().view();
        if grid.is_empty() {
            return pile;
        }
        join_horizontal(&[pile, grid])
    }

    /// Where drawn card `index` lands when the tableau is rendered into `area`
    pub fn drawn_card_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        if index >= self.tableau.drawn().len() {
            return None;
        }
        let (dx, dy) = self.grid().cell_origin(index);
        let rect = Rect::new(
            area.x.saturating_add(CARD_WIDTH).saturating_add(dx),
            area.y.saturating_add(dy),
            CARD_WIDTH,
            CARD_HEIGHT,
        )
        .intersection(area);
        (!rect.is_empty()).then_some(rect)
    }
}

impl Widget for TableauWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = Style::default().fg(Theme::CARD_BORDER);

        for (row, line) in (area.top()..area.bottom()).zip(self.view().split('\n')) {
            let mut x = area.left();
            for segment in styled_segments(line) {
                if x >= area.right() {
                    break;
                }
                let mut style = border_style;
                if let Some(color) = glyph_color(segment.text) {
                    style = style.fg(color);
                }
                let max_width = usize::from(area.right() - x);
                let (next_x, _) =
                    buf.set_stringn(x, row, segment.text, max_width, style.patch(segment.style));
                if next_x == x && segment.width > 0 {
                    break;
                }
                x = next_x;
            }
        }
    }
}

fn glyph_color(symbol: &str) -> Option<Color> {
    if symbol == CARD_BACK_FILL {
        return Some(Theme::CARD_BACK);
    }
    let mut chars = symbol.chars();
    let (Some(glyph), None) = (chars.next(), chars.next()) else {
        return None;
    };
    let suit = Suit::STANDARD
        .into_iter()
        .find(|suit| suit.symbol() == Some(glyph))?;
    Some(if suit.is_red() {
        Theme::RED_SUIT
    } else {
        Theme::BLACK_SUIT
    })
}
