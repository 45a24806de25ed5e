use tarot_core::{ArtCatalog, Card, Deck, CARD_HEIGHT, CARD_WIDTH};

use crate::deck::DeckWidget;
use crate::layout::{join_horizontal, join_vertical};

/// Columns used before the terminal has reported its size
pub const DEFAULT_COLUMNS: usize = 6;

/// Drawn cards laid out in rows that wrap at the viewport width.
///
/// One card column is kept free for the draw pile shown to the left.
pub struct GridWidget<'a> {
    pub cards: &'a [Card],
    catalog: &'a ArtCatalog,
    viewport_width: Option<u16>,
}

impl<'a> GridWidget<'a> {
    pub fn new(cards: &'a [Card], catalog: &'a ArtCatalog) -> Self {
        Self {
            cards,
            catalog,
            viewport_width: None,
        }
    }

    pub fn viewport_width(mut self, width: Option<u16>) -> Self {
        self.viewport_width = width;
        self
    }

    pub fn columns(&self) -> usize {
        columns(self.viewport_width, self.cards.len())
    }

    /// Offset of cell `index` from the grid's top-left corner
    pub fn cell_origin(&self, index: usize) -> (u16, u16) {
        let columns = self.columns();
        let col = (index % columns) as u16;
        let row = (index / columns) as u16;
        (col * CARD_WIDTH, row * CARD_HEIGHT)
    }

    pub fn view(&self) -> String {
        let decks: Vec<Deck> = self
            .cards
            .iter()
            .map(|card| {
                let mut deck = Deck::empty();
                deck.add([*card]);
                deck
            })
            .collect();

        let rows: Vec<String> = decks
            .chunks(self.columns())
            .map(|row| {
                let cells: Vec<String> = row
                    .iter()
                    .map(|deck| DeckWidget::new(deck, self.catalog).view())
                    .collect();
                join_horizontal(&cells)
            })
            .collect();

        if rows.is_empty() {
            return String::new();
        }
        join_vertical(&rows)
    }
}

/// How many cells fit across `viewport_width`, leaving room for the pile
/// whenever there is something to lay out.
pub fn columns(viewport_width: Option<u16>, cells: usize) -> usize {
    let width = match viewport_width {
        Some(width) if width > 0 => width,
        _ => return DEFAULT_COLUMNS,
    };
    let reserved = if cells > 0 { CARD_WIDTH } else { 0 };
    let available = width.saturating_sub(reserved);
    usize::from(available / CARD_WIDTH).max(1)
}
