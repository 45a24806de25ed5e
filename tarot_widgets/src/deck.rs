use tarot_core::{ArtCatalog, Deck};

use crate::card::{outline, CardWidget};

/// Text view of a deck: the top card, or a fanned stack when expanded
pub struct DeckWidget<'a> {
    pub deck: &'a Deck,
    catalog: &'a ArtCatalog,
}

impl<'a> DeckWidget<'a> {
    pub fn new(deck: &'a Deck, catalog: &'a ArtCatalog) -> Self {
        Self { deck, catalog }
    }

    pub fn view(&self) -> String {
        let Some(top) = self.deck.top() else {
            return outline();
        };

        if !self.deck.is_expanded() {
            return CardWidget::new(*top, self.catalog).view();
        }

        // Only the top border of each buried card shows
        let buried = &self.deck.cards()[..self.deck.size() - 1];
        let mut lines: Vec<String> = buried
            .iter()
            .map(|card| {
                let view = CardWidget::new(*card, self.catalog).view();
                view.split('\n').next().unwrap_or_default().to_string()
            })
            .collect();
        lines.push(CardWidget::new(*top, self.catalog).view());
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use tarot_core::{Card, Suit};

    use super::*;

    #[test]
    fn test_empty_deck_is_outline() {
        let catalog = ArtCatalog::empty();
        let deck = Deck::empty();
        assert_eq!(DeckWidget::new(&deck, &catalog).view(), outline());
    }

    #[test]
    fn test_collapsed_shows_top_card() {
        let catalog = ArtCatalog::empty();
        let mut top = Card::new(12, Suit::Pents);
        top.flip_up();
        let deck = Deck::new(vec![Card::new(0, Suit::Cups), top]);
        assert_eq!(
            DeckWidget::new(&deck, &catalog).view(),
            "╭Q♦──╮\n│    │\n│    │\n│    │\n╰──Q♦╯"
        );
    }

    #[test]
    fn test_expanded_fans_the_stack() {
        let catalog = ArtCatalog::empty();
        let mut visible = Card::new(1, Suit::Wands);
        visible.flip_up();
        let mut deck = Deck::new(vec![Card::new(0, Suit::Cups), visible, Card::major(3)]);
        deck.expand();

        let view = DeckWidget::new(&deck, &catalog).view();
        let lines: Vec<&str> = view.split('\n').collect();
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[0], "╭────╮");
        assert_eq!(lines[1], "╭2♣──╮");
        assert_eq!(lines[2..], ["╭────╮", "│╱╱╱╱│", "│╱╱╱╱│", "│╱╱╱╱│", "╰────╯"]);
    }

    #[test]
    fn test_expanded_single_card_is_plain_cell() {
        let catalog = ArtCatalog::empty();
        let mut deck = Deck::new(vec![Card::new(0, Suit::Cups)]);
        let collapsed = DeckWidget::new(&deck, &catalog).view();
        deck.expand();
        assert_eq!(DeckWidget::new(&deck, &catalog).view(), collapsed);
    }
}
