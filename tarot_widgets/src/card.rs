use tarot_core::{ArtCatalog, Card, CARD_HEIGHT, CARD_WIDTH};

use crate::layout::{display_width, pad_right, trim_to_width};

const INNER_WIDTH: usize = CARD_WIDTH as usize - 2;
const INNER_HEIGHT: usize = CARD_HEIGHT as usize - 2;

/// Fill used for the back of a face-down card
pub const CARD_BACK_FILL: &str = "\u{2571}"; // ╱

const TOP_LEFT: &str = "\u{256d}"; // ╭
const TOP_RIGHT: &str = "\u{256e}"; // ╮
const BOTTOM_LEFT: &str = "\u{2570}"; // ╰
const BOTTOM_RIGHT: &str = "\u{256f}"; // ╯
const HORIZONTAL: &str = "\u{2500}"; // ─
const VERTICAL: &str = "\u{2502}"; // │

const SGR_RESET: &str = "\u{1b}[0m";

/// A single card cell rendered as `CARD_WIDTH` x `CARD_HEIGHT` lines of text
pub struct CardWidget<'a> {
    pub card: Card,
    catalog: &'a ArtCatalog,
}

impl<'a> CardWidget<'a> {
    pub fn new(card: Card, catalog: &'a ArtCatalog) -> Self {
        Self { card, catalog }
    }

    pub fn view(&self) -> String {
        if !self.card.visible {
            return filled_card(CARD_BACK_FILL, "");
        }
        match self.catalog.art_for(&self.card) {
            Some(art) => art_card(art, &self.card.label()),
            None => filled_card(" ", &self.card.label()),
        }
    }
}

/// Blank cell marking where an empty deck would be
pub fn outline() -> String {
    filled_card(" ", "")
}

fn filled_card(design: &str, label: &str) -> String {
    let interior = vec![design.repeat(INNER_WIDTH); INNER_HEIGHT];
    boxed(label, &interior)
}

fn art_card(art: &[String], label: &str) -> String {
    let interior: Vec<String> = (0..INNER_HEIGHT)
        .map(|row| match art.get(row) {
            Some(line) => {
                let mut row = pad_right(&trim_to_width(line, INNER_WIDTH), INNER_WIDTH);
                // Keep art colors from running into the border
                if row.contains('\u{1b}') {
                    row.push_str(SGR_RESET);
                }
                row
            }
            None => " ".repeat(INNER_WIDTH),
        })
        .collect();
    boxed(label, &interior)
}

/// Border with the label in the top-left and bottom-right corners
fn boxed(label: &str, interior: &[String]) -> String {
    let label = trim_to_width(label, INNER_WIDTH);
    let padding = HORIZONTAL.repeat(INNER_WIDTH - display_width(&label));

    let mut lines = Vec::with_capacity(CARD_HEIGHT as usize);
    lines.push(format!("{TOP_LEFT}{label}{padding}{TOP_RIGHT}"));
    for row in interior {
        lines.push(format!("{VERTICAL}{row}{VERTICAL}"));
    }
    lines.push(format!("{BOTTOM_LEFT}{padding}{label}{BOTTOM_RIGHT}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tarot_core::Suit;

    use super::*;

    fn face_up(mut card: Card) -> Card {
        card.flip_up();
        card
    }

    fn assert_cell_shape(view: &str) {
        let lines: Vec<&str> = view.split('\n').collect();
        assert_eq!(lines.len(), CARD_HEIGHT as usize);
        for line in lines {
            assert_eq!(display_width(line), CARD_WIDTH as usize, "{line:?}");
        }
    }

    #[test]
    fn test_face_down() {
        let catalog = ArtCatalog::embedded();
        let view = CardWidget::new(Card::new(0, Suit::Cups), &catalog).view();
        assert_eq!(view, "╭────╮\n│╱╱╱╱│\n│╱╱╱╱│\n│╱╱╱╱│\n╰────╯");
    }

    #[test]
    fn test_face_up_without_art() {
        let catalog = ArtCatalog::empty();
        let view = CardWidget::new(face_up(Card::new(9, Suit::Swords)), &catalog).view();
        assert_eq!(view, "╭10♠─╮\n│    │\n│    │\n│    │\n╰─10♠╯");
    }

    #[test]
    fn test_face_up_with_art() {
        let catalog = ArtCatalog::from_entries([("Cups02.ans", " ♥\n\n ♥")]);
        let view = CardWidget::new(face_up(Card::new(1, Suit::Cups)), &catalog).view();
        assert_eq!(view, "╭2♥──╮\n│ ♥  │\n│    │\n│ ♥  │\n╰──2♥╯");
    }

    #[test]
    fn test_short_art_leaves_blank_rows() {
        let catalog = ArtCatalog::from_entries([("RWS_Tarot_17_Star.ans", " ★")]);
        let view = CardWidget::new(face_up(Card::major(17)), &catalog).view();
        assert_eq!(view, "╭XVII╮\n│ ★  │\n│    │\n│    │\n╰XVII╯");
    }

    #[test]
    fn test_oversized_art_is_clipped() {
        let catalog =
            ArtCatalog::from_entries([("Wands01.ans", "abcdefg\n1\n2\n3\n4\n5")]);
        let view = CardWidget::new(face_up(Card::new(0, Suit::Wands)), &catalog).view();
        assert_eq!(view, "╭1♣──╮\n│abcd│\n│1   │\n│2   │\n╰──1♣╯");
    }

    #[test]
    fn test_colored_art_keeps_cell_width() {
        let catalog = ArtCatalog::from_entries([("Cups03.ans", "\u{1b}[31mabcdefg\nx\ny")]);
        let view = CardWidget::new(face_up(Card::new(2, Suit::Cups)), &catalog).view();
        assert_cell_shape(&view);
        let second = view.split('\n').nth(1).unwrap();
        assert_eq!(second, "│\u{1b}[31mabcd\u{1b}[0m│");
    }

    #[test]
    fn test_long_major_label_truncated() {
        let catalog = ArtCatalog::empty();
        // XVIII is five cells wide
        let view = CardWidget::new(face_up(Card::major(18)), &catalog).view();
        assert!(view.starts_with("╭XVII╮"));
        assert_cell_shape(&view);
    }

    #[test]
    fn test_every_embedded_face_fits() {
        let catalog = ArtCatalog::embedded();
        for major in catalog.major_indices() {
            assert_cell_shape(&CardWidget::new(face_up(Card::major(major)), &catalog).view());
        }
        for value in 0..14 {
            for suit in Suit::STANDARD {
                let card = face_up(Card::new(value, suit));
                assert_cell_shape(&CardWidget::new(card, &catalog).view());
            }
        }
    }

    #[test]
    fn test_outline() {
        assert_eq!(outline(), "╭────╮\n│    │\n│    │\n│    │\n╰────╯");
    }

    proptest! {
        #[test]
        fn prop_label_never_overflows(label in "\\PC{0,8}") {
            let view = boxed(&label, &vec![" ".repeat(INNER_WIDTH); INNER_HEIGHT]);
            let top = view.split('\n').next().unwrap();
            prop_assert_eq!(display_width(top), CARD_WIDTH as usize);

            let trimmed = trim_to_width(&label, INNER_WIDTH);
            prop_assert!(display_width(&trimmed) <= INNER_WIDTH);
            prop_assert!(label.starts_with(&trimmed));
        }
    }
}
