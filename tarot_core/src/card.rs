use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Width and height of a card cell in terminal cells
pub const CARD_WIDTH: u16 = 6;
pub const CARD_HEIGHT: u16 = 5;

/// Rank labels for the standard suits, indexed by `Card::value`
pub const RANKS: [&str; 14] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "P", "N", "Q", "K",
];

/// Prefix shared by every major arcana asset name
pub const MAJOR_PREFIX: &str = "RWS_Tarot_";

/// Highest major arcana index a card or asset name may carry
pub const MAX_MAJOR_INDEX: usize = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Cups,
    Pents,
    Swords,
    Wands,
    /// Trump cards; `Card::value` indexes the major arcana instead of the rank table
    Major,
}

impl Suit {
    pub const STANDARD: [Suit; 4] = [Suit::Cups, Suit::Pents, Suit::Swords, Suit::Wands];

    pub fn symbol(&self) -> Option<char> {
        match self {
            Suit::Cups => Some('\u{2665}'),   // ♥
            Suit::Pents => Some('\u{2666}'),  // ♦
            Suit::Swords => Some('\u{2660}'), // ♠
            Suit::Wands => Some('\u{2663}'),  // ♣
            Suit::Major => None,
        }
    }

    /// Name used in art keys (`Cups01`, `Wands14`, ...)
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Cups => "Cups",
            Suit::Pents => "Pents",
            Suit::Swords => "Swords",
            Suit::Wands => "Wands",
            Suit::Major => "Major",
        }
    }

    pub fn is_major(&self) -> bool {
        matches!(self, Suit::Major)
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Cups | Suit::Pents)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol),
            None => write!(f, "{}", self.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub value: usize,
    pub suit: Suit,
    pub visible: bool,
}

impl Card {
    /// A face-down card
    pub fn new(value: usize, suit: Suit) -> Self {
        Self {
            value,
            suit,
            visible: false,
        }
    }

    pub fn major(index: usize) -> Self {
        Self::new(index, Suit::Major)
    }

    pub fn is_major(&self) -> bool {
        self.suit.is_major()
    }

    pub fn flip_up(&mut self) {
        self.visible = true;
    }

    /// Identity of the card, ignoring which way up it is
    pub fn identity(&self) -> (usize, Suit) {
        (self.value, self.suit)
    }

    fn rank_label(&self) -> Option<&'static str> {
        RANKS.get(self.value).copied()
    }

    /// Short label drawn on the card border. Empty when the value is out of range.
    pub fn label(&self) -> String {
        if self.is_major() {
            if self.value > MAX_MAJOR_INDEX {
                return String::new();
            }
            return numeral(self.value);
        }
        match (self.rank_label(), self.suit.symbol()) {
            (Some(rank), Some(symbol)) => format!("{}{}", rank, symbol),
            _ => String::new(),
        }
    }

    /// Art key for a standard suit card (`Cups01` for the 1 of cups).
    ///
    /// Major cards are keyed by asset name, see `ArtCatalog::art_key`.
    pub fn suited_art_key(&self) -> Option<String> {
        if self.is_major() {
            return None;
        }
        self.rank_label()?;
        Some(format!("{}{:02}", self.suit.name(), self.value + 1))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Additive numeral built from a table that stops at X, so 40 is `XXXX`.
pub fn numeral(mut n: usize) -> String {
    if n == 0 {
        return "0".to_string();
    }
    const LOOKUP: [(usize, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];

    let mut out = String::new();
    for (value, symbol) in LOOKUP {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    #[error("unrecognized card shorthand `{0}`")]
    Unrecognized(String),
    #[error("invalid major arcana index in `{0}`")]
    MajorIndex(String),
}

/// A major arcana index no larger than `MAX_MAJOR_INDEX`
pub fn parse_major(ordinal: &str) -> Option<Card> {
    ordinal
        .parse()
        .ok()
        .filter(|&index| index <= MAX_MAJOR_INDEX)
        .map(Card::major)
}

/// Longer labels first so "10" is not read as "1"
const RANK_PARSE_ORDER: [usize; 14] = [9, 0, 1, 2, 3, 4, 5, 6, 7, 8, 10, 11, 12, 13];

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses shorthands such as `10Swords`, `Q♥`, `M07` or `RWS_Tarot_07_Chariot`.
    /// A trailing `?` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shorthand = s.trim().trim_end_matches('?');

        if let Some(rest) = shorthand.strip_prefix(MAJOR_PREFIX) {
            let ordinal = rest.split('_').next().unwrap_or_default();
            return parse_major(ordinal)
                .ok_or_else(|| ParseCardError::MajorIndex(s.to_string()));
        }
        if let Some(rest) = shorthand.strip_prefix('M') {
            if rest.len() >= 2 && rest.is_char_boundary(2) {
                return parse_major(&rest[..2])
                    .ok_or_else(|| ParseCardError::MajorIndex(s.to_string()));
            }
        }

        for value in RANK_PARSE_ORDER {
            let Some(suit_part) = shorthand.strip_prefix(RANKS[value]) else {
                continue;
            };
            let suit = Suit::STANDARD.into_iter().find(|suit| {
                suit.name() == suit_part
                    || suit.symbol().map(String::from).as_deref() == Some(suit_part)
            });
            if let Some(suit) = suit {
                return Ok(Card::new(value, suit));
            }
        }

        Err(ParseCardError::Unrecognized(s.to_string()))
    }
}
