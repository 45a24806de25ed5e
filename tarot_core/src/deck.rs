use rand::seq::SliceRandom;
use rand::Rng;

use crate::art::ArtCatalog;
use crate::card::{Card, ParseCardError, Suit, CARD_HEIGHT, CARD_WIDTH, RANKS};

/// An ordered stack of cards. The last card is the top of the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    expanded: bool,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            expanded: false,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Every rank of every standard suit plus each major arcana the catalog
    /// has art for, face down and shuffled.
    pub fn full<R: Rng>(catalog: &ArtCatalog, rng: &mut R) -> Self {
        Self::with_majors(catalog.major_indices(), rng)
    }

    /// Every rank of every standard suit plus the given major arcana,
    /// face down and shuffled.
    pub fn with_majors<R: Rng>(majors: impl IntoIterator<Item = usize>, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(RANKS.len() * Suit::STANDARD.len());
        for value in 0..RANKS.len() {
            for &suit in &Suit::STANDARD {
                cards.push(Card::new(value, suit));
            }
        }
        cards.extend(majors.into_iter().map(Card::major));

        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Build a deck from card shorthands, bottom first
    pub fn from_shorthands(shorthands: &[&str]) -> Result<Self, ParseCardError> {
        let cards = shorthands
            .iter()
            .map(|shorthand| shorthand.parse())
            .collect::<Result<Vec<Card>, _>>()?;
        Ok(Self::new(cards))
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Show the whole stack fanned out instead of just the top card
    pub fn expand(&mut self) {
        self.expanded = true;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Put cards on top, in order
    pub fn add(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Take every card from `index` up to the top
    pub fn pop_from(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &Card {
        &self.cards[index]
    }

    pub fn get_from(&self, index: usize) -> &[Card] {
        &self.cards[index..]
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Which card, if any, sits under `(x, y)` relative to the deck's origin.
    ///
    /// An empty deck reports index 0 for its outline. Expanded stacks offset
    /// each card one row down and are scanned from the top, so the topmost
    /// card wins where footprints overlap.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<usize> {
        if x >= CARD_WIDTH {
            return None;
        }
        if !self.expanded || self.cards.is_empty() {
            return (y < CARD_HEIGHT).then(|| self.cards.len().saturating_sub(1));
        }

        let y = usize::from(y);
        (0..self.cards.len())
            .rev()
            .find(|&i| y >= i && y < i + usize::from(CARD_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn identities(cards: &[Card]) -> Vec<(usize, Suit)> {
        let mut ids: Vec<_> = cards.iter().map(Card::identity).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_full_deck_composition() {
        let catalog = ArtCatalog::embedded();
        let deck = Deck::full(&catalog, &mut StdRng::seed_from_u64(7));

        let mut expected = Vec::new();
        for value in 0..RANKS.len() {
            for &suit in &Suit::STANDARD {
                expected.push(Card::new(value, suit));
            }
        }
        expected.extend(catalog.major_indices().map(Card::major));

        assert_eq!(deck.size(), 56 + 22);
        assert_eq!(identities(deck.cards()), identities(&expected));
        assert!(deck.cards().iter().all(|card| !card.visible));
    }

    #[test]
    fn test_full_deck_without_art_has_no_majors() {
        let deck = Deck::full(&ArtCatalog::empty(), &mut StdRng::seed_from_u64(1));
        assert_eq!(deck.size(), 56);
        assert!(deck.cards().iter().all(|card| !card.is_major()));
    }

    #[test]
    fn test_pop_order() {
        let mut deck = Deck::new(vec![Card::new(0, Suit::Cups), Card::new(1, Suit::Cups)]);
        assert_eq!(deck.pop(), Some(Card::new(1, Suit::Cups)));
        assert_eq!(deck.pop(), Some(Card::new(0, Suit::Cups)));
        assert_eq!(deck.pop(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn test_accessors() {
        let mut deck = Deck::from_shorthands(&["1Cups", "KSwords", "M05"]).unwrap();
        assert_eq!(deck.bottom(), Some(&Card::new(0, Suit::Cups)));
        assert_eq!(deck.top(), Some(&Card::major(5)));
        assert_eq!(deck.get(1), &Card::new(13, Suit::Swords));

        deck.add([Card::new(2, Suit::Wands)]);
        assert_eq!(deck.size(), 4);
        assert_eq!(deck.top(), Some(&Card::new(2, Suit::Wands)));
        assert_eq!(deck.get_from(2), &[Card::major(5), Card::new(2, Suit::Wands)]);

        let taken = deck.pop_from(1);
        assert_eq!(taken.len(), 3);
        assert_eq!(deck.cards(), &[Card::new(0, Suit::Cups)]);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_range_panics() {
        let deck = Deck::empty();
        deck.get(0);
    }

    #[test]
    fn test_empty_deck_accessors() {
        let deck = Deck::empty();
        assert_eq!(deck.top(), None);
        assert_eq!(deck.bottom(), None);
        assert!(!deck.is_expanded());
    }

    #[test]
    fn test_empty_outline_hit() {
        let deck = Deck::empty();
        assert_eq!(deck.hit_test(0, 0), Some(0));
        assert_eq!(deck.hit_test(5, 4), Some(0));
        assert_eq!(deck.hit_test(6, 0), None);
        assert_eq!(deck.hit_test(0, 5), None);
    }

    #[test]
    fn test_collapsed_hit_is_top_card() {
        let deck = Deck::from_shorthands(&["1Cups", "2Cups", "3Cups"]).unwrap();
        assert_eq!(deck.hit_test(2, 2), Some(2));
        assert_eq!(deck.hit_test(2, 6), None);
    }

    #[test]
    fn test_expanded_hit_prefers_top_card() {
        let mut deck = Deck::from_shorthands(&["1Cups", "2Cups", "3Cups"]).unwrap();
        deck.expand();

        // Top card starts at row 2 and covers rows 2..7
        assert_eq!(deck.hit_test(0, 2), Some(2));
        assert_eq!(deck.hit_test(0, 6), Some(2));
        // Rows above it belong to the cards beneath
        assert_eq!(deck.hit_test(0, 0), Some(0));
        assert_eq!(deck.hit_test(0, 1), Some(1));
        assert_eq!(deck.hit_test(0, 7), None);
        assert_eq!(deck.hit_test(6, 3), None);
    }

    proptest! {
        #[test]
        fn prop_shuffle_is_permutation(seed in any::<u64>(), len in 0usize..40) {
            let cards: Vec<Card> = (0..len)
                .map(|i| Card::new(i % 14, Suit::STANDARD[i % 4]))
                .collect();
            let mut deck = Deck::new(cards.clone());
            deck.shuffle(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(identities(deck.cards()), identities(&cards));
        }

        #[test]
        fn prop_collapsed_hit_footprint(x in 0u16..20, y in 0u16..20, len in 1usize..10) {
            let deck = Deck::new(vec![Card::new(0, Suit::Cups); len]);
            let inside = x < CARD_WIDTH && y < CARD_HEIGHT;
            prop_assert_eq!(deck.hit_test(x, y).is_some(), inside);
            if inside {
                prop_assert_eq!(deck.hit_test(x, y), Some(len - 1));
            }
        }

        #[test]
        fn prop_expanded_top_origin_hits_top(len in 1usize..20, x in 0u16..6) {
            let mut deck = Deck::new(vec![Card::new(3, Suit::Pents); len]);
            deck.expand();
            prop_assert_eq!(deck.hit_test(x, (len - 1) as u16), Some(len - 1));
        }
    }
}
