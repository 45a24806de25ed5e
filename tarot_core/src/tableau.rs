use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::art::ArtCatalog;
use crate::card::Card;
use crate::deck::Deck;

/// What a key press asks the tableau to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reset,
    Draw,
}

/// Normalized input, already translated from terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    MousePress { x: u16, y: u16 },
    MouseRelease { x: u16, y: u16 },
    Resize { width: u16, height: u16 },
}

/// Result of handling one input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Idle,
    /// A card moved from the pile to the tableau
    Drew,
    /// A fresh deck was dealt
    Reset,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerKind {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pointer {
    kind: PointerKind,
    x: u16,
    y: u16,
}

/// Draw pile plus the cards drawn from it so far.
///
/// The pile is drawn at the screen origin, so click coordinates are used
/// as-is for hit testing.
#[derive(Debug, Clone)]
pub struct Tableau {
    deck: Deck,
    drawn: Vec<Card>,
    majors: Vec<usize>,
    pointer: Option<Pointer>,
    viewport: Option<Viewport>,
    rng: StdRng,
}

impl Tableau {
    pub fn new(catalog: &ArtCatalog) -> Self {
        Self::with_seed(catalog, rand::thread_rng().gen())
    }

    pub fn with_seed(catalog: &ArtCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = Deck::full(catalog, &mut rng);

        Self {
            deck,
            drawn: Vec::new(),
            majors: catalog.major_indices().collect(),
            pointer: None,
            viewport: None,
            rng,
        }
    }

    pub fn handle(&mut self, input: Input) -> Outcome {
        match input {
            Input::Command(Command::Quit) => Outcome::Quit,
            Input::Command(Command::Reset) => {
                self.reset();
                Outcome::Reset
            }
            Input::Command(Command::Draw) => self.draw(),
            Input::MousePress { x, y } => {
                self.press(x, y);
                Outcome::Idle
            }
            Input::MouseRelease { x, y } => self.release(x, y),
            Input::Resize { width, height } => {
                self.resize(width, height);
                Outcome::Idle
            }
        }
    }

    /// Move the top card of the pile face up onto the tableau. Drawing from
    /// an empty pile deals a new game instead.
    pub fn draw(&mut self) -> Outcome {
        let Some(mut card) = self.deck.pop() else {
            self.reset();
            return Outcome::Reset;
        };
        card.flip_up();
        log::debug!("drew {} ({} left)", card, self.deck.size());
        self.drawn.push(card);
        Outcome::Drew
    }

    pub fn reset(&mut self) {
        self.deck = Deck::with_majors(self.majors.iter().copied(), &mut self.rng);
        self.drawn.clear();
        log::info!("dealt a fresh deck of {} cards", self.deck.size());
    }

    /// A click on the pile draws from it; anything else is ignored
    pub fn click(&mut self, x: u16, y: u16) -> Outcome {
        match self.deck.hit_test(x, y) {
            Some(_) => self.draw(),
            None => Outcome::Idle,
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Some(Viewport { width, height });
    }

    fn press(&mut self, x: u16, y: u16) {
        if !matches!(self.pointer, Some(Pointer { kind: PointerKind::Pressed, .. })) {
            self.pointer = Some(Pointer {
                kind: PointerKind::Pressed,
                x,
                y,
            });
        }
    }

    /// Releasing where the button went down completes a click; a drag does not
    fn release(&mut self, x: u16, y: u16) -> Outcome {
        let clicked = self.pointer
            == Some(Pointer {
                kind: PointerKind::Pressed,
                x,
                y,
            });
        self.pointer = Some(Pointer {
            kind: PointerKind::Released,
            x,
            y,
        });
        if clicked {
            self.click(x, y)
        } else {
            Outcome::Idle
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Drawn cards in the order they were drawn
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.deck.size()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }
}
