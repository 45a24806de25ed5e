pub mod art;
pub mod card;
pub mod deck;
pub mod tableau;

pub use art::{ArtCatalog, ArtError};
pub use card::*;
pub use deck::Deck;
pub use tableau::{Command, Input, Outcome, Tableau, Viewport};
