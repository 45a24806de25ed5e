pub mod ansi;
pub mod card;
pub mod deck;
pub mod grid;
pub mod layout;
pub mod status_bar;
pub mod tableau;
pub mod theme;

pub use theme::Theme;
