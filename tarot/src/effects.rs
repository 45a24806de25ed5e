use tachyonfx::fx;
use tachyonfx::{Effect, EffectManager, Interpolation, Motion};

use tarot_widgets::Theme;

/// Keyed effect manager; adding an effect under a live key replaces it
pub type FxManager = EffectManager<&'static str>;

pub const DEAL: &str = "deal";
pub const REVEAL: &str = "reveal";

/// A fresh deck sweeps in from the left
pub fn deal_in() -> Effect {
    fx::sweep_in(
        Motion::LeftToRight,
        8,
        2,
        Theme::BG,
        (400, Interpolation::CubicOut),
    )
}

/// A newly drawn card materializes in its grid cell
pub fn card_reveal() -> Effect {
    fx::coalesce((300, Interpolation::CubicOut))
}
