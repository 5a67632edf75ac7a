//! Calculator view model - the state behind the widget and the swap interaction.

mod calculator_model;
mod swap_animation;

pub use calculator_model::{Calculator, ConversionSnapshot};
pub use swap_animation::SwapAnimation;
