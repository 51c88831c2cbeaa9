//! Core value types: colours, effect parameters, and batch recipes.

mod colour;
mod effect;
mod recipe;

pub use colour::{parse_palette, Colour};
pub use effect::Effect;
pub use recipe::{Format, Job, Recipe};
