//! View layer: render the model
//!
//! Pages draw `tresor_core::SecretsView`, the view-model built from the last
//! snapshot; they never decide what is enabled themselves.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
