//! Terminal rendering of the demo board.
//!
//! The renderer only draws; board state lives in [`crate::app::Board`].

pub mod renderer;
pub mod terminal;
pub mod theme;

pub use renderer::BoardRenderer;
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockRenderer;
