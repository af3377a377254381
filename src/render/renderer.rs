//! Renderer trait for the board loop.

use crate::app::Board;
use crate::error::Result;

/// Core trait for drawing the board and managing terminal lifecycle
pub trait BoardRenderer {
    /// Draw the current board
    fn render(&mut self, board: &Board) -> Result<()>;

    /// Set up raw mode, the alternate screen and mouse capture
    fn initialize(&mut self) -> Result<()>;

    /// Restore the terminal
    fn cleanup(&mut self) -> Result<()>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Mock renderer for testing
    ///
    /// Counts draws and remembers the last status line it was asked to show.
    #[derive(Default)]
    pub struct MockRenderer {
        pub render_count: usize,
        pub is_initialized: bool,
        pub last_status: Option<String>,
    }

    impl BoardRenderer for MockRenderer {
        fn render(&mut self, board: &Board) -> Result<()> {
            self.render_count += 1;
            self.last_status = Some(board.engine().status().to_string());
            Ok(())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let board = Board::new(&crate::config::DemoConfig::default()).unwrap();
        let mut renderer = MockRenderer::default();

        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        renderer.render(&board).unwrap();
        assert_eq!(renderer.render_count, 1);
        assert!(renderer.last_status.is_some());

        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }
}
