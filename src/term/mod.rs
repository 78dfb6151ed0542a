//! Terminal rendering.
//!
//! The view layer draws into a plain framebuffer of styled character cells,
//! which a crossterm-backed renderer flushes to the terminal. Keeping the
//! framebuffer pure means the whole view can be unit-tested without a tty.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
