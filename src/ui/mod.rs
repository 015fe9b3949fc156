//! Terminal UI: the game screen for human-versus-AI rounds on a Plinko board.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
