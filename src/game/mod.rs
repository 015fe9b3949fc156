//! Core Plinko board logic: the peg grid, transparent-empty traversal,
//! layout generators and player identities.

mod board;
pub mod layout;
mod player;

pub use board::{Board, Cell, Direction, Node, OffBoardPolicy, Pos, Score};
pub use layout::{parse, staggered, StaggeredLayout};
pub use player::Player;
