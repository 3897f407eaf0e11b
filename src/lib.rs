//! Logic engine for a grid-based pipe-rotation puzzle.
//!
//! A board is a grid of pieces, each a connector shape at one of four
//! orientations.  The player rotates pieces one quarter turn at a time; the
//! board is won when every connector meets a matching connector on the
//! adjacent square and the non-empty squares form a single network.
//!
//! The crate covers the whole engine: the piece and board model
//! ([`gameplay`], [`board`]), the win predicate ([`network`]), move history
//! ([`history`]), random solvable puzzle generation ([`generator`]), the
//! orientation solver ([`solver`]), the [`game`] boundary that ties them
//! together, and a text snapshot format ([`codec`]).  Rendering and input
//! handling are a caller's business.

pub mod board;
pub mod codec;
pub mod error;
pub mod game;
pub mod gameplay;
pub mod generator;
pub mod history;
pub mod network;
pub mod solver;

pub use board::{Board, EdgeStatus};
pub use error::{Error, Result};
pub use game::Game;
pub use gameplay::{Direction, Piece, Shape};
pub use generator::GeneratorConfig;
pub use history::{History, Move};
