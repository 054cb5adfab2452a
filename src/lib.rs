//! A terminal Space Invaders clone.
//!
//! The simulation is pure: `entities` holds plain data, `compute` turns a
//! state plus a frame delta into the next state, and `assets` resolves the
//! sprite art (with placeholders for anything missing).  All terminal I/O
//! lives in the binary.

pub mod assets;
pub mod compute;
pub mod entities;
