#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
pub mod domain;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod render;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use domain::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::*;
pub use render::*;
