//! Hero's Path backend library modules.

pub mod domain;
