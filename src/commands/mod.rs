//! CLI commands for skein

pub mod analyze;
pub mod dispatch;
pub mod inspect;
pub mod script;
pub mod traverse;
