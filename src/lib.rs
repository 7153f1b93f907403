//! Guardpost - rules engine for patrol-based tabletop campaigns

pub mod advancement;
pub mod character;
pub mod core;
pub mod recruitment;
pub mod tables;
