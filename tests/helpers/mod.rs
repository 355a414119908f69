// Shared builders for integration tests
#![allow(dead_code)]

pub mod entrant_builder;
pub mod roster_builder;
