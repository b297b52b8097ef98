//! Core application state: the action registry, reducer, and dispatch loop.

pub mod action;
pub mod dispatch;
pub mod reducer;
pub mod state;
