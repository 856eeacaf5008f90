//! City bus route planner server.
//!
//! Answers "which buses get me from here to there?" with direct and
//! one-transfer plans between nearby stops, and serves live bus positions
//! and tourist spots alongside.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod fleet;
pub mod planner;
pub mod spots;
pub mod web;
