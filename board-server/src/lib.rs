//! Personal departure board.
//!
//! A small web application that answers: "When do I have to leave to catch
//! the next train I can still walk to?"

pub mod board;
pub mod config;
pub mod domain;
pub mod rejseplanen;
pub mod web;
