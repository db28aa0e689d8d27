//! Plate-appearance outcome events and the rules that resolve them.
//!
//! ## Overview
//!
//! - `Event`: closed 27-variant enum of outcome kinds, with the label
//!   vocabulary the oracles speak
//! - `resolver`: the transition rules mapping (state, event) to the next
//!   state and an at-bat-over flag

pub mod event;
pub mod resolver;

pub use event::Event;
pub use resolver::resolve;
