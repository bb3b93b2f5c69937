//! Background loops for continuous processing.

pub mod tick_loop;
