//! Desktop host for the Stickwander companion.
//!
//! A macroquad window stands in for the screen. It holds a virtual stack
//! of windows for the stickman to walk on, runs the companion at a fixed
//! 30 ms step, and routes mouse drags to it.

pub mod app;
pub mod input;
pub mod render;
pub mod theme;
