// Terminal front end: input parsing and text rendering over the dashboard.

pub mod command;
pub mod render;
