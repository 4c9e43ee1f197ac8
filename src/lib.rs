//! Calendar that shows every day of the month as a binary number, with
//! weekends and a fixed set of holidays highlighted.

pub mod app;
pub mod binary;
pub mod classify;
pub mod clock;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod holiday;
pub mod month;
pub mod page;
pub mod render;
pub mod term;
pub mod view;
