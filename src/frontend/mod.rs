//! Frontend module for the egui UI
//!
//! Receives data from the sync worker through crossbeam channels and
//! renders it with eframe/egui.
//!
//! # Architecture
//!
//! Every panel is a plain render function taking `&UiState` and returning
//! `Vec<AppAction>`; [`TopoVisApp`] applies the actions centrally after
//! the frame. No panel talks to the backend or mutates shared state.
//!
//! # Main Types
//!
//! - [`TopoVisApp`] - Application state implementing [`eframe::App`]
//! - [`UiState`] - Everything the panels read to render a frame
//! - [`AppAction`] - Actions panels emit instead of mutating state

pub mod app;
pub mod canvas;
pub mod controls;
pub mod demo_panel;
pub mod info_panel;
pub mod legend;
pub mod state;
pub mod status_bar;

pub use app::TopoVisApp;
pub use state::{AppAction, UiState};
