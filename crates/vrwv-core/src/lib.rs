//! Core of the VR web-view plugin: URL admission, a headless view
//! controller and the plumbing around it.

pub mod admission;
pub mod config;
pub mod events;
pub mod logging;
pub mod playlist;
pub mod surface;
pub mod sync;
pub mod view;

pub use admission::{normalize_and_admit, AdmissionError, AdmissionPolicy, AdmissionResult};
