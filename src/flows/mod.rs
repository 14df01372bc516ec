// src/flows/mod.rs
//! The three trigger -> request -> render cycles of the client.
//!
//! Flows are independent of each other. Each one reads its input on the caller,
//! spawns the network half, and turns every outcome into something visible.

pub mod detail;
pub mod generation;
pub mod listing;
pub mod submission;

pub use detail::DetailFlow;
pub use generation::RequestGeneration;
pub use listing::ListingFlow;
pub use submission::SubmissionFlow;
