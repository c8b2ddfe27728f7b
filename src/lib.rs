//! Elevator Bank Simulation Library
//!
//! A discrete-step simulation of an elevator fleet together with the
//! dispatcher that assigns corridor calls. The library is driven by the
//! binary's command loop but has no dependency on it.

pub mod config;
pub mod simulation;
