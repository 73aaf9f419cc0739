/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The per-session state machine: prompt, selections, gallery,
///   current result and the generation-in-progress flag (session.rs)

pub mod data;
pub mod session;
