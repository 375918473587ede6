/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Preview handle ownership and release (previews.rs)
/// - The upload/compare/reset lifecycle of both slots (session.rs)

pub mod data;
pub mod previews;
pub mod session;
