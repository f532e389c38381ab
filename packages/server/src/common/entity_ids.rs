//! Typed ID definitions for all domain entities.
//!
//! Type aliases for each domain entity, providing compile-time type safety
//! for ID usage throughout the application.

// Re-export the core Id type and version markers
pub use super::id::{Id, V4, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Board entities (the aggregate root).
pub struct Board;

/// Marker type for Card entities (units of work within a board column).
pub struct Card;

// ============================================================================
// Typed ID aliases
// ============================================================================

/// Board identifier. Supplied by the client on create, so `new()` is only
/// used by seeding; any well-formed UUID parses.
pub type BoardId = Id<Board>;

/// Card identifier, generated server-side at card creation.
pub type CardId = Id<Card, V4>;
