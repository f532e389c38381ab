// HTTP routes
pub mod boards;
pub mod health;

pub use boards::*;
pub use health::*;
