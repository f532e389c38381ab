// Business domains
pub mod boards;
