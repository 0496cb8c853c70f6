pub mod claims;
pub mod gate;
pub mod token;
