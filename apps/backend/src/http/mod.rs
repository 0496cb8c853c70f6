pub mod entry;
pub mod respond;
pub mod router;
