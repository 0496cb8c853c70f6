pub mod saves;
pub mod users;
