pub mod suggestion;
pub mod user;
