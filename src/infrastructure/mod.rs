pub mod page;
pub mod persistence;
pub mod telegram;
