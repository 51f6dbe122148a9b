pub mod messages;
pub mod tables;
pub mod theme;
