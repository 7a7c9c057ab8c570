pub mod guests;
pub mod rooms;
