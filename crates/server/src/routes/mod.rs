pub mod guest;
pub mod health;
pub mod room;
pub mod root;
