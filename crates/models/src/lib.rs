pub mod error;
pub mod guest;
pub mod room;
pub mod seats;

pub use error::HotelError;
pub use guest::{Guest, GuestPatch, GuestSummary, GuestWithRoom, NewGuest};
pub use room::{NewRoom, Room, RoomPatch, RoomWithGuests};
