pub mod room_editor;
pub mod rooms;

pub use room_editor::{CreateRoomPage, EditRoomPage};
pub use rooms::RoomsPage;
