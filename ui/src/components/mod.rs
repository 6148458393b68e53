pub mod object_urls;
pub mod room_editor;
pub mod toast;

pub use object_urls::ObjectUrlSource;
pub use room_editor::RoomEditor;
pub use toast::ToastContainer;
