pub use super::award::Entity as Award;
pub use super::comment::Entity as Comment;
pub use super::media_collection::Entity as MediaCollection;
pub use super::media_item::Entity as MediaItem;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::soma::Entity as Soma;
pub use super::user::Entity as User;
pub use super::vote::Entity as Vote;
