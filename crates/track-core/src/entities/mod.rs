//! Domain entities - core business objects

mod comment;
mod media;
mod user;

pub use comment::{
    join_image_urls, split_image_urls, Comment, CommentChanges, CommentWithAuthor, NewComment,
    IMAGE_URL_DELIMITER,
};
pub use media::{Media, MediaChanges, MediaType, NewMedia};
pub use user::{NewUser, User, UserChanges};
