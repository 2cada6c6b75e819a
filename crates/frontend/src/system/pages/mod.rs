pub mod callback;
pub mod landing;
