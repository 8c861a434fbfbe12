pub mod analytics;
pub mod health;
pub mod landing;
pub mod links;
pub mod redirect;
