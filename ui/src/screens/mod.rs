// This file makes the screen modules available to the rest of the application.

pub mod analysis;
pub mod dashboard;
pub mod history;
pub mod landing;
pub mod overview;
pub mod register;
