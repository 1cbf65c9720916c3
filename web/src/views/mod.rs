pub mod home;
pub mod map;
pub mod not_found;
pub mod results;
