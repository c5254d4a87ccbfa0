pub mod favorites;
pub mod home;
pub mod login;
pub mod not_found;
pub mod team;

pub use favorites::Favorites;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use team::Team;
