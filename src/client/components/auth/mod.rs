pub mod layout;
pub mod navbar;

pub use layout::AuthLayout;
pub use navbar::Navbar;
