pub mod current_user;

pub use current_user::resolve_current_user;
