//! Data shapes exchanged with the admin API and held in the store.

pub mod order;
pub mod product;
pub mod status;
pub mod user;

pub use order::*;
pub use product::*;
pub use status::*;
pub use user::*;
