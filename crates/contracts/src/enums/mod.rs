pub mod district;
pub mod province;
pub mod user_role;

pub use district::District;
pub use province::Province;
pub use user_role::UserRole;
