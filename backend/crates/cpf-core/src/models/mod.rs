pub mod account;
pub mod account_id;
pub mod profile;
pub mod required_role;
pub mod role;
pub mod session;
pub mod user;
pub mod user_metadata;
