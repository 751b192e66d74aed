mod account;
mod account_id;
mod role;
mod session;
