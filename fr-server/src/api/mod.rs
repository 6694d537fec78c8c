pub mod auth;
pub mod checkout;
pub mod delete_response;
pub mod error;
pub mod projects;
pub mod proxy;
pub mod registrations;
pub mod visitors;
