pub mod about;
pub mod contact;
pub mod home;
pub mod order;
pub mod portfolio;
pub mod pricing;
pub mod services;
