pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
pub mod services;
pub mod testimonials;
