pub mod application;
pub mod company;
pub mod interview;
pub mod job;
pub mod message;
pub mod notification;
pub mod user;
