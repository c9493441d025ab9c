pub mod application_service;
pub mod auth_service;
pub mod dashboard_service;
pub mod interview_service;
pub mod job_service;
pub mod message_service;
pub mod notification_service;
pub mod profile_service;
