pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, auth_service::AuthService,
    dashboard_service::DashboardService, interview_service::InterviewService,
    job_service::JobService, message_service::MessageService,
    notification_service::NotificationService, profile_service::ProfileService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub interview_service: InterviewService,
    pub dashboard_service: DashboardService,
    pub message_service: MessageService,
    pub notification_service: NotificationService,
    pub profile_service: ProfileService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let auth_service = AuthService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let interview_service = InterviewService::new(pool.clone());
        let dashboard_service = DashboardService::new(pool.clone());
        let message_service = MessageService::new(pool.clone());
        let notification_service = NotificationService::new(pool.clone());
        let profile_service = ProfileService::new(pool.clone());

        Self {
            pool,
            auth_service,
            job_service,
            application_service,
            interview_service,
            dashboard_service,
            message_service,
            notification_service,
            profile_service,
        }
    }
}
