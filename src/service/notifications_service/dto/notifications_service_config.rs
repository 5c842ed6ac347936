pub struct NotificationsServiceConfig {
    pub project_id: String,
    pub fcm_endpoint: String,
}
