use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct NotificationSent {
    pub success: bool,
    pub message: &'static str,
    pub result: Value,
}

impl NotificationSent {
    pub fn new(result: Value) -> Self {
        Self {
            success: true,
            message: "Notification sent successfully",
            result,
        }
    }
}
