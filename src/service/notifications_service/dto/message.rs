use serde::Serialize;

///
/// FCM HTTP v1 message envelope
///
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: MessageContent,
}

#[derive(Debug, Serialize)]
pub struct MessageContent {
    pub token: String,
    pub notification: MessageNotification,
    pub android: AndroidConfig,
}

#[derive(Debug, Serialize)]
pub struct MessageNotification {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Serialize)]
pub struct AndroidConfig {
    pub priority: &'static str,
}
