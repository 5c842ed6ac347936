use crate::{
    application::ApplicationState,
    dto::{input, output},
    error::Error,
};
use axum::{extract::State, routing::post, Json, Router};

pub fn routing() -> Router<ApplicationState> {
    Router::new().route("/send-notification", post(send_notification))
}

async fn send_notification(
    State(state): State<ApplicationState>,
    Json(notification): Json<input::Notification>,
) -> Result<Json<output::NotificationSent>, Error> {
    // Empty strings count as missing
    let (token, title, body) = match (notification.token, notification.title, notification.body) {
        (Some(token), Some(title), Some(body))
            if !token.is_empty() && !title.is_empty() && !body.is_empty() =>
        {
            (token, title, body)
        }
        _ => return Err(Error::MissingParameters),
    };

    let result = state.notifications_service.send(token, title, body).await?;

    Ok(Json(output::NotificationSent::new(result)))
}
