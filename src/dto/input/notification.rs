use serde::Deserialize;

///
/// Fields are optional so that an incomplete request can be rejected
/// with the fixed error body instead of a deserialization error
///
#[derive(Debug, Deserialize)]
pub struct Notification {
    pub token: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
}
