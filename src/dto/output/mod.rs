mod notification_sent;

pub use notification_sent::*;
