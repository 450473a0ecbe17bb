use mhsbot_core::{ForwardOrigin, Message, User};

#[allow(dead_code)]
pub fn user(id: i64, username: Option<&str>) -> User {
    User {
        id,
        username: username.map(str::to_string),
        first_name: Some("Test".to_string()),
        last_name: None,
    }
}

#[allow(dead_code)]
pub fn forwarded(from: User, origin: ForwardOrigin) -> Message {
    let mut message = Message::text("fwd", from, "pesan diteruskan");
    message.forward_origin = Some(origin);
    message
}
