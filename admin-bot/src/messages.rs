//! User-visible admin bot texts and the formatters for `/list`, `/logs` and `/getid`.

use mhsbot_core::ForwardOrigin;
use storage::{AllowList, LogEntry};
use teloxide::utils::html::escape;

pub const REFUSAL: &str = "❌ Maaf, Anda tidak memiliki akses ke bot ini.";
pub const INVALID_ID: &str = "❌ ID pengguna harus berupa angka.";
pub const ALREADY_REGISTERED: &str = "❌ Pengguna sudah terdaftar.";
pub const ADD_USAGE: &str = "❌ Gunakan format: /add <user_id> [username]";
pub const REMOVE_USAGE: &str = "❌ Gunakan format: /remove <user_id>";
pub const NO_USERS: &str = "📝 Belum ada pengguna yang diizinkan.";
pub const NO_LOGS: &str = "📝 Belum ada log aktivitas.";
pub const UNKNOWN_SENDER: &str = "Tidak dapat mendapatkan informasi pengirim";

/// How many log entries `/logs` shows.
pub const RECENT_LOGS: usize = 10;

pub const HELP: &str = "👋 Welcome to Admin Bot\n\n\
🔑 Available Commands:\n\
-------------------\n\
📋 /list - View all allowed users\n\
➕ /add <user_id> <username> - Add new user\n\
❌ /remove <user_id> - Remove user access\n\
📊 /logs - View user activity logs\n\
🆔 /getid - Get user ID from forwarded message\n\
🆔 /chatid - Get the current chat ID\n\n\
💡 Tips:\n\
• Forward any message to get user ID\n\
• Use /getid command on forwarded message\n\
• Check logs regularly for monitoring\n\n\
👨‍💻 Developed by Nant\n\
✈️ Contact: @nant12_bot";

pub fn user_added(id: i64) -> String {
    format!("✅ Pengguna dengan ID {} berhasil ditambahkan.", id)
}

pub fn user_removed(id: i64) -> String {
    format!("✅ Pengguna dengan ID {} berhasil dihapus.", id)
}

pub fn error_reply(err: impl std::fmt::Display) -> String {
    format!("❌ Terjadi kesalahan: {}", err)
}

/// HTML list of every allowed user; `None` when the list is empty.
pub fn format_user_list(list: &AllowList) -> Option<String> {
    if list.users.is_empty() {
        return None;
    }
    let mut text = String::from("📋 <b>Daftar Pengguna yang Diizinkan:</b>\n\n");
    for user in &list.users {
        text.push_str(&format!("• ID: <code>{}</code>\n", user.id));
        text.push_str(&format!(
            "  Username: @{}\n",
            escape(user.username.as_deref().unwrap_or("N/A"))
        ));
        text.push_str(&format!(
            "  Ditambahkan: {}\n\n",
            escape(user.added_at.as_deref().unwrap_or("N/A"))
        ));
    }
    Some(text)
}

/// Plain-text rendering of log entries (oldest first).
pub fn format_logs(entries: &[LogEntry]) -> String {
    let mut text = format!("📋 {} log aktivitas terakhir:\n\n", RECENT_LOGS);
    for entry in entries {
        text.push_str(&format!("Waktu: {}\n", entry.timestamp));
        text.push_str(&format!("User ID: {}\n", entry.user_id));
        text.push_str(&format!("Username: {}\n", entry.username));
        text.push_str(&format!("Aksi: {}\n", entry.action));
        if !entry.details.is_empty() {
            text.push_str(&format!("Detail: {}\n", entry.details));
        }
        text.push_str("-------------------\n");
    }
    text
}

/// Describes where a forwarded message came from.
pub fn describe_origin(origin: Option<&ForwardOrigin>) -> String {
    match origin {
        Some(ForwardOrigin::Chat {
            id,
            chat_type,
            title,
        }) => format!(
            "Chat ID: {}\nChat Type: {}\nChat Title: {}",
            id,
            chat_type,
            title.as_deref().unwrap_or("N/A")
        ),
        Some(ForwardOrigin::HiddenUser { name }) => format!("Forwarded from: {}", name),
        Some(ForwardOrigin::User { id, name }) => {
            format!("Forwarded from: {}\nUser ID: {}", name, id)
        }
        None => UNKNOWN_SENDER.to_string(),
    }
}

pub fn sender_info(info: &str) -> String {
    format!("ℹ️ Informasi pengirim:\n\n{}", info)
}

pub fn chat_id(id: i64) -> String {
    format!("Your chat ID is: <code>{}</code>", id)
}
