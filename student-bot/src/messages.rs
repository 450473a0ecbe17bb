//! User-visible student bot texts, the progress bar, result rendering and message labels.

use mhsbot_core::{Attachment, InlineButton, Message};
use teloxide::utils::html::escape;

use crate::directory::{StudentRecord, StudentSummary};

pub const REFUSAL: &str = "❌ Maaf, Anda tidak memiliki akses ke bot ini.";
pub const WRONG_TOKEN: &str = "❌ token registrasi salah";
pub const SEARCH_MAINTENANCE: &str =
    "Pencarian melalui bot sedang dalam perbaikan. Silakan tunggu update selanjutnya.";
pub const DETAIL_MAINTENANCE: &str =
    "Fitur pencarian detail sedang dalam perbaikan. Silakan tunggu update selanjutnya.";

pub const CARI_LAGI: &str = "cari_lagi";
pub const STUDENT_PREFIX: &str = "mhs_";

pub const START_HELP: &str = "🔍 I can search for any student data across Indonesia\n\n\
📝 How to use:\n\
• Search by name: /cari [nama]\n\
• Search by NIM: /cari [nim]\n\n\
📌 Examples:\n\
• /cari Ahmad Fauzi\n\
• /cari 2020123456\n\
• /cari Siti Nurhaliza\n\
• /cari 2020987654\n\n\
💡 Tips:\n\
• You can search using full name or NIM\n\
• Results will show student's complete information\n\
• Click on any result to see more details\n\n\
👨‍💻 Developed by Nant\n\
✈️ Contact: @nant12_bot";

/// HTML.
pub const RESTRICTED: &str = "⚠️ <b>Akses Terbatas</b>\n\n\
Maaf, Anda belum memiliki akses untuk menggunakan fitur ini.\n\
Silakan hubungi admin untuk mendapatkan akses.\n\n\
Contact: @nant12_bot";

pub const SEARCH_PROMPT: &str = "Silakan masukkan nama mahasiswa yang ingin dicari.\n\
Contoh: /cari John Doe";

/// HTML. Shown after the "Cari Lagi" button.
pub const SEARCH_AGAIN_PROMPT: &str = "🔍 <b>Cari Mahasiswa</b>\n\n\
Silakan masukkan nama lengkap atau NIM mahasiswa yang ingin dicari.\n\n\
📌 Contoh:\n\
• Ahmad Fauzi\n\
• 2020123456\n\
• Siti Nurhaliza\n\
• 2020987654";

pub const ALREADY_REGISTERED: &str = "✅ Anda sudah terdaftar sebelumnya.\n\
Silakan gunakan bot dengan normal.";

pub const REGISTERED: &str = "✅ Registrasi berhasil!\n\n\
Sekarang Anda dapat menggunakan bot untuk mencari data mahasiswa.\n\
Gunakan command /cari diikuti nama atau NIM mahasiswa.\n\n\
Contoh:\n\
• /cari Ahmad Fauzi\n\
• /cari 2020123456";

pub fn error_reply(err: impl std::fmt::Display) -> String {
    format!("❌ Terjadi kesalahan: {}", err)
}

/// `step` out of 10, clamped.
pub fn progress_text(step: u8) -> String {
    let filled = usize::from(step.min(10));
    format!(
        "🔍 Mencari data mahasiswa...\n[{}{}] {}%",
        "▰".repeat(filled),
        "▱".repeat(10 - filled),
        filled * 10
    )
}

fn search_again_row() -> Vec<InlineButton> {
    vec![InlineButton::new("🔍 Cari Lagi", CARI_LAGI)]
}

/// HTML list of results plus one button per student and a "Cari Lagi" row.
pub fn search_results(query: &str, results: &[StudentSummary]) -> (String, Vec<Vec<InlineButton>>) {
    let mut text = format!(
        "🎓 <b>Hasil pencarian:</b> {}\nDitemukan {} mahasiswa.\n\n",
        escape(query),
        results.len()
    );
    let mut keyboard = Vec::with_capacity(results.len() + 1);
    for (i, student) in results.iter().enumerate() {
        text.push_str(&format!(
            "{}. <b>{}</b> ({})\n   {} - {}\n",
            i + 1,
            escape(&student.name),
            escape(&student.nim),
            escape(&student.university),
            escape(&student.study_program)
        ));
        keyboard.push(vec![InlineButton::new(
            format!("{}. {}", i + 1, student.name),
            format!("{}{}", STUDENT_PREFIX, student.id),
        )]);
    }
    text.push_str("\nPilih mahasiswa untuk melihat detail.");
    keyboard.push(search_again_row());
    (text, keyboard)
}

pub fn not_found(query: &str) -> (String, Vec<Vec<InlineButton>>) {
    (
        format!(
            "❌ Data mahasiswa untuk <b>{}</b> tidak ditemukan.",
            escape(query)
        ),
        vec![search_again_row()],
    )
}

pub fn student_detail(record: &StudentRecord) -> (String, Vec<Vec<InlineButton>>) {
    let optional = |v: &Option<String>| escape(v.as_deref().unwrap_or("-"));
    let text = format!(
        "🎓 <b>Detail Mahasiswa</b>\n\n\
         👤 Nama: {}\n\
         🆔 NIM: {}\n\
         🏛 Perguruan Tinggi: {}\n\
         📚 Program Studi: {}\n\
         🎓 Jenjang: {}\n\
         📅 Tahun Masuk: {}\n\
         📌 Status: {}",
        escape(&record.name),
        escape(&record.nim),
        escape(&record.university),
        escape(&record.study_program),
        optional(&record.degree),
        optional(&record.entry_year),
        optional(&record.status)
    );
    (text, vec![search_again_row()])
}

/// Label describing a message for the admin notification.
pub fn message_label(message: &Message) -> String {
    let caption = |c: &Option<String>| c.clone().unwrap_or_else(|| "No caption".to_string());
    match &message.attachment {
        Some(Attachment::Photo { caption: c }) => format!("[Photo] {}", caption(c)),
        Some(Attachment::Document { file_name }) => {
            format!("[Document] {}", file_name.as_deref().unwrap_or("No name"))
        }
        Some(Attachment::Voice) => "[Voice Message]".to_string(),
        Some(Attachment::Video { caption: c }) => format!("[Video] {}", caption(c)),
        Some(Attachment::Sticker { emoji }) => {
            format!("[Sticker] {}", emoji.as_deref().unwrap_or_default())
        }
        Some(Attachment::Location {
            latitude,
            longitude,
        }) => format!("[Location] {}, {}", latitude, longitude),
        Some(Attachment::Contact {
            first_name,
            last_name,
        }) => match last_name {
            Some(last) => format!("[Contact] {} {}", first_name, last),
            None => format!("[Contact] {}", first_name),
        },
        Some(Attachment::Animation) => "[Animation]".to_string(),
        Some(Attachment::Audio { title }) => {
            format!("[Audio] {}", title.as_deref().unwrap_or("No title"))
        }
        None if message.content.is_empty() => "Unknown message".to_string(),
        None => message.content.clone(),
    }
}
