//! Integration tests for the student bot handler chain.
//!
//! Drives [`student_bot::build_handler_chain`] with core events, a recording [`MockBot`], an
//! in-memory allow-list and a recording notifier.

mod common;

use std::sync::Arc;

use common::{ahmad, user, FixedDirectory, RecordingNotifier};
use handler_chain::HandlerChain;
use mhsbot_core::mock_bot::MockBot;
use mhsbot_core::{Attachment, CallbackQuery, Chat, Event, Message, TextFormat};
use storage::{AllowListStore, AllowedUser, MemoryAllowList};
use student_bot::{
    build_handler_chain, messages, MaintenanceDirectory, SearchSessions, StudentContext,
    StudentDirectory,
};

const ALLOWED: i64 = 1001;
const STRANGER: i64 = 2002;

struct Harness {
    bot: Arc<MockBot>,
    allow_list: MemoryAllowList,
    notifier: Arc<RecordingNotifier>,
    sessions: SearchSessions,
    chain: HandlerChain,
}

impl Harness {
    fn new() -> Self {
        Self::with_directory(Arc::new(MaintenanceDirectory))
    }

    fn with_directory(directory: Arc<dyn StudentDirectory>) -> Self {
        let bot = Arc::new(MockBot::new());
        let allow_list = MemoryAllowList::with_users(vec![AllowedUser::new(
            ALLOWED,
            Some("budi".to_string()),
        )]);
        let notifier = Arc::new(RecordingNotifier::default());
        let sessions = SearchSessions::new();
        let chain = build_handler_chain(StudentContext {
            bot: bot.clone(),
            allow_list: Arc::new(allow_list.clone()),
            directory,
            notifier: notifier.clone(),
            sessions: sessions.clone(),
            registration_token: "ordalnant".to_string(),
        });
        Self {
            bot,
            allow_list,
            notifier,
            sessions,
            chain,
        }
    }

    async fn say(&self, user_id: i64, text: &str) {
        let message = Message::text("10", user(user_id, Some("budi")), text);
        self.chain.handle(&Event::Message(message)).await.unwrap();
    }

    async fn press(&self, user_id: i64, data: &str) {
        let query = CallbackQuery {
            user: user(user_id, None),
            chat: Some(Chat::private(user_id)),
            message_id: Some("55".to_string()),
            data: data.to_string(),
        };
        self.chain.handle(&Event::Callback(query)).await.unwrap();
    }
}

/// **Test: /start shows usage to anyone and clears a pending search.**
#[tokio::test]
async fn test_start_open_to_anyone() {
    let h = Harness::new();
    h.sessions.mark_waiting(STRANGER).await;
    h.say(STRANGER, "/start").await;

    assert_eq!(h.bot.texts(), vec![messages::START_HELP.to_string()]);
    assert!(!h.sessions.is_waiting(STRANGER).await);
}

/// **Test: /regist with a wrong or missing token never mutates.**
#[tokio::test]
async fn test_regist_wrong_token() {
    let h = Harness::new();
    h.say(STRANGER, "/regist wrongtoken").await;
    h.say(STRANGER, "/regist").await;

    assert_eq!(
        h.bot.texts(),
        vec![messages::WRONG_TOKEN.to_string(), messages::WRONG_TOKEN.to_string()]
    );
    assert_eq!(h.allow_list.write_count().await, 0);
    assert!(!h.allow_list.is_allowed(STRANGER).await);
}

/// **Test: /regist ordalnant (any case) for a new user appends exactly one record with username.**
#[tokio::test]
async fn test_regist_new_user() {
    let h = Harness::new();
    h.say(STRANGER, "/regist OrdalNant").await;

    assert_eq!(h.bot.last_text().unwrap(), messages::REGISTERED);
    let list = h.allow_list.load().await;
    assert_eq!(list.users.len(), 2);
    let record = list.get(STRANGER).unwrap();
    assert_eq!(record.username.as_deref(), Some("budi"));
    assert!(record.added_at.is_some());
}

/// **Test: /regist for an already registered user only confirms.**
#[tokio::test]
async fn test_regist_already_registered() {
    let h = Harness::new();
    h.say(ALLOWED, "/regist ordalnant").await;

    assert_eq!(h.bot.last_text().unwrap(), messages::ALREADY_REGISTERED);
    assert_eq!(h.allow_list.load().await.users.len(), 1);
    assert_eq!(h.allow_list.write_count().await, 0);
}

/// **Test: /regist stores `Unknown` when the user has no username.**
#[tokio::test]
async fn test_regist_without_username() {
    let h = Harness::new();
    let message = Message::text("1", user(STRANGER, None), "/regist ordalnant");
    h.chain.handle(&Event::Message(message)).await.unwrap();

    let list = h.allow_list.load().await;
    assert_eq!(list.get(STRANGER).unwrap().username.as_deref(), Some("Unknown"));
}

/// **Test: /cari from a user not in the allow-list gets the HTML restricted text and no search.**
#[tokio::test]
async fn test_cari_restricted() {
    let h = Harness::new();
    h.say(STRANGER, "/cari Ahmad").await;

    let records = h.bot.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message.text, messages::RESTRICTED);
    assert_eq!(records[0].message.format, TextFormat::Html);
}

/// **Test: /cari with the default backend shows 0% progress then the maintenance text.**
#[tokio::test]
async fn test_cari_maintenance() {
    let h = Harness::new();
    h.say(ALLOWED, "/cari Ahmad Fauzi").await;

    assert_eq!(
        h.bot.texts(),
        vec![
            "🔍 Mencari data mahasiswa...\n[▱▱▱▱▱▱▱▱▱▱] 0%".to_string(),
            messages::SEARCH_MAINTENANCE.to_string(),
        ]
    );
}

/// **Test: /cari without a query asks with a force-reply and the next message becomes the query.**
#[tokio::test]
async fn test_cari_without_query_then_reply() {
    let directory = Arc::new(FixedDirectory::new(vec![ahmad()]));
    let h = Harness::with_directory(directory.clone());

    h.say(ALLOWED, "/cari").await;
    let prompt = h.bot.records().pop().unwrap();
    assert_eq!(prompt.message.text, messages::SEARCH_PROMPT);
    assert!(prompt.message.force_reply);
    assert!(h.sessions.is_waiting(ALLOWED).await);

    h.say(ALLOWED, "Ahmad").await;
    assert!(!h.sessions.is_waiting(ALLOWED).await);
    assert_eq!(*directory.queries.lock().unwrap(), vec!["Ahmad".to_string()]);
    assert!(h.notifier.labels().is_empty());
}

/// **Test: Results edit the progress to 100% and carry one mhs_ button per hit plus cari_lagi.**
#[tokio::test]
async fn test_cari_with_results() {
    let h = Harness::with_directory(Arc::new(FixedDirectory::new(vec![ahmad()])));
    h.say(ALLOWED, "/cari ahmad").await;

    let records = h.bot.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].edited.as_deref(), Some("1"));
    assert!(records[1].message.text.ends_with("100%"));

    let results = &records[2].message;
    assert!(results.text.contains("Ahmad Fauzi"));
    assert_eq!(results.keyboard.len(), 2);
    assert_eq!(results.keyboard[0][0].data, "mhs_a1");
    assert_eq!(results.keyboard[1][0].data, messages::CARI_LAGI);
}

/// **Test: No results gives the not-found text with a cari_lagi button.**
#[tokio::test]
async fn test_cari_not_found() {
    let h = Harness::with_directory(Arc::new(FixedDirectory::new(vec![ahmad()])));
    h.say(ALLOWED, "/cari Zulkifli").await;

    let last = h.bot.records().pop().unwrap();
    assert!(last.message.text.contains("tidak ditemukan"));
    assert_eq!(last.message.keyboard, vec![vec![mhsbot_core::InlineButton::new("🔍 Cari Lagi", "cari_lagi")]]);
}

/// **Test: mhs_ callback with the default backend edits the message to the detail maintenance text.**
#[tokio::test]
async fn test_detail_callback_maintenance() {
    let h = Harness::new();
    h.press(ALLOWED, "mhs_123").await;

    let records = h.bot.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].edited.as_deref(), Some("55"));
    assert_eq!(records[0].message.text, messages::DETAIL_MAINTENANCE);
}

/// **Test: mhs_ callback with a working backend shows the record.**
#[tokio::test]
async fn test_detail_callback_with_record() {
    let h = Harness::with_directory(Arc::new(FixedDirectory::new(vec![ahmad()])));
    h.press(ALLOWED, "mhs_a1").await;

    let text = h.bot.last_text().unwrap();
    assert!(text.contains("NIM: 2020123456"));
    assert!(text.contains("Status: Aktif"));
}

/// **Test: A backend failure on a callback is reported as `❌ Terjadi kesalahan: ...`.**
#[tokio::test]
async fn test_detail_callback_backend_error() {
    let h = Harness::with_directory(Arc::new(FixedDirectory::new(vec![])));
    h.press(ALLOWED, "mhs_missing").await;
    assert_eq!(
        h.bot.last_text().unwrap(),
        "❌ Terjadi kesalahan: Directory error: student directory error: no student missing"
    );
}

/// **Test: cari_lagi edits to the search prompt and sets the waiting flag.**
#[tokio::test]
async fn test_cari_lagi_callback() {
    let h = Harness::new();
    h.press(ALLOWED, "cari_lagi").await;

    let last = h.bot.records().pop().unwrap();
    assert_eq!(last.message.text, messages::SEARCH_AGAIN_PROMPT);
    assert_eq!(last.edited.as_deref(), Some("55"));
    assert!(h.sessions.is_waiting(ALLOWED).await);
}

/// **Test: Callbacks from users not in the allow-list edit to the restricted text only.**
#[tokio::test]
async fn test_callback_denied() {
    let h = Harness::new();
    h.press(STRANGER, "cari_lagi").await;

    assert_eq!(h.bot.texts(), vec![messages::RESTRICTED.to_string()]);
    assert!(!h.sessions.is_waiting(STRANGER).await);
}

/// **Test: Unknown callback data is ignored.**
#[tokio::test]
async fn test_unknown_callback_ignored() {
    let h = Harness::new();
    h.press(ALLOWED, "something_else").await;
    assert!(h.bot.texts().is_empty());
}

/// **Test: Messages from allowed users are relayed to the admin with their label.**
#[tokio::test]
async fn test_relay_allowed_messages() {
    let h = Harness::new();
    h.say(ALLOWED, "halo admin").await;

    let mut photo = Message::text("11", user(ALLOWED, None), "");
    photo.attachment = Some(Attachment::Photo {
        caption: Some("KTM".to_string()),
    });
    h.chain.handle(&Event::Message(photo)).await.unwrap();

    assert_eq!(h.notifier.labels(), vec!["halo admin", "[Photo] KTM"]);
    assert!(h.bot.texts().is_empty());
}

/// **Test: Messages from strangers get the refusal and are not relayed.**
#[tokio::test]
async fn test_relay_refuses_strangers() {
    let h = Harness::new();
    h.say(STRANGER, "halo").await;

    assert_eq!(h.bot.texts(), vec![messages::REFUSAL.to_string()]);
    assert!(h.notifier.labels().is_empty());
}

/// **Test: Unknown commands are neither answered nor relayed.**
#[tokio::test]
async fn test_unknown_command_not_relayed() {
    let h = Harness::new();
    h.say(ALLOWED, "/help").await;
    assert!(h.bot.texts().is_empty());
    assert!(h.notifier.labels().is_empty());
}
