//! Allow-list model: `{ "users": [ { "id", "username"?, "added_at" } ] }`.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::now_timestamp;

/// One authorized Telegram user. `id` is the unique key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Missing in hand-edited files; always written by this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
    /// Fields this crate does not know about, written back as found.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AllowedUser {
    /// New record stamped with the current time.
    pub fn new(id: i64, username: Option<String>) -> Self {
        Self {
            id,
            username,
            added_at: Some(now_timestamp()),
            extra: Map::new(),
        }
    }
}

/// Result of [`AllowList::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// The whole allow-list file.
///
/// Serializes as `{ "users": [...users, ...unparsed], ...extra }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    pub users: Vec<AllowedUser>,
    /// Records under `users` that are not valid [`AllowedUser`]s. Never matched, never dropped.
    pub unparsed: Vec<Value>,
    /// Top-level keys other than `users`.
    pub extra: Map<String, Value>,
}

struct Records<'a>(&'a AllowList);

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let list = self.0;
        let mut seq = serializer.serialize_seq(Some(list.users.len() + list.unparsed.len()))?;
        for user in &list.users {
            seq.serialize_element(user)?;
        }
        for record in &list.unparsed {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl Serialize for AllowList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.extra.len()))?;
        map.serialize_entry("users", &Records(self))?;
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl AllowList {
    pub fn contains(&self, user_id: i64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    pub fn get(&self, user_id: i64) -> Option<&AllowedUser> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Appends `user` unless its id is already present.
    pub fn insert(&mut self, user: AllowedUser) -> AddOutcome {
        if self.contains(user.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.users.push(user);
        AddOutcome::Added
    }

    /// Removes every record with `user_id`; returns how many were removed.
    pub fn remove(&mut self, user_id: i64) -> usize {
        let before = self.users.len();
        self.users.retain(|u| u.id != user_id);
        before - self.users.len()
    }

    /// Number of valid user records.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_id() {
        let mut list = AllowList::default();
        assert_eq!(list.insert(AllowedUser::new(1, None)), AddOutcome::Added);
        assert_eq!(
            list.insert(AllowedUser::new(1, Some("other".to_string()))),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().username, None);
    }

    #[test]
    fn test_remove_drops_every_match_and_keeps_others() {
        let mut list = AllowList {
            users: vec![
                AllowedUser::new(1, None),
                AllowedUser::new(2, None),
                AllowedUser::new(1, None),
            ],
            ..Default::default()
        };
        assert_eq!(list.remove(1), 2);
        assert_eq!(list.users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
        assert_eq!(list.remove(99), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_serialized_shape_omits_missing_username() {
        let user = AllowedUser {
            id: 5,
            username: None,
            added_at: Some("2024-01-02 03:04:05".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": 5, "added_at": "2024-01-02 03:04:05" })
        );
    }

    #[test]
    fn test_serialized_list_keeps_unparsed_records_and_extra_keys() {
        let mut extra = Map::new();
        extra.insert("version".to_string(), serde_json::json!(2));
        let list = AllowList {
            users: vec![AllowedUser {
                id: 1,
                extra: serde_json::from_value(serde_json::json!({ "note": "vip" })).unwrap(),
                ..Default::default()
            }],
            unparsed: vec![serde_json::json!({ "id": "123" })],
            extra,
        };
        assert_eq!(
            serde_json::to_value(&list).unwrap(),
            serde_json::json!({
                "users": [{ "id": 1, "note": "vip" }, { "id": "123" }],
                "version": 2
            })
        );
    }
}
