//! Wire models for the Zoom REST API v2.
//!
//! User and meeting types arrive as numeric codes; the enums here keep the
//! code round-trippable (unknown codes are carried opaquely) and expose the
//! display labels as immutable match tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/* ---- User ---- */

/// Account-level user type. Wire codes: 1 = Basic, 2 = Licensed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum UserType {
    Basic,
    Licensed,
    Other(u8),
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Basic => "Basic",
            UserType::Licensed => "Licensed",
            UserType::Other(_) => "Unknown",
        }
    }

    pub fn is_licensed(&self) -> bool {
        matches!(self, UserType::Licensed)
    }
}

impl From<u8> for UserType {
    fn from(code: u8) -> Self {
        match code {
            1 => UserType::Basic,
            2 => UserType::Licensed,
            other => UserType::Other(other),
        }
    }
}

impl From<UserType> for u8 {
    fn from(t: UserType) -> Self {
        match t {
            UserType::Basic => 1,
            UserType::Licensed => 2,
            UserType::Other(code) => code,
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

impl User {
    /// Lookup accepts either identity key.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.email == key
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Deserialize)]
pub struct UserListPage {
    #[serde(default)]
    pub users: Vec<User>,
}

/* ---- Meeting ---- */

/// Meeting kind. Wire codes: 1 = Instant, 2 = Scheduled,
/// 3 = recurring with no fixed time, 8 = recurring with fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MeetingType {
    Instant,
    Scheduled,
    RecurringNoFixedTime,
    RecurringFixedTime,
    Other(u8),
}

impl MeetingType {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingType::Instant => "Instant",
            MeetingType::Scheduled => "Scheduled",
            MeetingType::RecurringNoFixedTime => "Recurring (no fixed time)",
            MeetingType::RecurringFixedTime => "Recurring (fixed time)",
            MeetingType::Other(_) => "Unknown",
        }
    }

    /// Only these kinds carry a meaningful duration on the wire.
    pub fn has_fixed_duration(&self) -> bool {
        matches!(self, MeetingType::Scheduled | MeetingType::RecurringFixedTime)
    }
}

impl From<u8> for MeetingType {
    fn from(code: u8) -> Self {
        match code {
            1 => MeetingType::Instant,
            2 => MeetingType::Scheduled,
            3 => MeetingType::RecurringNoFixedTime,
            8 => MeetingType::RecurringFixedTime,
            other => MeetingType::Other(other),
        }
    }
}

impl From<MeetingType> for u8 {
    fn from(t: MeetingType) -> Self {
        match t {
            MeetingType::Instant => 1,
            MeetingType::Scheduled => 2,
            MeetingType::RecurringNoFixedTime => 3,
            MeetingType::RecurringFixedTime => 8,
            MeetingType::Other(code) => code,
        }
    }
}

impl fmt::Display for MeetingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    #[serde(default)]
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: MeetingType,
    /// RFC 3339 timestamp; absent for instant and open-ended recurring meetings.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Minutes; present only for kinds with a fixed duration.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub join_url: String,
}

#[derive(Debug, Deserialize)]
pub struct MeetingListPage {
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_type_codes_round_trip() {
        assert_eq!(UserType::from(1), UserType::Basic);
        assert_eq!(UserType::from(2), UserType::Licensed);
        assert_eq!(u8::from(UserType::Licensed), 2);
        assert_eq!(u8::from(UserType::Other(9)), 9);
    }

    #[test]
    fn user_type_labels() {
        assert_eq!(UserType::Basic.label(), "Basic");
        assert_eq!(UserType::Licensed.label(), "Licensed");
        assert_eq!(UserType::Other(7).label(), "Unknown");
    }

    #[test]
    fn user_deserializes_from_wire_shape() {
        let u: User = serde_json::from_value(json!({
            "id": "abc",
            "email": "jane@example.com",
            "first_name": "Jane",
            "last_name": "Doe",
            "type": 2
        }))
        .unwrap();
        assert!(u.user_type.is_licensed());
        assert!(u.matches("abc"));
        assert!(u.matches("jane@example.com"));
        assert!(!u.matches("someone@else.com"));
    }

    #[test]
    fn meeting_optional_fields_default() {
        let m: Meeting = serde_json::from_value(json!({
            "topic": "Standup",
            "type": 3,
            "join_url": "https://zoom.us/j/1"
        }))
        .unwrap();
        assert_eq!(m.meeting_type, MeetingType::RecurringNoFixedTime);
        assert!(m.start_time.is_none());
        assert!(m.duration.is_none());
        assert!(!m.meeting_type.has_fixed_duration());
    }

    #[test]
    fn fixed_duration_kinds() {
        assert!(MeetingType::Scheduled.has_fixed_duration());
        assert!(MeetingType::RecurringFixedTime.has_fixed_duration());
        assert!(!MeetingType::Instant.has_fixed_duration());
        assert!(!MeetingType::Other(42).has_fixed_duration());
    }

    #[test]
    fn empty_list_pages_deserialize() {
        let p: UserListPage = serde_json::from_value(json!({})).unwrap();
        assert!(p.users.is_empty());
        let p: MeetingListPage = serde_json::from_value(json!({})).unwrap();
        assert!(p.meetings.is_empty());
    }
}
