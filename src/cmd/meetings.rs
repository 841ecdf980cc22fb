/*!
meetings.rs - `list-meetings`: a cross-user, time-ordered view of upcoming
meetings.

Each user's upcoming meetings are fetched in turn and tagged with the
owner's display fields, then everything is merged into one sequence ordered
by (start_time, topic). Meetings without a start time sort after all timed
ones via a sentinel key that collates after any RFC 3339 timestamp.
*/

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cmd::{format, shared};
use crate::creds::Credentials;
use crate::zoom::types::{Meeting, MeetingType, User};

/// Collates after any RFC 3339 timestamp (those start with a digit).
const UNTIMED_SENTINEL: &str = "~";

#[derive(Args, Debug)]
pub struct MeetingsArgs {
    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// A meeting tagged with its owner's display fields.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedMeeting {
    pub topic: String,
    pub kind: &'static str,
    #[serde(skip)]
    pub meeting_type: MeetingType,
    pub start_time: Option<String>,
    pub duration_minutes: Option<u32>,
    pub join_url: String,
    pub host_name: String,
    pub host_email: String,
    pub host_type: &'static str,
}

impl OwnedMeeting {
    pub fn new(meeting: Meeting, owner: &User) -> Self {
        Self {
            topic: meeting.topic,
            kind: meeting.meeting_type.label(),
            meeting_type: meeting.meeting_type,
            start_time: meeting.start_time,
            duration_minutes: meeting.duration,
            join_url: meeting.join_url,
            host_name: owner.display_name(),
            host_email: owner.email.clone(),
            host_type: owner.user_type.label(),
        }
    }

    fn sort_key(&self) -> (&str, &str) {
        (
            self.start_time.as_deref().unwrap_or(UNTIMED_SENTINEL),
            &self.topic,
        )
    }
}

/// Order by (start_time, topic), untimed meetings last.
pub fn sort_meetings(meetings: &mut [OwnedMeeting]) {
    meetings.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

pub fn execute_meetings(args: MeetingsArgs, creds: &Credentials) -> Result<()> {
    let remote = shared::Remote::connect(creds)?;
    let users = remote.list_users()?;

    let mut merged: Vec<OwnedMeeting> = Vec::new();
    for user in &users {
        let meetings = remote.upcoming_meetings(&user.id)?;
        crate::log_debug!("{}: {} upcoming meetings", user.email, meetings.len());
        merged.extend(meetings.into_iter().map(|m| OwnedMeeting::new(m, user)));
    }
    sort_meetings(&mut merged);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    if merged.is_empty() {
        println!("no upcoming meetings");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = merged
        .iter()
        .map(|m| {
            vec![
                m.start_time.clone().unwrap_or_else(|| "-".to_string()),
                format::duration_hhmm(m.meeting_type, m.duration_minutes),
                m.topic.clone(),
                m.kind.to_string(),
                format!("{} <{}>", m.host_name, m.host_email),
                m.join_url.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        format::table(&["START", "DUR", "TOPIC", "KIND", "HOST", "JOIN URL"], &rows)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::shared::test_user;
    use crate::zoom::types::UserType;

    fn meeting(topic: &str, start: Option<&str>) -> OwnedMeeting {
        let owner = test_user("1", "host@example.com", UserType::Licensed);
        OwnedMeeting::new(
            Meeting {
                topic: topic.to_string(),
                meeting_type: MeetingType::Scheduled,
                start_time: start.map(str::to_string),
                duration: Some(30),
                join_url: "https://zoom.us/j/1".to_string(),
            },
            &owner,
        )
    }

    fn order(meetings: &[OwnedMeeting]) -> Vec<(&str, Option<&str>)> {
        meetings
            .iter()
            .map(|m| (m.topic.as_str(), m.start_time.as_deref()))
            .collect()
    }

    #[test]
    fn untimed_meetings_sort_last() {
        let mut ms = vec![
            meeting("B", Some("2024-01-02T10:00:00Z")),
            meeting("A", None),
            meeting("A", Some("2024-01-01T09:00:00Z")),
        ];
        sort_meetings(&mut ms);
        assert_eq!(
            order(&ms),
            vec![
                ("A", Some("2024-01-01T09:00:00Z")),
                ("B", Some("2024-01-02T10:00:00Z")),
                ("A", None),
            ]
        );
    }

    #[test]
    fn ties_break_on_topic() {
        let mut ms = vec![
            meeting("Zebra", Some("2024-03-01T12:00:00Z")),
            meeting("Alpha", Some("2024-03-01T12:00:00Z")),
            meeting("Mid", Some("2024-03-01T12:00:00Z")),
        ];
        sort_meetings(&mut ms);
        let topics: Vec<&str> = ms.iter().map(|m| m.topic.as_str()).collect();
        assert_eq!(topics, vec!["Alpha", "Mid", "Zebra"]);
    }

    #[test]
    fn untimed_meetings_also_order_by_topic() {
        let mut ms = vec![meeting("B", None), meeting("A", None)];
        sort_meetings(&mut ms);
        let topics: Vec<&str> = ms.iter().map(|m| m.topic.as_str()).collect();
        assert_eq!(topics, vec!["A", "B"]);
    }

    #[test]
    fn owner_fields_are_denormalized() {
        let owner = test_user("7", "carol@example.com", UserType::Basic);
        let m = OwnedMeeting::new(
            Meeting {
                topic: "1:1".into(),
                meeting_type: MeetingType::Instant,
                start_time: None,
                duration: None,
                join_url: "https://zoom.us/j/9".into(),
            },
            &owner,
        );
        assert_eq!(m.host_email, "carol@example.com");
        assert_eq!(m.host_type, "Basic");
        assert_eq!(m.kind, "Instant");
    }
}
