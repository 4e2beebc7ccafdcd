use crate::engine::types::{Action, AuthEvent};
use once_cell::sync::Lazy;
use regex::Regex;

/// "Jun 5 10:00:01 host sshd[123]: Failed password for invalid user admin from 10.0.0.5 port 5555 ssh2"
static AUTH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?P<timestamp>\w{3} \d{1,2} \d{2}:\d{2}:\d{2}) (?P<host>\S+) (?P<service>\w+)\[\d+\]: (?P<action>Accepted|Failed) password for(?P<invalid> invalid user)? (?P<user>\w+) from (?P<ip>\d+\.\d+\.\d+\.\d+) port (?P<port>\d+) ssh2",
    )
    .expect("auth line regex")
});

/// Extract one event from one raw line.
///
/// The pattern is searched anywhere in the line, not anchored to its start,
/// so log-framework prefixes ahead of the timestamp do not prevent a match.
pub fn parse_line(line: &str) -> Option<AuthEvent> {
    let caps = AUTH_LINE.captures(line)?;

    let action = match &caps["action"] {
        "Accepted" => Action::Accepted,
        _ => Action::Failed,
    };

    Some(AuthEvent {
        timestamp: caps["timestamp"].to_string(),
        host: caps["host"].to_string(),
        service: caps["service"].to_string(),
        action,
        user: caps["user"].to_string(),
        ip: caps["ip"].to_string(),
        port: caps["port"].to_string(),
        invalid_user: caps.name("invalid").is_some(),
    })
}
