use crate::engine::aggregate::{Summary, summarize};
use crate::engine::stream::events;
use crate::engine::types::{Action, AuthEvent};
use pretty_assertions::assert_eq;

fn event(action: Action, ip: &str, user: &str) -> AuthEvent {
    AuthEvent {
        timestamp: "Jun 5 10:00:01".to_string(),
        host: "bastion".to_string(),
        service: "sshd".to_string(),
        action,
        user: user.to_string(),
        ip: ip.to_string(),
        port: "4242".to_string(),
        invalid_user: false,
    }
}

fn failed(ip: &str, user: &str) -> AuthEvent {
    event(Action::Failed, ip, user)
}

fn accepted(ip: &str, user: &str) -> AuthEvent {
    event(Action::Accepted, ip, user)
}

#[test]
fn zero_events_yield_an_all_zero_summary() {
    // Act
    let summary = summarize([]);

    // Assert
    assert_eq!(
        summary,
        Summary {
            total: 0,
            distinct_ips: 0,
            failed: 0,
            accepted: 0,
            top_failed_ips: vec![],
            top_failed_users: vec![],
        }
    );
}

#[test]
fn all_accepted_events_leave_the_failure_tables_empty() {
    // Arrange
    let batch = vec![
        accepted("10.0.0.1", "alice"),
        accepted("10.0.0.2", "bob"),
        accepted("10.0.0.1", "alice"),
    ];

    // Act
    let summary = summarize(&batch);

    // Assert
    assert_eq!(summary.total, 3);
    assert_eq!(summary.distinct_ips, 2);
    assert_eq!(summary.accepted, 3);
    assert_eq!(summary.failed, 0);
    assert_eq!(summary.top_failed_ips, vec![]);
    assert_eq!(summary.top_failed_users, vec![]);
}

#[test]
fn mixed_batch_counts_outcomes_and_ranks_offenders() {
    // Arrange: the raw lines, including one that does not parse
    let lines = [
        "Jun 5 10:00:01 host sshd[123]: Failed password for invalid user admin from 10.0.0.5 port 5555 ssh2",
        "Jun 5 10:00:02 host sshd[124]: Accepted password for bob from 10.0.0.6 port 5556 ssh2",
        "Jun 5 10:00:03 host sshd[125]: Failed password for admin from 10.0.0.5 port 5557 ssh2",
        "not a log line",
    ];

    // Act
    let batch: Vec<AuthEvent> = events(lines).collect();
    let summary = summarize(&batch);

    // Assert
    assert_eq!(summary.total, 3);
    assert_eq!(summary.distinct_ips, 2);
    assert_eq!(summary.failed, 2);
    assert_eq!(summary.accepted, 1);
    assert_eq!(summary.top_failed_ips, vec![("10.0.0.5".to_string(), 2)]);
    assert_eq!(summary.top_failed_users, vec![("admin".to_string(), 2)]);
}

#[test]
fn summarize_is_a_pure_function_of_its_input() {
    // Arrange
    let batch = vec![
        failed("10.0.0.5", "admin"),
        accepted("10.0.0.6", "bob"),
        failed("10.0.0.5", "root"),
    ];

    // Act
    let first = summarize(&batch);
    let second = summarize(&batch);

    // Assert
    assert_eq!(first, second);
}

#[test]
fn top_tables_rank_by_descending_count() {
    // Arrange
    let batch = vec![
        failed("192.0.2.9", "oracle"),
        failed("203.0.113.7", "root"),
        failed("203.0.113.7", "root"),
        failed("203.0.113.7", "admin"),
        failed("198.51.100.23", "admin"),
        failed("198.51.100.23", "admin"),
    ];

    // Act
    let summary = summarize(&batch);

    // Assert
    assert_eq!(
        summary.top_failed_ips,
        vec![
            ("203.0.113.7".to_string(), 3),
            ("198.51.100.23".to_string(), 2),
            ("192.0.2.9".to_string(), 1),
        ]
    );
    assert_eq!(
        summary.top_failed_users,
        vec![
            ("admin".to_string(), 3),
            ("root".to_string(), 2),
            ("oracle".to_string(), 1),
        ]
    );
}

#[test]
fn equal_counts_rank_in_first_seen_order() {
    // Arrange: three IPs tied at one failure each
    let batch = vec![
        failed("10.9.9.9", "charlie"),
        failed("10.1.1.1", "alice"),
        failed("10.5.5.5", "bob"),
    ];

    // Act
    let summary = summarize(&batch);

    // Assert
    assert_eq!(
        summary.top_failed_ips,
        vec![
            ("10.9.9.9".to_string(), 1),
            ("10.1.1.1".to_string(), 1),
            ("10.5.5.5".to_string(), 1),
        ]
    );
}

#[test]
fn top_tables_are_capped_at_ten_entries() {
    // Arrange: twelve distinct IPs, one failure each
    let batch: Vec<AuthEvent> = (0..12)
        .map(|i| failed(&format!("10.0.0.{i}"), &format!("user{i}")))
        .collect();

    // Act
    let summary = summarize(&batch);

    // Assert: capped, and still in first-seen order for the tied counts
    assert_eq!(summary.top_failed_ips.len(), 10);
    assert_eq!(summary.top_failed_users.len(), 10);
    assert_eq!(summary.top_failed_ips[0], ("10.0.0.0".to_string(), 1));
    assert_eq!(summary.top_failed_ips[9], ("10.0.0.9".to_string(), 1));
}

#[test]
fn counts_in_top_tables_never_increase() {
    // Arrange
    let batch = vec![
        failed("10.0.0.1", "a"),
        failed("10.0.0.2", "b"),
        failed("10.0.0.2", "b"),
        failed("10.0.0.3", "c"),
        failed("10.0.0.3", "c"),
        failed("10.0.0.3", "c"),
    ];

    // Act
    let summary = summarize(&batch);

    // Assert
    let counts: Vec<u64> = summary.top_failed_ips.iter().map(|(_, c)| *c).collect();
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
}
