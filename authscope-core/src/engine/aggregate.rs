use crate::engine::constants::TOP_N;
use crate::engine::types::{Action, AuthEvent};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Frequency table that remembers the order in which keys were first seen, so
/// that equal counts rank deterministically (earlier key wins).
#[derive(Default)]
struct FrequencyTable {
    // key -> (first-seen sequence, count)
    counts: HashMap<String, (usize, u64)>,
}

impl FrequencyTable {
    fn bump(&mut self, key: &str) {
        let next_seq = self.counts.len();
        self.counts
            .entry(key.to_string())
            .or_insert((next_seq, 0))
            .1 += 1;
    }

    fn top(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|(_, (seq_a, count_a)), (_, (seq_b, count_b))| {
            count_b.cmp(count_a).then(seq_a.cmp(seq_b))
        });

        entries
            .into_iter()
            .take(n)
            .map(|(key, (_, count))| (key.clone(), *count))
            .collect()
    }
}

/// Aggregate statistics for one complete event sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: u64,
    pub distinct_ips: u64,
    pub failed: u64,
    pub accepted: u64,
    /// Top IPs by failure count, descending; ties in first-seen input order.
    pub top_failed_ips: Vec<(String, u64)>,
    /// Top usernames by failure count, same ordering rules.
    pub top_failed_users: Vec<(String, u64)>,
}

/// Single-pass accumulator over an event sequence.
///
/// The counts are associative, so the caller may fuse parsing and aggregation
/// into one pass without buffering events. Push order only affects
/// tie-breaking in the top tables.
#[derive(Default)]
pub struct Aggregator {
    total: u64,
    ips: HashSet<String>,
    failed: u64,
    accepted: u64,
    failed_by_ip: FrequencyTable,
    failed_by_user: FrequencyTable,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: &AuthEvent) {
        self.total += 1;

        if !self.ips.contains(&event.ip) {
            self.ips.insert(event.ip.clone());
        }

        match event.action {
            Action::Accepted => self.accepted += 1,
            Action::Failed => {
                self.failed += 1;
                self.failed_by_ip.bump(&event.ip);
                self.failed_by_user.bump(&event.user);
            }
        }
    }

    pub fn finish(self) -> Summary {
        Summary {
            total: self.total,
            distinct_ips: self.ips.len() as u64,
            failed: self.failed,
            accepted: self.accepted,
            top_failed_ips: self.failed_by_ip.top(TOP_N),
            top_failed_users: self.failed_by_user.top(TOP_N),
        }
    }
}

/// Summarize a complete event sequence in one pass.
///
/// Zero events is a valid input: every count is zero and both top tables are
/// empty.
pub fn summarize<'a, I>(events: I) -> Summary
where
    I: IntoIterator<Item = &'a AuthEvent>,
{
    let mut agg = Aggregator::new();

    for event in events {
        agg.push(event);
    }

    agg.finish()
}
