use crate::engine::{AuthEvent, Summary};
use owo_colors::OwoColorize;

const BAR_WIDTH: u64 = 20;

pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();

    // Zero events is informational, not an error: the file was readable, it
    // just contained nothing the grammar recognizes.
    if summary.total == 0 {
        out.push_str("No authentication events found in the input.\n");
        return out;
    }

    out.push_str(&format!(
        "Auth Log Summary\n\
         ================\n\
         entries: {} | unique IPs: {} | {}: {} | {}: {}\n\n",
        summary.total,
        summary.distinct_ips,
        "failed".red().bold(),
        summary.failed,
        "accepted".green().bold(),
        summary.accepted,
    ));

    out.push_str(&render_top_table(
        "Top IPs by failed attempts",
        &summary.top_failed_ips,
    ));
    out.push_str(&render_top_table(
        "Top users by failed attempts",
        &summary.top_failed_users,
    ));

    out
}

fn render_top_table(title: &str, entries: &[(String, u64)]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{title}:\n"));

    if entries.is_empty() {
        out.push_str("  <no failed attempts>\n\n");
        return out;
    }

    let max = entries.iter().map(|(_, c)| *c).max().unwrap_or(1);
    for (key, count) in entries {
        let bars = ((count * BAR_WIDTH) / max).max(1) as usize;
        out.push_str(&format!(
            "  {:<18} {:<20} {:>6}\n",
            key,
            "█".repeat(bars),
            count
        ));
    }
    out.push('\n');

    out
}

pub fn render_events(events: &[AuthEvent]) -> String {
    let mut out = String::new();

    if events.is_empty() {
        out.push_str("No authentication events found in the input.\n");
        return out;
    }

    for e in events {
        let marker = if e.invalid_user { " (invalid user)" } else { "" };
        out.push_str(&format!(
            "{} {} {} {} {}{} from {} port {}\n",
            e.timestamp, e.host, e.service, e.action, e.user, marker, e.ip, e.port
        ));
    }

    out
}
