use crate::engine::parse::parse_line;
use crate::engine::types::AuthEvent;

/// Lazily extract events from lines, in input order.
///
/// Non-matching lines are skipped, so the output is an ordered subsequence of
/// the input: at most one event per line, relative order preserved. Nothing
/// is buffered; the iterator is as restartable as the line source itself.
pub fn events<'a, I>(lines: I) -> impl Iterator<Item = AuthEvent>
where
    I: IntoIterator<Item = &'a str>,
{
    lines.into_iter().filter_map(parse_line)
}
