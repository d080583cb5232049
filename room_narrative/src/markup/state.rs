//! `$state(name, text)` markup: text shown only while a room state applies.

use regex_lite::Regex;
use room_rules::RoomStateSet;
use std::sync::LazyLock;

/// State name that applies to a room with no active states.
pub const DEFAULT_STATE: &str = "default";

static STATE_CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\$state\s*\(").expect("valid regex"));

/// What a `$state()` call is checked against.
#[derive(Debug, Clone, Copy)]
pub struct StateContext<'a> {
    pub states: &'a RoomStateSet,
    pub time_of_day: &'a str,
}

impl<'a> StateContext<'a> {
    pub fn new(states: &'a RoomStateSet, time_of_day: &'a str) -> Self {
        Self {
            states,
            time_of_day,
        }
    }

    /// Check if `name` applies: an active room state, the current time of
    /// day, or `default` while the room has no states.
    pub fn applies(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }
        self.states.contains(&name)
            || name == self.time_of_day.to_lowercase()
            || (name == DEFAULT_STATE && self.states.is_empty())
    }
}

/// Replace every `$state(name, text)` call with `text` when `name` applies
/// and with nothing otherwise.
///
/// Everything after the first comma is the text, so it may contain commas
/// and balanced parentheses. A call without a closing parenthesis is left
/// as written, along with the rest of the text.
pub fn filter_state_markup(text: &str, context: &StateContext<'_>) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(open) = STATE_CALL_RE.find_at(text, cursor) {
        let args_start = open.end();
        let Some(args_end) = closing_paren(&text[args_start..]).map(|i| args_start + i) else {
            tracing::trace!(offset = open.start(), "unclosed $state call left as written");
            break;
        };

        result.push_str(&text[cursor..open.start()]);

        let args = &text[args_start..args_end];
        let (name, shown) = match args.split_once(',') {
            Some((name, shown)) => (name, shown.trim()),
            None => (args, ""),
        };
        if context.applies(name) {
            result.push_str(shown);
        }

        cursor = args_end + 1;
    }

    result.push_str(&text[cursor..]);
    result
}

/// Byte offset of the parenthesis closing an already opened call.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}
