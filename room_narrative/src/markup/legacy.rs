//! Legacy time-of-day markup: `<morning>...</morning>` style spans.

use regex_lite::Regex;

/// Filters time-of-day spans out of description text.
///
/// One pattern is compiled per time-of-day name. Tag names match
/// case-insensitively, spans may cross lines and end at the nearest closing
/// tag. Spans are not nested; unclosed tags and unknown tags pass through
/// untouched.
#[derive(Debug, Clone)]
pub struct LegacyTimeMarkup {
    patterns: Vec<(String, Regex)>,
}

impl LegacyTimeMarkup {
    /// Compile patterns for the given time-of-day names.
    pub fn new<I, S>(names: I) -> Result<Self, regex_lite::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = names
            .into_iter()
            .map(|name| {
                let name = name.as_ref().to_lowercase();
                let escaped = regex_lite::escape(&name);
                let regex = Regex::new(&format!(r"(?is)<{escaped}>(.*?)</{escaped}>"))?;
                Ok((name, regex))
            })
            .collect::<Result<Vec<_>, regex_lite::Error>>()?;

        Ok(Self { patterns })
    }

    /// Names this filter recognises, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|(name, _)| name.as_str())
    }

    /// Keep the inner text of spans for `current_time_of_day` and drop
    /// every other recognised span entirely.
    pub fn filter(&self, text: &str, current_time_of_day: &str) -> String {
        let current = current_time_of_day.to_lowercase();
        let mut result = text.to_string();

        for (name, regex) in &self.patterns {
            let replacement = if *name == current { "${1}" } else { "" };
            if regex.is_match(&result) {
                tracing::trace!(tag = %name, keep = (*name == current), "filtering time-of-day spans");
                result = regex.replace_all(&result, replacement).into_owned();
            }
        }

        result
    }
}
