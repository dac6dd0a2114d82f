pub(crate) enum SensitiveMode {
    /// do not show any char
    Full,
    /// only the specified number of characters will be displayed at most.
    /// However, if the length is less than this number, none of them will be displayed.
    Normal(usize),
}

/// # get hidden sensitive string
///
/// convert string from "something" to "so*****ng"
///
/// ### Arguments
///
/// * `str`: original string
/// * `sensitive_mode`: mode to show sensitive string
pub(crate) fn get_hidden_sensitive_string(str: &str, sensitive_mode: SensitiveMode) -> String {
    let len = str.chars().count();
    let show_len = match sensitive_mode {
        SensitiveMode::Full => 0,
        SensitiveMode::Normal(shown_len) => shown_len,
    };

    let prefix_len = show_len / 2;
    let suffix_len = show_len - prefix_len;

    str.chars()
        .enumerate()
        .map(|(i, c)| {
            if len < show_len || (i >= prefix_len && i < len - suffix_len) {
                '*'
            } else {
                c
            }
        })
        .collect()
}

/// # first non blank
///
/// Pick the first candidate holding a non-blank value, trimmed.
/// Candidates are ordered by precedence: cli param, environment, config file.
pub(crate) fn first_non_blank<'a, I>(candidates: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .map(str::to_string)
}
