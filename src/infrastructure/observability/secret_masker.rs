const MIN_MASKABLE_CHARS: usize = 9;

/// Renders an API key safe for log output: long keys keep their first and
/// last four characters, anything shorter disappears entirely.
pub fn mask_api_key(key: &str) -> String {
    let trimmed = key.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let chars: Vec<char> = trimmed.chars().collect();
    if chars.len() < MIN_MASKABLE_CHARS {
        return String::from("[REDACTED]");
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Redacts credential-bearing query parameters from an endpoint URL so
/// the URL can be logged as-is.
pub fn redact_endpoint(url: &str) -> String {
    let patterns = [
        "api_key=",
        "apikey=",
        "api-key=",
        "key=",
        "token=",
        "secret=",
    ];

    let mut result = url.to_string();
    for pattern in patterns {
        if let Some(idx) = result.find(pattern) {
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c == '&' || c == '#' || c.is_whitespace())
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result = format!("{}[REDACTED]{}", &result[..value_start], &result[end..]);
        }
    }

    result
}
