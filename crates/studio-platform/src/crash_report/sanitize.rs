use regex::Regex;

/// Patterns redacted from crash reports, most specific first.
const SECRET_PATTERNS: &[&str] = &[
    // Bearer tokens
    r"Bearer [a-zA-Z0-9._\-]+",
    // Credentials in query strings
    r"(?i)([?&](?:token|key|api_key|access_token|secret|signature)=)[^&\s]+",
    // ENV-style assignments: FAL_KEY=..., API_TOKEN=...
    r"(?i)(\b[A-Z0-9_]*(?:KEY|TOKEN|SECRET|PASSWORD)=)[^&\s]+",
];

/// Redacts known secret patterns from the input string.
///
/// Prefix capture groups are kept so the report still shows which
/// parameter was present.
pub fn sanitize_secrets(input: &str) -> String {
    let mut result = input.to_string();

    for pattern in SECRET_PATTERNS {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        let replacement = if re.captures_len() > 1 {
            "${1}[REDACTED]"
        } else {
            "[REDACTED]"
        };
        result = re.replace_all(&result, replacement).into_owned();
    }

    result
}
