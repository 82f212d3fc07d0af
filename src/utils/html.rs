// src/utils/html.rs

/// Escape untrusted text for embedding in HTML.
///
/// Surrounding whitespace is trimmed first, then the five HTML-significant
/// characters are replaced with entities (both quote kinds included, so the
/// result is safe inside single- or double-quoted attributes). Everything else,
/// accented letters, CJK and emoji included, passes through untouched.
///
/// Note: this is entity escaping, not tag stripping. `<script>` survives as
/// visible text (`&lt;script&gt;`) rather than being removed.
pub fn sanitize(input: &str) -> String {
    let trimmed = input.trim();
    let mut output = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
    output
}

/// Applies [`sanitize`] element-wise, preserving order and length.
pub fn sanitize_all<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values.into_iter().map(|v| sanitize(v.as_ref())).collect()
}
