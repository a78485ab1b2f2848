/// Cuts `input` down to `max_chars` characters, the last of which becomes `…`.
pub fn truncate_with_ellipsis(input: &str, max_chars: usize) -> String {
    let Some(keep) = max_chars.checked_sub(1) else {
        return String::new();
    };
    if input.char_indices().nth(max_chars).is_none() {
        return input.to_string();
    }

    let end = input
        .char_indices()
        .nth(keep)
        .map_or(input.len(), |(index, _)| index);
    format!("{}…", &input[..end])
}
