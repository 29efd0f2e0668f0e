use std::io::{stdin, stdout, BufRead, Write};

use crate::{FolioError, Result, Tag};

// Helper method for parsing comma-separated lists
pub fn parse_list(items: Option<String>) -> Vec<String> {
    items
        .map(|t| {
            t.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Parses comma-separated skill tags, rejecting unknown names.
pub fn parse_tags(tags: Option<String>) -> Result<Vec<Tag>> {
    parse_list(tags).iter().map(|t| t.parse()).collect()
}

/// Cuts `text` to at most `max_len` characters, adding an ellipsis when cut.
pub fn get_content_preview(text: &str, max_len: usize) -> String {
    let first_line = text
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}

/// Asks a yes/no question on stdin; anything but y/yes means no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N]: ", prompt);
    stdout().flush().map_err(FolioError::Io)?;

    let mut input = String::new();
    stdin().lock().read_line(&mut input).map_err(FolioError::Io)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}
