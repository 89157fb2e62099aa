//! Terminal output utilities.
//!
//! Box drawing, the strength meter, ANSI helpers. Every line ends in `\r\n`
//! so the same helpers render correctly in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passforge::pass::Strength;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const VIOLET: &str = "\x1b[38;5;141m";

/// Meter colour for a strength level.
pub fn strength_color(level: Strength) -> &'static str {
    match level {
        Strength::VeryWeak => RED,
        Strength::Weak => YELLOW,
        Strength::Good => VIOLET,
        Strength::VeryStrong => GREEN,
    }
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

/// Print one line, safe in raw mode.
pub fn line(content: &str) {
    print!("\r{content}\r\n");
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }
}

/// │ content                                        │
pub fn box_line(content: &str) {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    line(&format!("│ {}{} │", content, " ".repeat(padding)));
}

/// │          content          │
pub fn box_line_center(content: &str) {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    line(&format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

pub fn box_bottom() {
    line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
}

/// Key or flag column followed by a wrapped description.
pub fn box_opt(key: &str, desc: &str) {
    let key_col = 18;
    let desc_col = INNER_WIDTH - key_col;

    let key_padded = format!("{:<width$}", key, width = key_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let mut lines = lines.into_iter();
    box_line(&format!("{}{}", key_padded, lines.next().unwrap_or_default()));
    let indent = " ".repeat(key_col);
    for rest in lines {
        box_line(&format!("{indent}{rest}"));
    }
}

/// Display width ignoring ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Render the score as a 3-line bar filled to `score` percent, with the
/// label centred inside.
pub fn strength_bar(score: u8, label: &str, color: &str) {
    let inner_width = BOX_WIDTH - 2;
    let filled = filled_cells(score, inner_width);

    let text: Vec<char> = label.chars().collect();
    let padding = inner_width.saturating_sub(text.len()) / 2;
    let mut content: Vec<char> = vec![' '; inner_width];
    for (i, ch) in text.iter().enumerate() {
        if padding + i < inner_width {
            content[padding + i] = *ch;
        }
    }

    let filled_str: String = content[..filled].iter().collect();
    let unfilled_str: String = content[filled..].iter().collect();

    let mut top = String::new();
    let mut middle = String::new();
    let mut bottom = String::new();

    if filled > 0 {
        top.push_str(&format!("{color}▗{}{RESET}", "▄".repeat(filled)));
        middle.push_str(&format!("{color}▐\x1b[7m{filled_str}{RESET}"));
        bottom.push_str(&format!("{color}▝{}{RESET}", "▀".repeat(filled)));
    } else {
        top.push('┌');
        middle.push('│');
        bottom.push('└');
    }

    if filled < inner_width {
        top.push_str(&format!("{}┐", "─".repeat(inner_width - filled)));
        middle.push_str(&format!("{unfilled_str}│"));
        bottom.push_str(&format!("{}┘", "─".repeat(inner_width - filled)));
    } else {
        top.push_str(&format!("{color}▖{RESET}"));
        middle.push_str(&format!("{color}▌{RESET}"));
        bottom.push_str(&format!("{color}▘{RESET}"));
    }

    line(&top);
    line(&middle);
    line(&bottom);
    flush();
}

fn filled_cells(score: u8, width: usize) -> usize {
    (usize::from(score.min(100)) * width) / 100
}

// ============================================================================
// Entropy
// ============================================================================

/// Describe an entropy estimate in bits.
pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_skips_escape_codes() {
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("plain"), 5);
    }

    #[test]
    fn bar_fill_scales_with_score() {
        assert_eq!(filled_cells(0, 72), 0);
        assert_eq!(filled_cells(50, 72), 36);
        assert_eq!(filled_cells(100, 72), 72);
        assert_eq!(filled_cells(255, 72), 72);
    }

    #[test]
    fn entropy_bands() {
        assert_eq!(entropy_strength(20.0), "Weak");
        assert_eq!(entropy_strength(52.4), "Fair");
        assert_eq!(entropy_strength(103.3), "Strong");
        assert_eq!(entropy_strength(300.0), "Very Strong");
    }
}
