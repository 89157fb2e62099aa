use passforge::pass::CharacterClass;
use passforge::rand;

use super::session::{MAX_LENGTH, MIN_LENGTH, NoticeKind, Session};
use crate::terminal::{
    BOLD, DIM, GREEN, RED, RESET, YELLOW, box_bottom, box_line, box_line_center, box_opt, box_top,
    clear, flush, line, strength_bar, strength_color,
};

const KEY_HELP: [(&str, &str); 6] = [
    ("Enter / r", "Generate a new password"),
    ("c / Ctrl+C", "Copy to clipboard"),
    ("Left / Right", "Shorter / longer"),
    ("1 2 3 4", "Toggle uppercase, lowercase, digits, symbols"),
    ("s", "Save these options as defaults"),
    ("Esc / q", "Quit"),
];

pub fn draw(session: &Session) {
    clear();

    box_top("passforge");
    line_blank();
    match &session.password {
        Some(password) => box_line_center(&format!("{BOLD}{}{RESET}", password.as_str())),
        None => box_line_center(&format!("{DIM}(no password){RESET}")),
    }
    line_blank();
    box_bottom();

    match session.score {
        Some(score) => {
            let level = score.level();
            strength_bar(
                score.value(),
                &format!("{} {}", level.label(), score),
                strength_color(level),
            );
        }
        None => strength_bar(0, "", RESET),
    }

    box_top("Options");
    box_line(&format!(
        "Length: {:>2}  {DIM}[{}-{}]{RESET}",
        session.settings.length, MIN_LENGTH, MAX_LENGTH
    ));
    let classes = session.settings.classes();
    for (n, class) in CharacterClass::ALL.iter().enumerate() {
        let mark = if classes.contains(*class) { "x" } else { " " };
        box_line(&format!("{}) [{mark}] {}", n + 1, class.label()));
    }
    box_line(&format!(
        "{DIM}Source: {}{RESET}",
        rand::source_name(session.settings.source)
    ));
    box_bottom();

    box_top("Keys");
    for (key, desc) in KEY_HELP {
        box_opt(key, desc);
    }
    box_bottom();

    if let Some(notice) = &session.notice {
        let color = match notice.kind {
            NoticeKind::Success => GREEN,
            NoticeKind::Warning => YELLOW,
            NoticeKind::Error => RED,
        };
        line(&format!("{color}{}{RESET}", notice.text));
    }
    flush();
}

fn line_blank() {
    box_line("");
}
