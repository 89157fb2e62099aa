//! Plain-text password output.

use std::io::{self, Write};

use zeroize::Zeroize;

use passforge::pass::{Password, score};

/// Write one password per line, optionally followed by a tab and its score.
pub fn write_passwords<W: Write>(out: &mut W, passwords: &[Password], with_strength: bool) -> io::Result<()> {
    let mut line = String::new();
    for password in passwords {
        line.clear();
        line.push_str(password.as_str());
        if with_strength {
            let s = score(password.as_str());
            line.push_str(&format!("\t{} {}", s, s.level()));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    line.zeroize();
    out.flush()
}

/// A reader closing the pipe early (`| head`) is a normal end of output.
pub fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Newline-joined passwords for the clipboard.
pub fn joined(passwords: &[Password]) -> String {
    passwords
        .iter()
        .map(Password::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use passforge::pass::{ClassSet, GenerationRequest, Generator};
    use passforge::rand::SeededSource;

    fn sample(count: usize) -> Vec<Password> {
        Generator::new(SeededSource::new(3))
            .generate_batch(&GenerationRequest::new(12, ClassSet::all()), count)
            .unwrap()
    }

    #[test]
    fn one_line_per_password() {
        let passwords = sample(3);
        let mut out = Vec::new();
        write_passwords(&mut out, &passwords, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, password) in lines.iter().zip(&passwords) {
            assert_eq!(*line, password.as_str());
        }
    }

    #[test]
    fn strength_column_is_tab_separated() {
        let passwords = sample(1);
        let mut out = Vec::new();
        write_passwords(&mut out, &passwords, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let (pw, rest) = text.trim_end().split_once('\t').unwrap();
        assert_eq!(pw, passwords[0].as_str());
        assert!(rest.contains("/100"));
    }

    #[test]
    fn joined_has_no_trailing_newline() {
        let passwords = sample(2);
        let text = joined(&passwords);
        assert_eq!(text.lines().count(), 2);
        assert!(!text.ends_with('\n'));
    }

    /// Accepts the first line, then behaves like a closed pipe.
    struct ClosedAfterFirst {
        writes: usize,
    }

    impl Write for ClosedAfterFirst {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            if self.writes > 1 {
                return Err(io::ErrorKind::BrokenPipe.into());
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_pipe_ends_output_quietly() {
        let passwords = sample(3);
        let mut out = ClosedAfterFirst { writes: 0 };
        let result = write_passwords(&mut out, &passwords, false);
        assert_eq!(result.as_ref().unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert!(ignore_broken_pipe(result).is_ok());
    }

    #[test]
    fn other_write_errors_still_fail() {
        let err: io::Result<()> = Err(io::ErrorKind::PermissionDenied.into());
        assert!(ignore_broken_pipe(err).is_err());
    }
}
