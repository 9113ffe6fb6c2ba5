//! Single-line operator prompt
//!
//! Reads one response from any buffered reader, so the session can be driven
//! from stdin or from an in-memory buffer.

use std::io::{self, BufRead, Write};

/// Write the prompt text and flush so it is visible before blocking
pub fn show_prompt<W: Write>(out: &mut W, prompt: &str) -> io::Result<()> {
    write!(out, "{prompt}")?;
    out.flush()
}

/// Read exactly one line from `input`, without its terminator
///
/// A line ends at `\n`, `\r\n` or a bare `\r`. Nothing past the terminator is
/// consumed, except a `\n` already buffered right after a `\r`.
///
/// Returns `None` when the input closes before a terminator arrives, even if
/// a partial line was read. A read failure is logged and treated the same way.
pub fn read_response<R: BufRead>(input: &mut R) -> Option<String> {
    let mut line = Vec::new();
    loop {
        let available = match input.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read response, continuing without one");
                return None;
            }
        };

        if available.is_empty() {
            tracing::debug!(
                partial_bytes = line.len(),
                "standard input closed without a response"
            );
            return None;
        }

        match available.iter().position(|b| matches!(b, b'\r' | b'\n')) {
            Some(pos) => {
                line.extend_from_slice(&available[..pos]);
                let crlf = available[pos] == b'\r' && available.get(pos + 1) == Some(&b'\n');
                input.consume(if crlf { pos + 2 } else { pos + 1 });
                return Some(String::from_utf8_lossy(&line).into_owned());
            }
            None => {
                let len = available.len();
                line.extend_from_slice(available);
                input.consume(len);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailingReader;

    impl io::Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stdin unavailable"))
        }
    }

    fn remaining(input: &mut Cursor<&str>) -> String {
        let mut rest = String::new();
        io::Read::read_to_string(input, &mut rest).unwrap();
        rest
    }

    #[test]
    fn read_response_returns_first_line_only() {
        let mut input = Cursor::new("y\nn\n");
        assert_eq!(read_response(&mut input), Some("y".to_string()));
        assert_eq!(remaining(&mut input), "n\n");
    }

    #[test]
    fn read_response_crlf_terminator() {
        let mut input = Cursor::new("Y\r\nrest");
        assert_eq!(read_response(&mut input), Some("Y".to_string()));
        assert_eq!(remaining(&mut input), "rest");
    }

    #[test]
    fn read_response_bare_cr_terminator() {
        let mut input = Cursor::new("y\r");
        assert_eq!(read_response(&mut input), Some("y".to_string()));

        let mut input = Cursor::new("y\rignored\n");
        assert_eq!(read_response(&mut input), Some("y".to_string()));
        assert_eq!(remaining(&mut input), "ignored\n");
    }

    #[test]
    fn read_response_line_split_across_buffers() {
        let mut input = io::BufReader::with_capacity(2, Cursor::new("yes\n"));
        assert_eq!(read_response(&mut input), Some("yes".to_string()));
    }

    #[test]
    fn read_response_unterminated_line_is_none() {
        let mut input = Cursor::new("y");
        assert_eq!(read_response(&mut input), None);
    }

    #[test]
    fn read_response_empty_line_is_a_response() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_response(&mut input), Some(String::new()));
    }

    #[test]
    fn read_response_closed_input_is_none() {
        let mut input = Cursor::new("");
        assert_eq!(read_response(&mut input), None);
    }

    #[test]
    fn read_response_read_error_is_none() {
        let mut input = io::BufReader::new(FailingReader);
        assert_eq!(read_response(&mut input), None);
    }

    #[test]
    fn show_prompt_writes_text_verbatim() {
        let mut out = Vec::new();
        show_prompt(&mut out, "").unwrap();
        assert!(out.is_empty());

        show_prompt(&mut out, "> ").unwrap();
        assert_eq!(out, b"> ");
    }
}
