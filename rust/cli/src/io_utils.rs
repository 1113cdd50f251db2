//! Line-oriented input helpers.

use std::io::BufRead;

/// Reads one trimmed line. `None` on end of input or a read error.
///
/// # Example
///
/// ```rust
/// use showdown_cli::io_utils::read_stdin_line;
/// use std::io::Cursor;
///
/// let mut input = Cursor::new("  2 \n");
/// assert_eq!(read_stdin_line(&mut input), Some("2".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
