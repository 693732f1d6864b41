//! Interactive menu loop over injected input/output streams.
//!
//! The loop is generic over `BufRead`/`Write` so tests can drive a
//! whole session with in-memory buffers instead of a real console.

use std::io::{BufRead, Write};

use crate::Result;
use crate::catalog::Catalog;
use crate::content::Content;

/// Farewell printed when the user picks the exit option.
const FAREWELL: &str = "Thank you for using the digital library. Goodbye!";

/// Runs the catalog menu until the user exits or input ends.
///
/// Non-numeric and out-of-range selections are reported and the menu
/// is shown again; bad input never terminates the loop. End of input
/// does.
///
/// # Errors
/// - `MedleyError::Io` - reading a selection or writing a response failed
pub fn run_menu<R, W>(catalog: &Catalog, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(
            output,
            "\n=== MENU ===\n\
             1. View catalog\n\
             2. Play an item from the catalog\n\
             3. Exit\n\
             Select an option: "
        )?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            tracing::debug!("input closed, leaving menu");
            return Ok(());
        };

        match line.trim().parse::<i32>() {
            Ok(1) => view_catalog(catalog, output)?,
            Ok(2) => play_selection(catalog, input, output)?,
            Ok(3) => {
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }
            Ok(other) => {
                tracing::warn!("menu option out of range: {other}");
                writeln!(output, "Invalid option. Try again.")?;
            }
            Err(_) => {
                tracing::warn!("non-numeric menu input: {:?}", line.trim());
                writeln!(output, "Invalid option. Try again.")?;
            }
        }
    }
}

fn view_catalog<W: Write>(catalog: &Catalog, output: &mut W) -> Result<()> {
    writeln!(output, "\n--- Catalog ---")?;
    list_entries(catalog, output)
}

fn play_selection<R, W>(catalog: &Catalog, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "\n--- Select a number from the catalog ---")?;
    list_entries(catalog, output)?;
    write!(output, "Your choice: ")?;
    output.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };

    match line.trim().parse::<usize>().ok() {
        Some(position) => match catalog.play(position) {
            Ok(block) => {
                writeln!(output)?;
                writeln!(output, "{block}")?;
            }
            Err(err) => {
                tracing::warn!("rejected selection: {err}");
                writeln!(output, "Invalid selection.")?;
            }
        },
        None => {
            writeln!(output, "Invalid selection.")?;
        }
    }

    Ok(())
}

fn list_entries<W: Write>(catalog: &Catalog, output: &mut W) -> Result<()> {
    for (index, entry) in catalog.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, entry.describe())?;
    }
    Ok(())
}

/// Reads one line, returning `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(input: &str) -> String {
        let catalog = Catalog::demo();
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(&catalog, &mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_prints_farewell() {
        let transcript = run_session("3\n");
        assert!(transcript.contains("=== MENU ==="));
        assert!(transcript.contains(FAREWELL));
    }

    #[test]
    fn test_view_catalog_lists_all_entries() {
        let transcript = run_session("1\n3\n");
        assert!(transcript.contains("--- Catalog ---"));
        assert!(transcript.contains("1. Movie: Interstellar (169 minutes)"));
        assert!(transcript.contains("4. Song: The House of the Rising Sun (5 minutes)"));
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let transcript = run_session("catalog\n3\n");
        assert!(transcript.contains("Invalid option. Try again."));
        assert!(transcript.contains(FAREWELL));
        assert_eq!(transcript.matches("=== MENU ===").count(), 2);
    }

    #[test]
    fn test_play_valid_selection() {
        let transcript = run_session("2\n1\n3\n");
        assert!(transcript.contains("Your choice: "));
        assert!(transcript.contains("[PLAYING MOVIE]"));
        assert!(transcript.contains("[END OF PLAYBACK]"));
    }

    #[test]
    fn test_play_out_of_range_selection() {
        let transcript = run_session("2\n9\n3\n");
        assert!(transcript.contains("Invalid selection."));
        assert!(!transcript.contains("[PLAYING"));
        assert!(transcript.contains(FAREWELL));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let transcript = run_session("");
        assert!(transcript.contains("=== MENU ==="));
        assert!(!transcript.contains(FAREWELL));
    }
}
