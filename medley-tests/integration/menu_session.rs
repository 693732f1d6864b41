//! Full menu sessions over injected input/output.

use std::io::Cursor;

use medley_core::catalog::Catalog;
use medley_core::menu::run_menu;

/// Runs one complete menu session against the demo catalog and returns
/// the full output transcript.
fn run_session(input: &str) -> anyhow::Result<String> {
    let catalog = Catalog::demo();
    let mut reader = Cursor::new(input.as_bytes().to_vec());
    let mut output = Vec::new();

    run_menu(&catalog, &mut reader, &mut output)?;

    Ok(String::from_utf8(output)?)
}

#[test]
fn test_list_then_exit_session() -> anyhow::Result<()> {
    let transcript = run_session("1\n3\n")?;

    assert!(transcript.contains("--- Catalog ---"));
    assert!(transcript.contains("1. Movie: Interstellar (169 minutes)"));
    assert!(transcript.contains("2. Movie: Feast (7 minutes)"));
    assert!(transcript.contains("3. Song: Bohemian Rhapsody (6 minutes)"));
    assert!(transcript.contains("4. Song: The House of the Rising Sun (5 minutes)"));
    assert!(transcript.contains("Thank you for using the digital library. Goodbye!"));

    // Menu is rendered again after listing
    assert_eq!(transcript.matches("=== MENU ===").count(), 2);
    Ok(())
}

#[test]
fn test_play_movie_session() -> anyhow::Result<()> {
    let transcript = run_session("2\n1\n3\n")?;

    assert!(transcript.contains("--- Select a number from the catalog ---"));
    assert!(transcript.contains("[PLAYING MOVIE]"));
    assert!(transcript.contains("Title: Interstellar"));
    assert!(transcript.contains("Director: Christopher Nolan"));
    assert!(transcript.contains("Resolution: 2160p"));
    assert!(transcript.contains("Compression ratio: 0.6"));
    assert!(transcript.contains("Duration: 169 minutes"));
    assert!(transcript.contains("[END OF PLAYBACK]"));
    Ok(())
}

#[test]
fn test_play_song_session() -> anyhow::Result<()> {
    let transcript = run_session("2\n3\n3\n")?;

    assert!(transcript.contains("[PLAYING SONG]"));
    assert!(transcript.contains("Title: Bohemian Rhapsody"));
    assert!(transcript.contains("Bitrate: 320"));
    assert!(transcript.contains("License: Protected"));
    assert!(transcript.contains("Compression ratio: 0.36"));
    assert!(transcript.contains("[END OF PLAYBACK]"));
    Ok(())
}

#[test]
fn test_non_numeric_input_recovers() -> anyhow::Result<()> {
    let transcript = run_session("play\n2.5\n3\n")?;

    assert_eq!(transcript.matches("Invalid option. Try again.").count(), 2);
    assert_eq!(transcript.matches("=== MENU ===").count(), 3);
    assert!(transcript.contains("Thank you for using the digital library. Goodbye!"));
    Ok(())
}

#[test]
fn test_out_of_range_menu_option_recovers() -> anyhow::Result<()> {
    let transcript = run_session("7\n-1\n3\n")?;

    assert_eq!(transcript.matches("Invalid option. Try again.").count(), 2);
    assert!(transcript.contains("Thank you for using the digital library. Goodbye!"));
    Ok(())
}

#[test]
fn test_invalid_playback_selection_recovers() -> anyhow::Result<()> {
    let transcript = run_session("2\n0\n2\n9\n2\nnine\n3\n")?;

    assert_eq!(transcript.matches("Invalid selection.").count(), 3);
    assert!(!transcript.contains("[PLAYING"));
    assert!(transcript.contains("Thank you for using the digital library. Goodbye!"));
    Ok(())
}

#[test]
fn test_end_of_input_terminates_cleanly() -> anyhow::Result<()> {
    let transcript = run_session("1\n")?;

    assert!(transcript.contains("1. Movie: Interstellar (169 minutes)"));
    assert!(!transcript.contains("Thank you for using the digital library. Goodbye!"));
    Ok(())
}

#[test]
fn test_session_on_empty_catalog() -> anyhow::Result<()> {
    let catalog = Catalog::new();
    let mut reader = Cursor::new(b"1\n2\n1\n3\n".to_vec());
    let mut output = Vec::new();

    run_menu(&catalog, &mut reader, &mut output)?;
    let transcript = String::from_utf8(output)?;

    assert!(transcript.contains("--- Catalog ---"));
    assert!(transcript.contains("Invalid selection."));
    assert!(transcript.contains("Thank you for using the digital library. Goodbye!"));
    Ok(())
}
