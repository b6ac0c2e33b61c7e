/// Screenshot utilities for capturing terminal output
///
/// This module provides functionality to save terminal screenshots
/// as text files for debugging and documentation purposes.

use std::fs::File;
use std::io::{self, Write};
use ratatui::{buffer::Buffer, layout::Rect};

/// Save a terminal screenshot from a buffer to a text file
///
/// Captures a ratatui Buffer and saves it to a file with the given filename.
/// Called from inside the draw closure so the frame matches what is on screen.
///
/// # Arguments
///
/// * `buffer` - The ratatui Buffer to save
/// * `area` - The area of the buffer to save
/// * `filename` - The filename to save the screenshot to
///
/// # Returns
///
/// Returns `Ok(())` if successful, or an IO error if the file could not be written.
pub fn save_buffer_screenshot(
    buffer: &Buffer,
    area: Rect,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;

    // Write each line
    for y in 0..area.height {
        for x in 0..area.width {
            let cell = &buffer[(x, y)];
            write!(file, "{}", cell.symbol())?;
        }
        writeln!(file)?;
    }

    Ok(())
}
