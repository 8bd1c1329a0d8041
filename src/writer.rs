/*!
 * Plain-text writer for the merged output
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Fixed header written at the top of every output file
pub const BANNER: &str = "Project Code Summary\n====================\n\n";

/// Rule framing each file path header
pub const SEPARATOR: &str = "==============================";

/// Writes the banner and one block per merged file
pub struct TextWriter<W: Write> {
    inner: W,
}

impl TextWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextWriter<W> {
    /// Wrap an arbitrary sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the fixed banner
    pub fn write_banner(&mut self) -> io::Result<()> {
        self.inner.write_all(BANNER.as_bytes())
    }

    /// Append one file block: framed path header, raw content, newline
    pub fn write_block(&mut self, rel_path: &str, content: &str) -> io::Result<()> {
        write!(
            self.inner,
            "\n{sep}\nFile Path: {rel_path}\n{sep}\n",
            sep = SEPARATOR
        )?;
        self.inner.write_all(content.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    /// Flush and hand back the sink
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_is_thirty_equals() {
        assert_eq!(SEPARATOR.len(), 30);
        assert!(SEPARATOR.chars().all(|c| c == '='));
    }

    #[test]
    fn test_block_layout() {
        let mut writer = TextWriter::new(Vec::new());
        writer.write_banner().unwrap();
        writer.write_block("src/a.py", "print(1)").unwrap();
        let bytes = writer.finish().unwrap();

        let expected = format!(
            "Project Code Summary\n====================\n\n\n{0}\nFile Path: src/a.py\n{0}\nprint(1)\n",
            "=".repeat(30)
        );
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn test_empty_content_keeps_delimiters() {
        let mut writer = TextWriter::new(Vec::new());
        writer.write_block("empty.txt", "").unwrap();
        let text = String::from_utf8(writer.finish().unwrap()).unwrap();
        assert_eq!(text, format!("\n{0}\nFile Path: empty.txt\n{0}\n\n", SEPARATOR));
    }
}
