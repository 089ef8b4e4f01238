use anyhow::Result;
use std::fs::File;
use std::io::Write;

/// Line-oriented sink: a file when one is given, stdout otherwise.
///
/// File output separates lines with `\n` and leaves no newline after the
/// last one.
pub struct Writer {
    pub file: Option<File>,
    pub lines_written: usize,
}

impl Writer {
    pub fn stdout() -> Self {
        Self {
            file: None,
            lines_written: 0,
        }
    }

    pub fn from_file(file: File) -> Self {
        Self {
            file: Some(file),
            lines_written: 0,
        }
    }

    pub fn write(&mut self, content: &str) -> Result<()> {
        match &mut self.file {
            Some(f) => {
                if self.lines_written > 0 {
                    f.write_all(b"\n")?;
                }
                f.write_all(content.as_bytes())?;
            }
            None => println!("{}", content),
        }
        self.lines_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(f) = &mut self.file {
            f.flush()?;
            f.sync_all()?;
        }
        Ok(())
    }
}
