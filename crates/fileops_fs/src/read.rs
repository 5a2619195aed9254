use std::io::Read;
use std::path::Path;

use anyhow::Result;

use crate::TextEncoding;

impl crate::FileOps {
    pub fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        let mut file = Self::open_read_binary(path.as_ref())?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|error| crate::Error::io(path, error))?;
        Ok(contents)
    }

    /// Reads the whole file and decodes it, UTF-8 unless `encoding` says
    /// otherwise.
    pub fn read_to_string<T: AsRef<Path>>(
        path: T,
        encoding: Option<TextEncoding>,
    ) -> Result<String> {
        let bytes = Self::read(path.as_ref())?;
        let text = encoding
            .unwrap_or_default()
            .decode(path.as_ref(), &bytes)?;
        Ok(text.into_owned())
    }

    /// Reads the file as a list of lines, each keeping its terminator.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn read_lines<T: AsRef<Path>>(
        path: T,
        encoding: Option<TextEncoding>,
    ) -> Result<Vec<String>> {
        let text = Self::read_to_string(path, encoding)?;
        Ok(split_lines(&text).map(str::to_string).collect())
    }
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let end = match rest.find(['\n', '\r']) {
            Some(i) if rest[i..].starts_with("\r\n") => i + 2,
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        rest = tail;
        Some(line)
    })
}
