use std::{
    fs::{self, File},
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Opens `path` for writing, or stdout when `path` is `-`.
    pub fn from_output_path(path: &Path) -> anyhow::Result<Self> {
        if path.as_os_str() == "-" {
            Ok(Output::stdout())
        } else {
            Output::open(path.to_path_buf())
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

/// Read sample values from a text file
///
/// # Arguments
///
/// * `path` - Path to a file with comma-separated or newline-separated numbers
///
/// # Errors
///
/// Returns error if the file cannot be read or contains a token that is not a number
pub fn read_sample_file<P>(path: P) -> anyhow::Result<Vec<f64>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;
    parse_sample_text(&content)
        .with_context(|| format!("Failed to parse data file: {}", path.display()))
}

/// Parse sample values from text
///
/// If the text contains a comma, values are separated by commas; otherwise
/// each line holds one value. Tokens are trimmed and empty tokens are skipped.
pub fn parse_sample_text(content: &str) -> anyhow::Result<Vec<f64>> {
    let tokens: Box<dyn Iterator<Item = &str>> = if content.contains(',') {
        Box::new(content.split(','))
    } else {
        Box::new(content.lines())
    };

    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<f64>()
                .with_context(|| format!("Invalid number '{token}' at position {}", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let values = parse_sample_text("1.5, 2,3 ,\n4.25,").unwrap();
        assert_eq!(values, vec![1.5, 2.0, 3.0, 4.25]);
    }

    #[test]
    fn test_parse_newline_separated() {
        let values = parse_sample_text("10\n  -2.5\r\n\n3e2\n").unwrap();
        assert_eq!(values, vec![10.0, -2.5, 300.0]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_sample_text("  \n\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_invalid_token() {
        let err = parse_sample_text("1\n2\nabc\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number 'abc' at position 3");
    }

    #[test]
    fn test_read_sample_file() {
        let path = std::env::temp_dir().join(format!("varistat-util-{}.txt", std::process::id()));
        fs::write(&path, "3,1,2").unwrap();
        let values = read_sample_file(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(values.unwrap(), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_sample_file("/nonexistent/varistat/data.txt").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read data file"));
    }
}
