use crate::error::PadError;
use std::fs;
use std::path::Path;

/// Ordered list of sample names every output row is aligned to.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceSamples {
    names: Vec<String>,
}

impl ReferenceSamples {
    /// read a single tab-separated line of sample names from `path`
    pub fn load(path: &Path) -> Result<Self, PadError> {
        let content = fs::read_to_string(path).map_err(|source| PadError::ReadSamples {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_line(&content).ok_or_else(|| PadError::EmptySampleList {
            path: path.to_path_buf(),
        })
    }

    /// Parse one line of names. `None` if nothing is left once the terminator is gone.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            return None;
        }
        let names = line.split('\t').map(|x| x.to_string()).collect::<Vec<String>>();
        Some(ReferenceSamples { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_line() {
        let samples = ReferenceSamples::from_line("A\tB\tC\n").unwrap();
        assert_eq!(samples.names(), &["A", "B", "C"]);
        let samples = ReferenceSamples::from_line("A\tB\r\n").unwrap();
        assert_eq!(samples.names(), &["A", "B"]);
        // duplicates and blanks are kept as given
        let samples = ReferenceSamples::from_line("A\t\tA").unwrap();
        assert_eq!(samples.names(), &["A", "", "A"]);
        assert!(ReferenceSamples::from_line("\n").is_none());
        assert!(ReferenceSamples::from_line("").is_none());
    }

    #[test]
    fn test_load() -> Result<(), Box<dyn std::error::Error>> {
        let samples = ReferenceSamples::load(Path::new("test/samples.txt"))?;
        assert_eq!(samples.names(), &["A", "B", "C"]);

        let mut file = tempfile::NamedTempFile::new()?;
        write!(file, "S1\tS2")?;
        let samples = ReferenceSamples::load(file.path())?;
        assert_eq!(samples.len(), 2);
        assert!(!samples.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_errors() -> Result<(), Box<dyn std::error::Error>> {
        match ReferenceSamples::load(Path::new("test/doesnotexist.txt")) {
            Err(PadError::ReadSamples { path, .. }) => {
                assert_eq!(path, Path::new("test/doesnotexist.txt"))
            }
            other => panic!("expected ReadSamples, got {other:?}"),
        }

        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file)?;
        assert!(matches!(
            ReferenceSamples::load(file.path()),
            Err(PadError::EmptySampleList { .. })
        ));
        Ok(())
    }
}
