use crate::error::PadError;

/// Number of fixed VCF columns, CHROM through FORMAT.
pub const FIXED_COLUMNS: usize = 9;

/// Genotype written for a reference sample the input does not carry.
pub const NO_CALL: &str = "0";

pub fn exit_on_broken_pipe<T>(result: Result<T, PadError>) -> Result<T, PadError> {
    // stdout closed early, by | head for example, is not an error.
    match result {
        Err(PadError::Io(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {
            std::process::exit(0)
        }
        other => other,
    }
}

/// Strip one trailing `\n` or `\r\n`.
pub fn chomp(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// The first nine fields joined by tabs. `line` is only used for error reporting.
pub fn fixed_columns(fields: &[&[u8]], line: usize) -> Result<Vec<u8>, PadError> {
    if fields.len() < FIXED_COLUMNS {
        return Err(PadError::TruncatedLine {
            line,
            fields: fields.len(),
        });
    }
    Ok(fields[..FIXED_COLUMNS].join(&b'\t'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(line: &[u8]) -> Vec<&[u8]> {
        line.split(|x| *x == b'\t').collect()
    }

    #[test]
    fn test_chomp() {
        assert_eq!(chomp(b"a\tb\n"), b"a\tb");
        assert_eq!(chomp(b"a\tb\r\n"), b"a\tb");
        assert_eq!(chomp(b"a\tb"), b"a\tb");
        // only one terminator goes
        assert_eq!(chomp(b"a\n\n"), b"a\n");
    }

    #[test]
    fn test_fixed_columns() -> Result<(), PadError> {
        let fields = split(b"1\t100\t.\tG\tA\t.\t.\t.\tGT\t0/1\t1/1");
        assert_eq!(fixed_columns(&fields, 3)?, b"1\t100\t.\tG\tA\t.\t.\t.\tGT");
        // exactly nine fields, no genotypes
        assert_eq!(fixed_columns(&fields[..9], 3)?, b"1\t100\t.\tG\tA\t.\t.\t.\tGT");
        Ok(())
    }

    #[test]
    fn test_fixed_columns_truncated() {
        let fields = split(b"1\t100\t.");
        match fixed_columns(&fields, 7) {
            Err(PadError::TruncatedLine { line, fields }) => {
                assert_eq!(line, 7);
                assert_eq!(fields, 3);
            }
            other => panic!("expected TruncatedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_exit_on_broken_pipe_passes_other_results() {
        assert_eq!(exit_on_broken_pipe(Ok(3)).unwrap(), 3);
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            exit_on_broken_pipe::<()>(Err(PadError::Io(err))),
            Err(PadError::Io(_))
        ));
    }
}
