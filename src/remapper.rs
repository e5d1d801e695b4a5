use crate::error::PadError;
use crate::samples::ReferenceSamples;
use crate::utils::{self, FIXED_COLUMNS, NO_CALL};
use std::collections::HashMap;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `##` file-level metadata, passed through untouched
    Meta,
    /// `#CHROM ...` column header
    Header,
    /// everything else
    Record,
}

impl LineKind {
    pub fn of(line: &[u8]) -> Self {
        if line.starts_with(b"##") {
            LineKind::Meta
        } else if line.starts_with(b"#") {
            LineKind::Header
        } else {
            LineKind::Record
        }
    }
}

/// Line counts of one pass over a stream.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RemapSummary {
    pub meta: usize,
    pub headers: usize,
    pub records: usize,
}

pub struct ColumnRemapper {
    /// output genotype columns, in order
    reference: ReferenceSamples,
    /// for each reference sample, its genotype column in the input, if any
    layout: Vec<Option<usize>>,
    /// set once a header line has been seen
    header_seen: bool,
    /// 1-based number of the last line handled
    line_no: usize,
    summary: RemapSummary,
}

impl ColumnRemapper {
    pub fn new(reference: ReferenceSamples) -> Self {
        // until a header shows up there are no input samples to pick from
        let layout = vec![None; reference.len()];
        ColumnRemapper {
            reference,
            layout,
            header_seen: false,
            line_no: 0,
            summary: RemapSummary::default(),
        }
    }

    /// Rewrite one input line. Meta lines come back byte for byte, terminator
    /// included; header and record lines come back without one.
    pub fn remap_line(&mut self, raw: &[u8]) -> Result<Vec<u8>, PadError> {
        self.line_no += 1;
        match LineKind::of(raw) {
            LineKind::Meta => {
                self.summary.meta += 1;
                Ok(raw.to_vec())
            }
            LineKind::Header => {
                self.summary.headers += 1;
                self.remap_header(utils::chomp(raw))
            }
            LineKind::Record => {
                self.summary.records += 1;
                self.remap_record(utils::chomp(raw))
            }
        }
    }

    fn remap_header(&mut self, line: &[u8]) -> Result<Vec<u8>, PadError> {
        let line_split = line.split(|x| *x == b'\t').collect::<Vec<&[u8]>>();
        let mut out = utils::fixed_columns(&line_split, self.line_no)?;
        if self.header_seen {
            log::warn!(
                "line {}: another header line, genotype columns follow it from here on",
                self.line_no
            );
        }
        self.header_seen = true;

        // first occurrence wins for duplicated sample names
        let mut samples_vcf: HashMap<&[u8], usize> = HashMap::new();
        for (ind, name) in line_split[FIXED_COLUMNS..].iter().enumerate() {
            samples_vcf.entry(*name).or_insert(ind);
        }
        self.layout = self
            .reference
            .names()
            .iter()
            .map(|x| samples_vcf.get(x.as_bytes()).copied())
            .collect();

        let matched = self.layout.iter().filter(|x| x.is_some()).count();
        log::info!(
            "{} of {} reference samples found in the input ({} input samples), {} padded with {}",
            matched,
            self.reference.len(),
            line_split.len() - FIXED_COLUMNS,
            self.reference.len() - matched,
            NO_CALL
        );
        log::debug!("column layout: {:?}", self.layout);

        out.push(b'\t');
        out.extend_from_slice(self.reference.names().join("\t").as_bytes());
        Ok(out)
    }

    fn remap_record(&mut self, line: &[u8]) -> Result<Vec<u8>, PadError> {
        if !self.header_seen && self.summary.records == 1 {
            log::warn!(
                "line {}: record before the header line, all genotypes set to {}",
                self.line_no,
                NO_CALL
            );
        }
        let line_split = line.split(|x| *x == b'\t').collect::<Vec<&[u8]>>();
        let mut out = utils::fixed_columns(&line_split, self.line_no)?;
        let genotypes = &line_split[FIXED_COLUMNS..];
        for (name, slot) in self.reference.names().iter().zip(&self.layout) {
            let genotype = match slot {
                Some(pos) => genotypes.get(*pos).copied().ok_or_else(|| {
                    PadError::MissingGenotype {
                        line: self.line_no,
                        sample: name.clone(),
                    }
                })?,
                None => NO_CALL.as_bytes(),
            };
            out.push(b'\t');
            out.extend_from_slice(genotype);
        }
        Ok(out)
    }

    /// Remap every line of `reader` in order into `writer`.
    ///
    /// Header and record lines are closed by a `\n` only when another line
    /// follows them, so the output never ends with a terminator the last
    /// header or record line did not get. Meta lines keep their own.
    pub fn remap_stream<R, W>(
        &mut self,
        mut reader: R,
        writer: &mut W,
    ) -> Result<RemapSummary, PadError>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf: Vec<u8> = Vec::new();
        let mut open_line = false;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let kind = LineKind::of(&buf);
            let line = self.remap_line(&buf)?;
            if open_line {
                writer.write_all(b"\n")?;
            }
            writer.write_all(&line)?;
            open_line = kind != LineKind::Meta;
        }
        Ok(self.summary.clone())
    }
}
