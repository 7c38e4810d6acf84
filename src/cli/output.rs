//! Rendering closed syncmer records for the command line.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use closed_syncmers::{ClosedSyncmer, SyncmerParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Whitespace-aligned columns
    Text,
    /// Tab-separated with a header row
    Tsv,
    /// JSON document with parameters and records
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    params: &'a SyncmerParams,
    sequence_length: usize,
    num_kmers: usize,
    records: &'a [ClosedSyncmer],
}

/// Write `records` in the requested format.
///
/// With `debug`, text and TSV rows also carry the minimal s-mer position and
/// the k-mer itself.
pub fn write_records<W: Write>(
    out: &mut W,
    seq: &[u8],
    params: &SyncmerParams,
    records: &[ClosedSyncmer],
    format: OutputFormat,
    debug: bool,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, seq, params, records, debug),
        OutputFormat::Tsv => write_tsv(out, seq, params, records, debug),
        OutputFormat::Json => {
            let report = Report {
                params,
                sequence_length: seq.len(),
                num_kmers: params.num_kmers(seq.len()),
                records,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)
        }
    }
}

fn kmer_str<'a>(seq: &'a [u8], params: &SyncmerParams, record: &ClosedSyncmer) -> std::borrow::Cow<'a, str> {
    String::from_utf8_lossy(&seq[record.kmer_position..record.kmer_position + params.k()])
}

fn write_text<W: Write>(
    out: &mut W,
    seq: &[u8],
    params: &SyncmerParams,
    records: &[ClosedSyncmer],
    debug: bool,
) -> io::Result<()> {
    let pos_width = records
        .iter()
        .map(|r| r.smer_position.to_string().len())
        .max()
        .unwrap_or(1);
    let hash_width = records
        .iter()
        .map(|r| r.minimizer_hash.to_string().len())
        .max()
        .unwrap_or(1);

    for r in records {
        if debug {
            writeln!(
                out,
                "{:>pw$}  {:>hw$}  {:>pw$}  {}",
                r.kmer_position,
                r.minimizer_hash,
                r.smer_position,
                kmer_str(seq, params, r),
                pw = pos_width,
                hw = hash_width
            )?;
        } else {
            writeln!(
                out,
                "{:>pw$}  {:>hw$}",
                r.kmer_position,
                r.minimizer_hash,
                pw = pos_width,
                hw = hash_width
            )?;
        }
    }
    Ok(())
}

fn write_tsv<W: Write>(
    out: &mut W,
    seq: &[u8],
    params: &SyncmerParams,
    records: &[ClosedSyncmer],
    debug: bool,
) -> io::Result<()> {
    if debug {
        writeln!(out, "kmer_position\tsmer_position\tminimizer_hash\tkmer")?;
    } else {
        writeln!(out, "kmer_position\tsmer_position\tminimizer_hash")?;
    }
    for r in records {
        write!(out, "{}\t{}\t{}", r.kmer_position, r.smer_position, r.minimizer_hash)?;
        if debug {
            write!(out, "\t{}", kmer_str(seq, params, r))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use closed_syncmers::compute_closed_syncmers;

    fn render(format: OutputFormat, debug: bool) -> String {
        let seq = b"ACGTACGTAC";
        let params = SyncmerParams::new(4, 2).unwrap();
        let records = compute_closed_syncmers(seq, 4, 2).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, seq, &params, &records, format, debug).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_rows() {
        assert_eq!(render(OutputFormat::Text, false), "0  1\n2  1\n4  1\n6  1\n");
    }

    #[test]
    fn test_text_debug_rows() {
        let text = render(OutputFormat::Text, true);
        assert_eq!(text.lines().next(), Some("0  1  0  ACGT"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_tsv() {
        let tsv = render(OutputFormat::Tsv, false);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines[0], "kmer_position\tsmer_position\tminimizer_hash");
        assert_eq!(lines[1], "0\t0\t1");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_json() {
        let json: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json, false)).unwrap();
        assert_eq!(json["params"]["k"], 4);
        assert_eq!(json["sequence_length"], 10);
        assert_eq!(json["num_kmers"], 7);
        assert_eq!(json["records"].as_array().map(|a| a.len()), Some(4));
        assert_eq!(json["records"][1]["kmer_position"], 2);
    }

    #[test]
    fn test_empty_text() {
        let params = SyncmerParams::new(4, 2).unwrap();
        let mut buf = Vec::new();
        write_records(&mut buf, b"ACG", &params, &[], OutputFormat::Text, false).unwrap();
        assert!(buf.is_empty());
    }
}
