use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, VmError};
use crate::translation::{LogicalAddress, Translation};
use crate::vm_manager::Statistics;

/// Parse one decimal logical address per line.
///
/// Lines are decoded one at a time, so a line that is not UTF-8 only spoils
/// itself. Blank lines are skipped. Each remaining line yields either an
/// address or an `InvalidAddress` error carrying its 1-based line number.
pub fn parse_addresses<C: AsRef<[u8]>>(content: C) -> Vec<Result<LogicalAddress>> {
    content
        .as_ref()
        .split(|&b| b == b'\n')
        .enumerate()
        .filter(|(_, raw)| !raw.trim_ascii().is_empty())
        .map(|(idx, raw)| parse_line(idx + 1, raw.trim_ascii()))
        .collect()
}

fn parse_line(line: usize, raw: &[u8]) -> Result<LogicalAddress> {
    let invalid = |reason: String| VmError::InvalidAddress {
        line,
        text: String::from_utf8_lossy(raw).into_owned(),
        reason,
    };

    let text = std::str::from_utf8(raw)
        .map_err(|e| invalid(format!("not valid UTF-8 ({})", e)))?;
    let value: i64 = text
        .parse()
        .map_err(|e| invalid(format!("not a decimal integer ({})", e)))?;
    LogicalAddress::try_from(value).map_err(invalid)
}

/// Read and parse the address input file
pub fn read_addresses<P: AsRef<Path>>(path: P) -> Result<Vec<Result<LogicalAddress>>> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| VmError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_addresses(content))
}

/// Write one line per translation followed by the run summary
pub fn write_report<W: Write>(
    mut out: W,
    translations: &[Translation],
    stats: &Statistics,
) -> Result<()> {
    for t in translations {
        writeln!(out, "{}", t)?;
    }
    writeln!(out, "{}", stats)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addresses() {
        let parsed = parse_addresses("16916\n62493\n30198\n");
        let raws: Vec<u16> = parsed.into_iter().map(|r| r.unwrap().raw).collect();
        assert_eq!(raws, vec![16916, 62493, 30198]);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let parsed = parse_addresses("  1 \r\n\n\t\n256\n");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].as_ref().unwrap().raw, 1);
        assert_eq!(parsed[1].as_ref().unwrap().raw, 256);
    }

    #[test]
    fn test_parse_reports_bad_lines() {
        let parsed = parse_addresses("12\nabc\n-4\n65536\n65535\n");
        assert_eq!(parsed.len(), 5);
        assert!(parsed[0].is_ok());
        assert!(parsed[4].is_ok());

        for (idx, expected_line) in [(1, 2), (2, 3), (3, 4)] {
            match &parsed[idx] {
                Err(VmError::InvalidAddress { line, .. }) => assert_eq!(*line, expected_line),
                other => panic!("expected invalid address, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_undecodable_line_only_spoils_itself() {
        let parsed = parse_addresses(b"1\n\xff\xfe\n257\n");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].as_ref().unwrap().raw, 1);
        assert_eq!(parsed[2].as_ref().unwrap().raw, 257);

        let err = parsed[1].as_ref().unwrap_err();
        assert!(matches!(err, VmError::InvalidAddress { line: 2, .. }));
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_read_addresses_with_undecodable_line() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"1\n\xff\xfe\n257\n").unwrap();

        let parsed = read_addresses(file.path()).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(parsed[0].is_ok());
        assert!(parsed[1].is_err());
        assert!(parsed[2].is_ok());
    }

    #[test]
    fn test_out_of_range_is_not_masked() {
        // 65536 would mask to 0; it must be rejected instead
        let parsed = parse_addresses("65536");
        assert!(parsed[0].is_err());
    }

    #[test]
    fn test_read_addresses_missing_file() {
        let err = read_addresses("/no/such/addresses.txt").unwrap_err();
        assert!(matches!(err, VmError::FileOpen { .. }));
        assert!(err.to_string().contains("addresses.txt"));
    }

    #[test]
    fn test_write_report() {
        let t = Translation {
            logical: LogicalAddress::from_raw(1),
            frame: 0,
            physical: 1,
            value: 0,
            tlb_hit: false,
            page_fault: true,
        };
        let stats = Statistics {
            translated: 1,
            page_faults: 1,
            tlb_hits: 0,
            errors: 0,
        };

        let mut out = Vec::new();
        write_report(&mut out, &[t], &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "virtual address: 1, physical address: 1, value: 0");
        assert_eq!(lines[1], "Number of translated addresses: 1");
        assert_eq!(lines[3], "Page fault rate: 1.000");
        assert_eq!(lines[5], "TLB hit rate: 0.000");
    }
}
