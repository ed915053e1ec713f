//! Writing solutions out.

use crate::error::{Error, Result};
use crate::reconstruct::Solution;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One solution per line as a list of words, e.g. `["fjord", "gucks", ...]`.
pub fn print_solutions<'a>(
    mut out: impl Write,
    solutions: impl IntoIterator<Item = &'a Solution>,
) -> io::Result<()> {
    for solution in solutions {
        writeln!(out, "{:?}", solution.words())?;
    }
    out.flush()
}

/// One CSV record of five words per solution.
pub fn write_rows<'a, W: Write>(
    out: W,
    solutions: impl IntoIterator<Item = &'a Solution>,
) -> Result<()> {
    let mut csv_out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    for solution in solutions {
        csv_out.write_record(solution.words())?;
    }
    csv_out.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn write_csv<'a>(
    path: impl AsRef<Path>,
    solutions: impl IntoIterator<Item = &'a Solution>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    write_rows(BufWriter::new(file), solutions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WordCatalog;
    use crate::pipeline::search;
    use crate::progress::Silent;
    use crate::shard::Shard;
    use itertools::Itertools;
    use std::collections::BTreeSet;

    fn solutions() -> BTreeSet<Solution> {
        let catalog = WordCatalog::from_lines(
            [
                "fjord", "gucks", "nymph", "vibex", "waltz", "fjord", "jumby", "pling", "treck",
                "vozhd", "waqfs",
            ],
            true,
        );
        search(&catalog, &Shard::default(), &Silent)
    }

    #[test]
    fn test_print_solutions() {
        let mut out = Vec::new();
        print_solutions(&mut out, &solutions()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[\"fjord\", \"gucks\", \"nymph\", \"vibex\", \"waltz\"]\n\
             [\"jumby\", \"pling\", \"treck\", \"vozhd\", \"waqfs\"]\n"
        );
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solutions.csv");
        write_csv(&path, &solutions()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "fjord,gucks,nymph,vibex,waltz\njumby,pling,treck,vozhd,waqfs\n"
        );
    }

    #[test]
    fn test_write_rows() {
        let mut out = Vec::new();
        write_rows(&mut out, &solutions()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(out.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().try_collect().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].len(), 5);
        assert_eq!(&records[1][4], "waqfs");
    }

    #[test]
    fn test_write_csv_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing/out.csv");
        let err = write_csv(path, &BTreeSet::new()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
