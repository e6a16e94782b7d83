// src/table.rs
use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use csv::{ReaderBuilder, Terminator, WriterBuilder};

use crate::{config::options::Delim, error::EnrichError};

/// A header row plus text cells. Every row is exactly as wide as `headers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Index of the column named exactly `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Reuse the column if it exists, otherwise append it with empty cells.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(ix) = self.column(name) {
            return ix;
        }
        self.headers.push(s!(name));
        for row in &mut self.rows {
            row.push(s!());
        }
        self.headers.len() - 1
    }

    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows[row][col].as_str()
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
    }

    /// Push a row, padding short ones with empty cells.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len().max(row.len()), s!());
        self.rows.push(row);
    }
}

/// Read a whole delimited file with a header row. Cells stay text, never coerced.
pub fn read_table(path: &Path, format: Delim) -> Result<Table, EnrichError> {
    let file = File::open(path).map_err(|e| EnrichError::io(path, e))?;
    let mut rdr = ReaderBuilder::new()
        .delimiter(format.byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut headers: Vec<String> = rdr
        .headers()
        .map_err(|e| EnrichError::csv(path, e))?
        .iter()
        .map(String::from)
        .collect();

    // Spreadsheet exports like to start with a BOM.
    if let Some(first) = headers.first_mut() {
        if let Some(stripped) = first.strip_prefix('\u{feff}') {
            *first = s!(stripped);
        }
    }

    let mut table = Table::new(headers);
    for rec in rdr.records() {
        let rec = rec.map_err(|e| EnrichError::csv(path, e))?;
        if rec.len() > table.headers.len() {
            return Err(EnrichError::RowTooLong {
                path: path.to_path_buf(),
                line: rec.position().map(|p| p.line()).unwrap_or_default(),
                found: rec.len(),
                expected: table.headers.len(),
            });
        }
        table.push_row(rec.iter().map(String::from).collect());
    }

    logd!("Read {} rows x {} cols from {}", table.len(), table.headers.len(), path.display());
    Ok(table)
}

/// Write the table, header first, LF line endings, quoting only when needed.
/// Creates missing parent directories. Rows go to a temp file next to `path` that
/// replaces it only once fully written, so a failed write leaves any old file intact.
pub fn write_table(path: &Path, table: &Table, format: Delim) -> Result<(), EnrichError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| EnrichError::io(dir, e))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".einforma-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| EnrichError::io(dir, e))?;

    {
        let mut wtr = WriterBuilder::new()
            .delimiter(format.byte())
            .terminator(Terminator::Any(b'\n'))
            .from_writer(BufWriter::new(tmp.as_file_mut()));

        wtr.write_record(&table.headers).map_err(|e| EnrichError::csv(path, e))?;
        for row in &table.rows {
            wtr.write_record(row).map_err(|e| EnrichError::csv(path, e))?;
        }

        let mut inner = wtr
            .into_inner()
            .map_err(|e| EnrichError::io(path, e.into_error()))?;
        inner.flush().map_err(|e| EnrichError::io(path, e))?;
    }

    // Dropping the temp file on any error above removes it.
    tmp.persist(path).map_err(|e| EnrichError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, text: &str) -> std::path::PathBuf {
        let p = dir.join(name);
        fs::write(&p, text).unwrap();
        p
    }

    #[test]
    fn keeps_cells_as_text() {
        let dir = tempdir().unwrap();
        let p = write(dir.path(), "in.csv", "NIF,Valor\n012345678,1.50\n");
        let t = read_table(&p, Delim::Csv).unwrap();
        assert_eq!(t.headers, vec!["NIF", "Valor"]);
        assert_eq!(t.cell(0, 0), "012345678");
        assert_eq!(t.cell(0, 1), "1.50");
    }

    #[test]
    fn strips_bom_and_pads_short_rows() {
        let dir = tempdir().unwrap();
        let p = write(dir.path(), "in.csv", "\u{feff}NIF,City,Zip\n1,Lisbon\n");
        let t = read_table(&p, Delim::Csv).unwrap();
        assert_eq!(t.column("NIF"), Some(0));
        assert_eq!(t.rows[0], vec!["1", "Lisbon", ""]);
    }

    #[test]
    fn long_row_is_rejected() {
        let dir = tempdir().unwrap();
        let p = write(dir.path(), "in.csv", "NIF\n1,extra\n");
        let err = read_table(&p, Delim::Csv).unwrap_err();
        assert!(matches!(err, EnrichError::RowTooLong { found: 2, expected: 1, .. }));
    }

    #[test]
    fn missing_file_is_io() {
        let dir = tempdir().unwrap();
        let err = read_table(&dir.path().join("nope.csv"), Delim::Csv).unwrap_err();
        assert!(matches!(err, EnrichError::Io { .. }));
    }

    #[test]
    fn ensure_column_appends_once() {
        let mut t = Table::new(vec![s!("NIF")]);
        t.push_row(vec![s!("1")]);
        assert_eq!(t.ensure_column("CAE"), 1);
        assert_eq!(t.ensure_column("CAE"), 1);
        assert_eq!(t.headers, vec!["NIF", "CAE"]);
        assert_eq!(t.rows[0], vec!["1", ""]);
    }

    #[test]
    fn writes_lf_and_quotes_when_needed() {
        let dir = tempdir().unwrap();
        let mut t = Table::new(vec![s!("NIF"), s!("Nome")]);
        t.push_row(vec![s!("1"), s!("Silva, Irmãos")]);
        let out = dir.path().join("sub").join("out.csv");
        write_table(&out, &t, Delim::Csv).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "NIF,Nome\n1,\"Silva, Irmãos\"\n");
    }

    #[test]
    fn failed_write_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        // A directory squats on the target name, so the final rename fails.
        let out = dir.path().join("out.csv");
        fs::create_dir(&out).unwrap();
        let mut t = Table::new(vec![s!("NIF")]);
        t.push_row(vec![s!("1")]);

        let err = write_table(&out, &t, Delim::Csv).unwrap_err();
        assert!(matches!(err, EnrichError::Io { .. }));

        let names: Vec<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["out.csv"]);
        assert!(out.is_dir());
    }

    #[test]
    fn rewrite_replaces_old_contents_whole() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out.csv");
        fs::write(&out, "old,old,old\n".repeat(50)).unwrap();
        let mut t = Table::new(vec![s!("NIF")]);
        t.push_row(vec![s!("1")]);

        write_table(&out, &t, Delim::Csv).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "NIF\n1\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn tsv_uses_tabs() {
        let dir = tempdir().unwrap();
        let p = write(dir.path(), "in.tsv", "NIF\tCity\n1\tPorto, Norte\n");
        let t = read_table(&p, Delim::Tsv).unwrap();
        assert_eq!(t.rows[0], vec!["1", "Porto, Norte"]);

        let out = dir.path().join("out.tsv");
        write_table(&out, &t, Delim::Tsv).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "NIF\tCity\n1\tPorto, Norte\n");
    }
}
