use std::path::Path;
use std::sync::{Arc, OnceLock};

use yomi_core::{DefaultNormalizer, Normalizer};

use crate::error::LoadError;
use crate::registry::{ConjugationRegistry, ConjugationTable};
use crate::verb::{FormName, VerbEnding, VerbForm};

const EMBEDDED_TABLE: &str = include_str!("../data/conjugations.csv");

/// Header cells that mark the regular B column
const REGULAR_B_MARKERS: [&str; 2] = ["regularb", "ichidan"];

/// Leading label columns: form name, plain flag, positive flag
const LABEL_COLUMNS: usize = 3;

/// What a data column of the header stands for
#[derive(Debug, Clone, PartialEq, Eq)]
enum Column {
    RegularA(VerbEnding),
    RegularB,
    Irregular(String),
}

/// Reads conjugation tables from delimited text.
///
/// The header row names each data column after its third as a regular A
/// ending, the regular B marker, or an irregular lexeme. Every data row
/// starts with `form name, plain, positive` followed by one value per header
/// column. Fields are unquoted: a cell may not contain `"` nor the
/// delimiter. Any malformed row fails the whole load.
pub struct TableLoader {
    delimiter: char,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(',')
    }
}

impl TableLoader {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Tab separated for `.tsv` files, comma separated otherwise
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => Self::new('\t'),
            _ => Self::default(),
        }
    }

    /// Load the table shipped with the crate
    pub fn load_embedded() -> Result<ConjugationRegistry, LoadError> {
        tracing::info!("Loading embedded conjugation table...");
        let registry = Self::default().parse(EMBEDDED_TABLE)?;
        tracing::info!("Loaded {} verb forms", registry.len());
        Ok(registry)
    }

    /// Process-wide registry built from the embedded table on first use
    pub fn shared() -> Result<Arc<ConjugationRegistry>, LoadError> {
        static SHARED: OnceLock<Result<Arc<ConjugationRegistry>, String>> = OnceLock::new();

        SHARED
            .get_or_init(|| {
                Self::load_embedded()
                    .map(Arc::new)
                    .map_err(|e| e.to_string())
            })
            .clone()
            .map_err(LoadError::InvalidFormat)
    }

    /// Load a table file into `registry`; later rows for a form win.
    /// Returns the number of rows loaded.
    pub fn load_file(
        &self,
        registry: &mut ConjugationRegistry,
        path: &Path,
    ) -> Result<usize, LoadError> {
        tracing::info!("Loading conjugation table from file: {}", path.display());
        let source = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        let rows = self.load_str(registry, &source)?;
        tracing::info!("Loaded {} verb forms from {}", rows, path.display());
        Ok(rows)
    }

    /// Parse `source` and merge it into `registry`. Nothing is merged if any
    /// row is malformed.
    pub fn load_str(
        &self,
        registry: &mut ConjugationRegistry,
        source: &str,
    ) -> Result<usize, LoadError> {
        let (parsed, rows) = self.parse_rows(source)?;
        registry.extend(parsed);
        Ok(rows)
    }

    /// Parse `source` into a fresh registry
    pub fn parse(&self, source: &str) -> Result<ConjugationRegistry, LoadError> {
        self.parse_rows(source).map(|(registry, _)| registry)
    }

    fn parse_rows(&self, source: &str) -> Result<(ConjugationRegistry, usize), LoadError> {
        let mut lines = source
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty() && !line.trim_start().starts_with('#'));

        let Some((header_line, header)) = lines.next() else {
            return Err(LoadError::InvalidFormat("missing header row".to_string()));
        };
        let columns = self.parse_header(header_line, header)?;

        let mut registry = ConjugationRegistry::new();
        let mut rows = 0;
        for (line, row) in lines {
            let (form, table) = self.parse_row(line, row, &columns)?;
            registry.insert(form, table);
            rows += 1;
        }

        Ok((registry, rows))
    }

    fn parse_header(&self, line: usize, header: &str) -> Result<Vec<Column>, LoadError> {
        let cells = self.cells(line, header)?;
        if cells.len() <= LABEL_COLUMNS {
            return Err(LoadError::InvalidFormat(format!(
                "header has {} columns, expected more than {}",
                cells.len(),
                LABEL_COLUMNS
            )));
        }

        let mut columns = Vec::with_capacity(cells.len() - LABEL_COLUMNS);
        for cell in &cells[LABEL_COLUMNS..] {
            let column = if cell.is_empty() {
                return Err(parse_error(line, "empty header column"));
            } else if let Ok(ending) = cell.parse::<VerbEnding>() {
                Column::RegularA(ending)
            } else if REGULAR_B_MARKERS.contains(&cell.to_ascii_lowercase().as_str()) {
                Column::RegularB
            } else if cell.chars().count() == 1 {
                // No verb's dictionary form is a single kana
                return Err(parse_error(
                    line,
                    format!("'{cell}' is not a verb ending"),
                ));
            } else {
                Column::Irregular(cell.clone())
            };

            if columns.contains(&column) {
                return Err(parse_error(line, format!("duplicate header column '{cell}'")));
            }
            columns.push(column);
        }

        Ok(columns)
    }

    fn parse_row(
        &self,
        line: usize,
        row: &str,
        columns: &[Column],
    ) -> Result<(VerbForm, ConjugationTable), LoadError> {
        let cells = self.cells(line, row)?;
        if cells.len() != columns.len() + LABEL_COLUMNS {
            return Err(parse_error(
                line,
                format!(
                    "expected {} columns, found {}",
                    columns.len() + LABEL_COLUMNS,
                    cells.len()
                ),
            ));
        }

        let form_name = cells[0]
            .parse::<FormName>()
            .map_err(|e| parse_error(line, e.to_string()))?;
        let plain = parse_flag(line, &cells[1])?;
        let positive = parse_flag(line, &cells[2])?;
        let form = VerbForm::new(plain, positive, form_name);

        let mut table = ConjugationTable::new();
        for (column, value) in columns.iter().zip(&cells[LABEL_COLUMNS..]) {
            // Blank cells leave the entry out; conjugating through it is a lookup miss
            if value.is_empty() {
                continue;
            }
            match column {
                Column::RegularA(ending) => table.set_regular_a(*ending, value.as_str()),
                Column::RegularB => table.set_regular_b(value.as_str()),
                Column::Irregular(lexeme) => table.set_irregular(lexeme.as_str(), value.as_str()),
            }
        }

        Ok((form, table))
    }

    fn cells(&self, line: usize, text: &str) -> Result<Vec<String>, LoadError> {
        if text.contains('"') {
            return Err(parse_error(line, "quoted fields are not supported"));
        }

        Ok(text
            .split(self.delimiter)
            .map(|cell| DefaultNormalizer.normalize(cell))
            .collect())
    }
}

fn parse_flag(line: usize, cell: &str) -> Result<bool, LoadError> {
    if cell.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if cell.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(parse_error(line, format!("expected TRUE or FALSE, found '{cell}'")))
    }
}

fn parse_error(line: usize, message: impl Into<String>) -> LoadError {
    LoadError::ParseError {
        line,
        message: message.into(),
    }
}
