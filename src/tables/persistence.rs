use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::NutrientEntry;
use crate::tables::NutrientTable;

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn read_entries(path: &Path) -> Result<Vec<NutrientEntry>> {
    if is_csv(path) {
        let mut rdr = csv::Reader::from_path(path)?;
        let mut entries = Vec::new();
        for row in rdr.deserialize() {
            entries.push(row?);
        }
        Ok(entries)
    } else {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Load a nutrient table from a JSON array or a CSV file (`name,amount,unit`).
///
/// Invalid rows are skipped; duplicate names keep the last occurrence.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<NutrientTable> {
    let path = path.as_ref();
    let raw = read_entries(path)?;

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(raw.len());
    for entry in raw {
        if !entry.is_valid() {
            tracing::warn!(name = %entry.name, amount = entry.amount, "skipping invalid table row");
            continue;
        }
        if !seen.insert(entry.name.clone()) {
            tracing::warn!(name = %entry.name, "duplicate table row, last occurrence wins");
        }
        entries.push(entry);
    }

    let table = NutrientTable::new(entries);
    tracing::info!(path = %path.display(), entries = table.len(), "loaded nutrient table");
    Ok(table)
}

/// Write a nutrient table in the format implied by the file extension.
pub fn save_table<P: AsRef<Path>>(path: P, table: &NutrientTable) -> Result<()> {
    let path = path.as_ref();
    if is_csv(path) {
        let mut wtr = csv::Writer::from_path(path)?;
        for entry in table.entries() {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
    } else {
        let json = serde_json::to_string_pretty(table.entries())?;
        fs::write(path, json)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Paneer", "amount": 18, "unit": "per 100g"},
            {"name": "Egg", "amount": 6, "unit": "per 1 piece"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].name, "Paneer");

        let out = Builder::new().suffix(".csv").tempfile().unwrap();
        save_table(out.path(), &table).unwrap();

        let reloaded = load_table(out.path()).unwrap();
        assert_eq!(reloaded.entries(), table.entries());
    }

    #[test]
    fn test_csv_with_quoted_names() {
        let csv = "name,amount,unit\n\"Fish, Rohu\",19,per 100g\nEgg,6,per 1 piece\n";
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.get("Fish, Rohu").unwrap().amount, 19.0);
        assert_eq!(table.get("Egg").unwrap().unit, "per 1 piece");
    }

    #[test]
    fn test_invalid_rows_and_duplicates() {
        let json = r#"[
            {"name": "Milk", "amount": 3.4, "unit": "per 100g"},
            {"name": "Bad", "amount": -2, "unit": "per 100g"},
            {"name": "Milk", "amount": 3.6, "unit": "per 100ml"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let table = load_table(file.path()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Milk").unwrap().amount, 3.6);
        assert!(!table.contains("Bad"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_table("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, crate::error::CalcError::Io(_)));
    }
}
