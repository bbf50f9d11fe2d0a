use super::error::{StoreError, StoreResult};
use chrono::{Days, Local, NaiveDate};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Filesystem store for daily standup records
///
/// One file per calendar day under `<data_dir>/<YYYY>/<MM>/<DD>.json`,
/// pretty-printed UTF-8 JSON. Writes are whole-file overwrites with no
/// locking; concurrent writers to the same date race and the last one wins.
pub struct StandupStore {
    data_dir: PathBuf,
}

/// Where a save landed
#[derive(Debug, Clone)]
pub struct SavedRecord {
    pub year: String,
    pub month: String,
    pub day: String,
    pub file_path: PathBuf,
}

impl SavedRecord {
    /// The resolved date as `YYYY-MM-DD`
    pub fn date(&self) -> String {
        format!("{}-{}-{}", self.year, self.month, self.day)
    }
}

impl StandupStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Save a record under today's date, overwriting any existing one
    pub fn save_today(&self, record: &Value) -> StoreResult<SavedRecord> {
        self.save_on(Local::now().date_naive(), record)
    }

    /// Load yesterday's record; an empty array when none was saved
    pub fn previous_day(&self) -> StoreResult<Value> {
        let yesterday = Local::now().date_naive() - Days::new(1);
        let (year, month, day) = date_parts(yesterday);
        self.day(&year, &month, &day)
    }

    /// Load the record for a specific date
    ///
    /// The path is built verbatim from the given components: lookups must use
    /// the same zero-padded month/day the save used or they will miss and
    /// return the empty result.
    pub fn day(&self, year: &str, month: &str, day: &str) -> StoreResult<Value> {
        let path = self
            .data_dir
            .join(year)
            .join(month)
            .join(format!("{day}.json"));

        if !path.exists() {
            return Ok(json!([]));
        }

        let contents = fs::read_to_string(&path)?;
        serde_json::from_str(&contents).map_err(|source| StoreError::CorruptRecord { path, source })
    }

    fn save_on(&self, date: NaiveDate, record: &Value) -> StoreResult<SavedRecord> {
        let (year, month, day) = date_parts(date);

        let dir = self.data_dir.join(&year).join(&month);
        fs::create_dir_all(&dir)?;

        let file_path = dir.join(format!("{day}.json"));
        fs::write(&file_path, serde_json::to_string_pretty(record)?)?;

        info!("Standup record saved to {}", file_path.display());

        Ok(SavedRecord {
            year,
            month,
            day,
            file_path,
        })
    }
}

fn date_parts(date: NaiveDate) -> (String, String, String) {
    (
        date.format("%Y").to_string(),
        date.format("%m").to_string(),
        date.format("%d").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_date_parts_zero_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            date_parts(date),
            ("2024".to_string(), "03".to_string(), "05".to_string())
        );
    }

    #[test]
    fn test_save_on_writes_under_year_month_day() {
        let temp_dir = TempDir::new().unwrap();
        let store = StandupStore::new(temp_dir.path());

        let record = json!({"mood": "good", "tasks": ["A", "B"]});
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let saved = store.save_on(date, &record).unwrap();

        assert_eq!(
            saved.file_path,
            temp_dir.path().join("2024").join("03").join("05.json")
        );
        assert_eq!(saved.date(), "2024-03-05");
        assert_eq!(store.day("2024", "03", "05").unwrap(), record);
    }
}
