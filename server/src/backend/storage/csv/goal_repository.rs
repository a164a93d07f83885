//! # CSV Goal Repository
//!
//! File-based goal storage. All goals live in a single `goals.csv` inside
//! the data directory.
//!
//! ## CSV Format
//!
//! ```csv
//! id,name,target_date,target_amount,icon,created_at,updated_at
//! goal::5f0c...,New bike,2026-06-01,250.0,🚲,2026-01-20T10:00:00+00:00,2026-01-20T10:00:00+00:00
//! goal::9a1e...,Holiday,2026-08-15,1200.0,,2026-01-21T09:00:00+00:00,2026-02-02T18:30:00+00:00
//! ```
//!
//! An empty `icon` column means the goal has no icon.
//!
//! ## Features
//!
//! - One row per goal; updates replace the row in place
//! - Atomic file writes with temp files
//! - Writers are serialised so concurrent updates cannot drop each other
//! - Malformed rows are hidden from readers with a warning, and written
//!   back unchanged so a partly damaged file never loses data on save

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::connection::CsvConnection;
use crate::backend::domain::models::goal::DomainGoal;
use crate::backend::storage::GoalStorage;

const GOALS_FILE_NAME: &str = "goals.csv";
const GOAL_COLUMNS: [&str; 7] = [
    "id",
    "name",
    "target_date",
    "target_amount",
    "icon",
    "created_at",
    "updated_at",
];

/// CSV record structure for goals
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRecord {
    id: String,
    name: String,
    target_date: NaiveDate,
    target_amount: f64,
    icon: Option<String>,
    created_at: String,
    updated_at: String,
}

impl From<DomainGoal> for GoalRecord {
    fn from(goal: DomainGoal) -> Self {
        GoalRecord {
            id: goal.id,
            name: goal.name,
            target_date: goal.target_date,
            target_amount: goal.target_amount,
            icon: goal.icon,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl From<GoalRecord> for DomainGoal {
    fn from(record: GoalRecord) -> Self {
        DomainGoal {
            id: record.id,
            name: record.name,
            target_date: record.target_date,
            target_amount: record.target_amount,
            icon: record.icon.filter(|icon| !icon.is_empty()),
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// A row of the goals file
enum StoredRow {
    Goal(DomainGoal),
    /// Row that does not parse as a goal, kept byte for byte
    Unparsed(ByteRecord),
}

/// CSV-based goal repository
#[derive(Clone)]
pub struct GoalRepository {
    connection: CsvConnection,
    write_lock: Arc<Mutex<()>>,
}

impl GoalRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self {
            connection,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn goals_file_path(&self) -> PathBuf {
        self.connection.file_path(GOALS_FILE_NAME)
    }

    /// Read every row of the CSV file. A missing file means no goals yet.
    fn read_rows(&self) -> Result<Vec<StoredRow>> {
        let goals_file_path = self.goals_file_path();
        if !goals_file_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&goals_file_path)
            .with_context(|| format!("Failed to open {}", goals_file_path.display()))?;
        let mut csv_reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));
        let headers = csv_reader.byte_headers()?.clone();

        let mut rows = Vec::new();
        for (row, result) in csv_reader.byte_records().enumerate() {
            let record = result
                .with_context(|| format!("Failed to read {}", goals_file_path.display()))?;
            match record.deserialize::<GoalRecord>(Some(&headers)) {
                Ok(goal) => rows.push(StoredRow::Goal(DomainGoal::from(goal))),
                Err(e) => {
                    warn!("Failed to parse goal record at row {}: {}. Keeping it as is.", row + 1, e);
                    rows.push(StoredRow::Unparsed(record));
                }
            }
        }

        Ok(rows)
    }

    /// All goals that parse
    fn read_goals(&self) -> Result<Vec<DomainGoal>> {
        Ok(self
            .read_rows()?
            .into_iter()
            .filter_map(|row| match row {
                StoredRow::Goal(goal) => Some(goal),
                StoredRow::Unparsed(_) => None,
            })
            .collect())
    }

    /// Write all rows to the CSV file
    fn write_rows(&self, rows: &[StoredRow]) -> Result<()> {
        let goals_file_path = self.goals_file_path();
        let temp_file_path = goals_file_path.with_extension("csv.tmp");

        // Write to temporary file first (atomic operation)
        {
            let temp_file = File::create(&temp_file_path)
                .with_context(|| format!("Failed to create {}", temp_file_path.display()))?;
            let mut csv_writer = WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(BufWriter::new(temp_file));

            csv_writer.write_record(GOAL_COLUMNS)?;
            for row in rows {
                match row {
                    StoredRow::Goal(goal) => csv_writer.serialize(GoalRecord::from(goal.clone()))?,
                    StoredRow::Unparsed(record) => csv_writer.write_byte_record(record)?,
                }
            }

            csv_writer.flush()?;
        }

        // Atomically replace the original file
        fs::rename(&temp_file_path, &goals_file_path)
            .with_context(|| format!("Failed to replace {}", goals_file_path.display()))?;

        debug!("Successfully wrote {} rows to {:?}", rows.len(), goals_file_path);
        Ok(())
    }
}

#[async_trait]
impl GoalStorage for GoalRepository {
    async fn list_goals(&self) -> Result<Vec<DomainGoal>> {
        self.read_goals()
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Option<DomainGoal>> {
        let goals = self.read_goals()?;
        Ok(goals.into_iter().find(|goal| goal.id == goal_id))
    }

    async fn store_goal(&self, goal: &DomainGoal) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut rows = self.read_rows()?;
        let existing = rows.iter_mut().find_map(|row| match row {
            StoredRow::Goal(existing) if existing.id == goal.id => Some(existing),
            _ => None,
        });
        match existing {
            Some(existing) => {
                *existing = goal.clone();
                debug!("Replacing stored goal: {}", goal.id);
            }
            None => {
                info!("Storing new goal in CSV: {}", goal.id);
                rows.push(StoredRow::Goal(goal.clone()));
            }
        }

        self.write_rows(&rows)
    }
}
