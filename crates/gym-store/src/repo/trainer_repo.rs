//! Trainer repository

use crate::errors::{from_rusqlite, Result};
use crate::repo::cascade::{self, CascadeReport, Table};
use gym_core::rules::{lookup_name, optional_text, required_text};
use gym_core::{log_op_end, log_op_error, log_op_start, Trainer};
use rusqlite::{Connection, OptionalExtension, Row};
use std::time::Instant;

const OP_CREATE: &str = "trainer_create";
const OP_DELETE: &str = "trainer_delete";
const OP_READ: &str = "trainer_read";

const COLUMNS: &str = "id, name, specialty";

/// SQLite repository for trainers
pub struct TrainerRepo;

impl TrainerRepo {
    /// Create a trainer
    ///
    /// `name` is trimmed and must be non-empty; a blank `specialty` is stored
    /// as NULL.
    ///
    /// # Errors
    /// * `Validation` - If the name is blank
    /// * `StorageConstraint` - If a trainer with exactly this name exists
    pub fn create(conn: &mut Connection, name: &str, specialty: Option<&str>) -> Result<Trainer> {
        log_op_start!(OP_CREATE);
        let start = Instant::now();

        let trainer = Self::create_impl(conn, name, specialty).map_err(|e| {
            log_op_error!(
                OP_CREATE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

        log_op_end!(
            OP_CREATE,
            duration_ms = start.elapsed().as_millis() as u64,
            trainer_id = trainer.id
        );

        Ok(trainer)
    }

    fn create_impl(conn: &mut Connection, name: &str, specialty: Option<&str>) -> Result<Trainer> {
        let name = required_text("name", name)?;
        let specialty = optional_text(specialty);

        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_CREATE, e))?;
        tx.execute(
            "INSERT INTO trainers (name, specialty) VALUES (?1, ?2)",
            rusqlite::params![name, specialty],
        )
        .map_err(|e| from_rusqlite(OP_CREATE, e))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| from_rusqlite(OP_CREATE, e))?;

        Ok(Trainer {
            id,
            name,
            specialty,
        })
    }

    /// All trainers in ascending id order
    pub fn get_all(conn: &Connection) -> Result<Vec<Trainer>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM trainers ORDER BY id"))
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        let trainers = stmt
            .query_map([], trainer_from_row)
            .map_err(|e| from_rusqlite(OP_READ, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        Ok(trainers)
    }

    /// Look up a trainer by id; `None` when absent
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Trainer>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM trainers WHERE id = ?1"),
            [id],
            trainer_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Case-insensitive exact match on the trimmed name
    ///
    /// Blank input matches nothing.
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Trainer>> {
        let Some(name) = lookup_name(name) else {
            return Ok(None);
        };
        conn.query_row(
            &format!(
                "SELECT {COLUMNS} FROM trainers WHERE fold_case(name) = fold_case(?1) ORDER BY id LIMIT 1"
            ),
            [name],
            trainer_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Delete a trainer together with its workouts and their schedules
    ///
    /// Returns `false` when no trainer has this id. The cascade is atomic.
    pub fn delete(conn: &mut Connection, id: i64) -> Result<bool> {
        log_op_start!(OP_DELETE, trainer_id = id);
        let start = Instant::now();

        let report = Self::delete_impl(conn, id).map_err(|e| {
            log_op_error!(
                OP_DELETE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                trainer_id = id
            );
            e
        })?;

        log_op_end!(
            OP_DELETE,
            duration_ms = start.elapsed().as_millis() as u64,
            trainer_id = id,
            deleted = report.is_some(),
            workouts = report.map(|r| r.workouts).unwrap_or(0),
            schedules = report.map(|r| r.schedules).unwrap_or(0)
        );

        Ok(report.is_some())
    }

    fn delete_impl(conn: &mut Connection, id: i64) -> Result<Option<CascadeReport>> {
        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        if !cascade::exists(&tx, Table::Trainers, id)? {
            return Ok(None);
        }
        let report = cascade::remove_trainer(&tx, id)?;
        tx.commit().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        Ok(Some(report))
    }
}

fn trainer_from_row(row: &Row<'_>) -> rusqlite::Result<Trainer> {
    Ok(Trainer {
        id: row.get(0)?,
        name: row.get(1)?,
        specialty: row.get(2)?,
    })
}
