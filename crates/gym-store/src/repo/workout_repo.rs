//! Workout repository

use crate::errors::{from_rusqlite, Result};
use crate::repo::cascade::{self, CascadeReport, Table};
use gym_core::rules::{lookup_name, optional_text, required_text};
use gym_core::{log_op_end, log_op_error, log_op_start, Trainer, Workout};
use rusqlite::{Connection, OptionalExtension, Row};
use std::time::Instant;

const OP_CREATE: &str = "workout_create";
const OP_DELETE: &str = "workout_delete";
const OP_READ: &str = "workout_read";

const COLUMNS: &str = "id, name, description, trainer_id";

/// SQLite repository for workouts
pub struct WorkoutRepo;

impl WorkoutRepo {
    /// Create a workout owned by an already resolved trainer
    ///
    /// # Errors
    /// * `Validation` - If the name is blank
    /// * `StorageConstraint` - If the trainer no longer exists
    pub fn create(
        conn: &mut Connection,
        trainer: &Trainer,
        name: &str,
        description: Option<&str>,
    ) -> Result<Workout> {
        log_op_start!(OP_CREATE, trainer_id = trainer.id);
        let start = Instant::now();

        let workout = Self::create_impl(conn, trainer, name, description).map_err(|e| {
            log_op_error!(
                OP_CREATE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                trainer_id = trainer.id
            );
            e
        })?;

        log_op_end!(
            OP_CREATE,
            duration_ms = start.elapsed().as_millis() as u64,
            workout_id = workout.id,
            trainer_id = trainer.id
        );

        Ok(workout)
    }

    fn create_impl(
        conn: &mut Connection,
        trainer: &Trainer,
        name: &str,
        description: Option<&str>,
    ) -> Result<Workout> {
        let name = required_text("name", name)?;
        let description = optional_text(description);

        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_CREATE, e))?;
        tx.execute(
            "INSERT INTO workouts (name, description, trainer_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, description, trainer.id],
        )
        .map_err(|e| from_rusqlite(OP_CREATE, e))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| from_rusqlite(OP_CREATE, e))?;

        Ok(Workout {
            id,
            name,
            description,
            trainer_id: trainer.id,
        })
    }

    /// All workouts in ascending id order
    pub fn get_all(conn: &Connection) -> Result<Vec<Workout>> {
        query_workouts(
            conn,
            &format!("SELECT {COLUMNS} FROM workouts ORDER BY id"),
            rusqlite::params![],
        )
    }

    /// Workouts owned by one trainer, ascending id
    pub fn list_for_trainer(conn: &Connection, trainer_id: i64) -> Result<Vec<Workout>> {
        query_workouts(
            conn,
            &format!("SELECT {COLUMNS} FROM workouts WHERE trainer_id = ?1 ORDER BY id"),
            [trainer_id],
        )
    }

    /// Look up a workout by id; `None` when absent
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Workout>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM workouts WHERE id = ?1"),
            [id],
            workout_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Case-insensitive exact match on the trimmed name, within one trainer
    pub fn find_by_name(
        conn: &Connection,
        trainer: &Trainer,
        name: &str,
    ) -> Result<Option<Workout>> {
        let Some(name) = lookup_name(name) else {
            return Ok(None);
        };
        conn.query_row(
            &format!(
                "SELECT {COLUMNS} FROM workouts
                 WHERE fold_case(name) = fold_case(?1) AND trainer_id = ?2
                 ORDER BY id LIMIT 1"
            ),
            rusqlite::params![name, trainer.id],
            workout_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Case-insensitive match across every trainer; the lowest id wins
    pub fn find_by_name_any_trainer(conn: &Connection, name: &str) -> Result<Option<Workout>> {
        let Some(name) = lookup_name(name) else {
            return Ok(None);
        };
        conn.query_row(
            &format!(
                "SELECT {COLUMNS} FROM workouts WHERE fold_case(name) = fold_case(?1) ORDER BY id LIMIT 1"
            ),
            [name],
            workout_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Delete a workout and every schedule booked on it
    ///
    /// Returns `false` when no workout has this id.
    pub fn delete(conn: &mut Connection, id: i64) -> Result<bool> {
        log_op_start!(OP_DELETE, workout_id = id);
        let start = Instant::now();

        let report = Self::delete_impl(conn, id).map_err(|e| {
            log_op_error!(
                OP_DELETE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                workout_id = id
            );
            e
        })?;

        log_op_end!(
            OP_DELETE,
            duration_ms = start.elapsed().as_millis() as u64,
            workout_id = id,
            deleted = report.is_some(),
            schedules = report.map(|r| r.schedules).unwrap_or(0)
        );

        Ok(report.is_some())
    }

    fn delete_impl(conn: &mut Connection, id: i64) -> Result<Option<CascadeReport>> {
        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        if !cascade::exists(&tx, Table::Workouts, id)? {
            return Ok(None);
        }
        let report = cascade::remove_workout(&tx, id)?;
        tx.commit().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        Ok(Some(report))
    }
}

fn query_workouts<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<Workout>> {
    let mut stmt = conn.prepare(sql).map_err(|e| from_rusqlite(OP_READ, e))?;
    let workouts = stmt
        .query_map(params, workout_from_row)
        .map_err(|e| from_rusqlite(OP_READ, e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite(OP_READ, e))?;
    Ok(workouts)
}

fn workout_from_row(row: &Row<'_>) -> rusqlite::Result<Workout> {
    Ok(Workout {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        trainer_id: row.get(3)?,
    })
}
