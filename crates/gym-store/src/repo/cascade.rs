//! Explicit cascading deletes
//!
//! Dependents are enumerated and removed in dependency order (schedules,
//! then workouts, then the owning row) inside the caller's transaction. The
//! schema declares plain foreign keys, so a missed dependent makes the final
//! delete fail and the whole transaction rolls back.

use crate::errors::{from_rusqlite, Result};
use rusqlite::{OptionalExtension, Transaction};

const OP: &str = "cascade_delete";

/// Tables that can be the root of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Trainers,
    Workouts,
    Members,
    Schedules,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Trainers => "trainers",
            Table::Workouts => "workouts",
            Table::Members => "members",
            Table::Schedules => "schedules",
        }
    }
}

/// Counts of dependent rows removed alongside the requested one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub workouts: usize,
    pub schedules: usize,
}

impl std::ops::AddAssign for CascadeReport {
    fn add_assign(&mut self, other: Self) {
        self.workouts += other.workouts;
        self.schedules += other.schedules;
    }
}

/// Check whether a row with `id` exists in `table`
pub fn exists(tx: &Transaction, table: Table, id: i64) -> Result<bool> {
    let sql = format!("SELECT 1 FROM {} WHERE id = ?1", table.as_str());
    let found = tx
        .query_row(&sql, [id], |_| Ok(()))
        .optional()
        .map_err(|e| from_rusqlite(OP, e))?;
    Ok(found.is_some())
}

fn delete_row(tx: &Transaction, table: Table, id: i64) -> Result<()> {
    let sql = format!("DELETE FROM {} WHERE id = ?1", table.as_str());
    tx.execute(&sql, [id]).map_err(|e| from_rusqlite(OP, e))?;
    Ok(())
}

/// Remove a workout and every schedule booked on it
pub fn remove_workout(tx: &Transaction, workout_id: i64) -> Result<CascadeReport> {
    let schedules = tx
        .execute("DELETE FROM schedules WHERE workout_id = ?1", [workout_id])
        .map_err(|e| from_rusqlite(OP, e))?;
    delete_row(tx, Table::Workouts, workout_id)?;

    tracing::debug!(workout_id, schedules, "workout removed");
    Ok(CascadeReport {
        workouts: 0,
        schedules,
    })
}

/// Remove a trainer, its workouts, and their schedules
pub fn remove_trainer(tx: &Transaction, trainer_id: i64) -> Result<CascadeReport> {
    let workout_ids: Vec<i64> = {
        let mut stmt = tx
            .prepare("SELECT id FROM workouts WHERE trainer_id = ?1 ORDER BY id")
            .map_err(|e| from_rusqlite(OP, e))?;
        let ids = stmt
            .query_map([trainer_id], |row| row.get(0))
            .map_err(|e| from_rusqlite(OP, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(OP, e))?;
        ids
    };

    let mut report = CascadeReport::default();
    for workout_id in workout_ids {
        report += remove_workout(tx, workout_id)?;
        report.workouts += 1;
    }
    delete_row(tx, Table::Trainers, trainer_id)?;

    tracing::debug!(
        trainer_id,
        workouts = report.workouts,
        schedules = report.schedules,
        "trainer removed"
    );
    Ok(report)
}

/// Remove a member and every schedule it holds
pub fn remove_member(tx: &Transaction, member_id: i64) -> Result<CascadeReport> {
    let schedules = tx
        .execute("DELETE FROM schedules WHERE member_id = ?1", [member_id])
        .map_err(|e| from_rusqlite(OP, e))?;
    delete_row(tx, Table::Members, member_id)?;

    tracing::debug!(member_id, schedules, "member removed");
    Ok(CascadeReport {
        workouts: 0,
        schedules,
    })
}

/// Remove a single schedule; nothing depends on it
pub fn remove_schedule(tx: &Transaction, schedule_id: i64) -> Result<CascadeReport> {
    delete_row(tx, Table::Schedules, schedule_id)?;
    Ok(CascadeReport::default())
}
