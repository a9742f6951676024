//! Schedule repository

use crate::errors::{from_rusqlite, Result};
use crate::repo::cascade::{self, Table};
use gym_core::rules::validate_day_of_week;
use gym_core::{
    log_op_end, log_op_error, log_op_start, Member, Schedule, ScheduleDetail, Workout,
};
use rusqlite::{Connection, OptionalExtension, Row};
use std::time::Instant;

const OP_CREATE: &str = "schedule_create";
const OP_DELETE: &str = "schedule_delete";
const OP_READ: &str = "schedule_read";

const COLUMNS: &str = "id, member_id, workout_id, day_of_week";

const DETAIL_SELECT: &str = "SELECT s.id, m.name, w.name, t.name, s.day_of_week
     FROM schedules s
     JOIN members m ON m.id = s.member_id
     JOIN workouts w ON w.id = s.workout_id
     JOIN trainers t ON t.id = w.trainer_id";

/// SQLite repository for schedules
pub struct ScheduleRepo;

impl ScheduleRepo {
    /// Book a resolved member onto a resolved workout
    ///
    /// # Errors
    /// * `Validation` - If the day is blank
    /// * `StorageConstraint` - If the member or workout no longer exists
    pub fn create(
        conn: &mut Connection,
        member: &Member,
        workout: &Workout,
        day_of_week: &str,
    ) -> Result<Schedule> {
        log_op_start!(OP_CREATE, member_id = member.id, workout_id = workout.id);
        let start = Instant::now();

        let schedule = Self::create_impl(conn, member, workout, day_of_week).map_err(|e| {
            log_op_error!(
                OP_CREATE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                member_id = member.id,
                workout_id = workout.id
            );
            e
        })?;

        log_op_end!(
            OP_CREATE,
            duration_ms = start.elapsed().as_millis() as u64,
            schedule_id = schedule.id
        );

        Ok(schedule)
    }

    fn create_impl(
        conn: &mut Connection,
        member: &Member,
        workout: &Workout,
        day_of_week: &str,
    ) -> Result<Schedule> {
        let day_of_week = validate_day_of_week(day_of_week)?;

        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_CREATE, e))?;
        tx.execute(
            "INSERT INTO schedules (member_id, workout_id, day_of_week) VALUES (?1, ?2, ?3)",
            rusqlite::params![member.id, workout.id, day_of_week],
        )
        .map_err(|e| from_rusqlite(OP_CREATE, e))?;
        let id = tx.last_insert_rowid();
        tx.commit().map_err(|e| from_rusqlite(OP_CREATE, e))?;

        Ok(Schedule {
            id,
            member_id: member.id,
            workout_id: workout.id,
            day_of_week,
        })
    }

    /// All schedules in ascending id order
    pub fn get_all(conn: &Connection) -> Result<Vec<Schedule>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {COLUMNS} FROM schedules ORDER BY id"))
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        let schedules = stmt
            .query_map([], schedule_from_row)
            .map_err(|e| from_rusqlite(OP_READ, e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite(OP_READ, e))?;
        Ok(schedules)
    }

    /// Look up a schedule by id; `None` when absent
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Schedule>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM schedules WHERE id = ?1"),
            [id],
            schedule_from_row,
        )
        .optional()
        .map_err(|e| from_rusqlite(OP_READ, e))
    }

    /// Every schedule with member, workout and trainer names
    pub fn list_details(conn: &Connection) -> Result<Vec<ScheduleDetail>> {
        query_details(
            conn,
            &format!("{DETAIL_SELECT} ORDER BY s.id"),
            rusqlite::params![],
        )
    }

    /// Schedules held by one member
    pub fn list_details_for_member(
        conn: &Connection,
        member_id: i64,
    ) -> Result<Vec<ScheduleDetail>> {
        query_details(
            conn,
            &format!("{DETAIL_SELECT} WHERE s.member_id = ?1 ORDER BY s.id"),
            [member_id],
        )
    }

    /// Schedules booked on one workout
    pub fn list_details_for_workout(
        conn: &Connection,
        workout_id: i64,
    ) -> Result<Vec<ScheduleDetail>> {
        query_details(
            conn,
            &format!("{DETAIL_SELECT} WHERE s.workout_id = ?1 ORDER BY s.id"),
            [workout_id],
        )
    }

    /// Delete one schedule; returns `false` when no schedule has this id
    pub fn delete(conn: &mut Connection, id: i64) -> Result<bool> {
        log_op_start!(OP_DELETE, schedule_id = id);
        let start = Instant::now();

        let deleted = Self::delete_impl(conn, id).map_err(|e| {
            log_op_error!(
                OP_DELETE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                schedule_id = id
            );
            e
        })?;

        log_op_end!(
            OP_DELETE,
            duration_ms = start.elapsed().as_millis() as u64,
            schedule_id = id,
            deleted = deleted
        );

        Ok(deleted)
    }

    fn delete_impl(conn: &mut Connection, id: i64) -> Result<bool> {
        let tx = conn.transaction().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        if !cascade::exists(&tx, Table::Schedules, id)? {
            return Ok(false);
        }
        cascade::remove_schedule(&tx, id)?;
        tx.commit().map_err(|e| from_rusqlite(OP_DELETE, e))?;
        Ok(true)
    }
}

fn query_details<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<ScheduleDetail>> {
    let mut stmt = conn.prepare(sql).map_err(|e| from_rusqlite(OP_READ, e))?;
    let details = stmt
        .query_map(params, |row| {
            Ok(ScheduleDetail {
                schedule_id: row.get(0)?,
                member_name: row.get(1)?,
                workout_name: row.get(2)?,
                trainer_name: row.get(3)?,
                day_of_week: row.get(4)?,
            })
        })
        .map_err(|e| from_rusqlite(OP_READ, e))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| from_rusqlite(OP_READ, e))?;
    Ok(details)
}

fn schedule_from_row(row: &Row<'_>) -> rusqlite::Result<Schedule> {
    Ok(Schedule {
        id: row.get(0)?,
        member_id: row.get(1)?,
        workout_id: row.get(2)?,
        day_of_week: row.get(3)?,
    })
}
