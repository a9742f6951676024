//! Schedule actions

use super::warn;
use crate::console::{safe_int, Console};
use gym_store::{MemberRepo, ScheduleRepo, WorkoutRepo};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

pub const MENU: &str = "
--- Schedules Menu ---
1. Add Schedule
2. List Schedules
3. Delete Schedule
0. Back
";

pub fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say("\n-- Add Schedule --")?;
    let member_name = console.prompt("Member name: ")?;
    let member = match MemberRepo::find_by_name(conn, &member_name) {
        Ok(Some(member)) => member,
        Ok(None) => return console.say("⚠ Member not found."),
        Err(e) => return warn(console, "Could not look up member", &e),
    };

    super::workouts::list(console, conn)?;
    let Some(workout_id) = safe_int(&console.prompt("Workout ID: ")?) else {
        return console.say("⚠ Invalid workout ID.");
    };
    let workout = match WorkoutRepo::find_by_id(conn, workout_id) {
        Ok(Some(workout)) => workout,
        Ok(None) => return console.say("⚠ Workout not found."),
        Err(e) => return warn(console, "Could not look up workout", &e),
    };

    let day = console.prompt("Day of week (e.g. Monday): ")?;
    match ScheduleRepo::create(conn, &member, &workout, &day) {
        Ok(schedule) => console.say(format!(
            "✓ Scheduled {} for {} on {} (schedule {})",
            member.name, workout.name, schedule.day_of_week, schedule.id
        )),
        Err(e) => warn(console, "Could not create schedule", &e),
    }
}

pub fn list<R: BufRead, W: Write>(console: &mut Console<R, W>, conn: &Connection) -> io::Result<()> {
    console.say("\n-- Schedules --")?;
    let details = match ScheduleRepo::list_details(conn) {
        Ok(details) => details,
        Err(e) => return warn(console, "Could not list schedules", &e),
    };
    if details.is_empty() {
        return console.say("No schedules.");
    }
    for detail in &details {
        console.say(detail)?;
    }
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    list(console, conn)?;
    let Some(id) = safe_int(&console.prompt("Enter Schedule ID to delete: ")?) else {
        return console.say("⚠ Invalid ID.");
    };
    match ScheduleRepo::delete(conn, id) {
        Ok(true) => console.say("✓ Deleted."),
        Ok(false) => console.say("⚠ Schedule not found."),
        Err(e) => warn(console, "Could not delete schedule", &e),
    }
}
