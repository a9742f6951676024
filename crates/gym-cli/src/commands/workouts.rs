//! Workout actions

use super::warn;
use crate::console::{safe_int, Console};
use gym_core::{Trainer, Workout};
use gym_store::{ScheduleRepo, TrainerRepo, WorkoutRepo};
use rusqlite::Connection;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};

pub const MENU: &str = "
--- Workouts Menu ---
1. Add Workout
2. List Workouts
3. Delete Workout
4. View Workout Members
0. Back
";

/// Listing line for one workout, with its trainer's name when known
pub fn line(workout: &Workout, trainer: Option<&Trainer>) -> String {
    let trainer_name = trainer.map(|t| t.name.as_str()).unwrap_or("N/A");
    format!(
        "{}. {} (Trainer: {}) - {}",
        workout.id,
        workout.name,
        trainer_name,
        workout.description.as_deref().unwrap_or("")
    )
}

/// Trainers keyed by id, for listing workouts with their trainer
pub fn trainers_by_id(conn: &Connection) -> gym_core::Result<HashMap<i64, Trainer>> {
    Ok(TrainerRepo::get_all(conn)?
        .into_iter()
        .map(|t| (t.id, t))
        .collect())
}

pub fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say("\n-- Add Workout --")?;
    let trainer_name = console.prompt("Trainer name: ")?;
    let trainer = match TrainerRepo::find_by_name(conn, &trainer_name) {
        Ok(Some(trainer)) => trainer,
        Ok(None) => return console.say("⚠ Trainer not found. Please add the trainer first."),
        Err(e) => return warn(console, "Could not look up trainer", &e),
    };

    let name = console.prompt("Workout name: ")?;
    if name.is_empty() {
        return console.say("⚠ Workout name required.");
    }
    let description = console.prompt("Description (optional): ")?;

    match WorkoutRepo::create(conn, &trainer, &name, Some(&description)) {
        Ok(workout) => console.say(format!("✓ Created {}", workout)),
        Err(e) => warn(console, "Could not create workout", &e),
    }
}

pub fn list<R: BufRead, W: Write>(console: &mut Console<R, W>, conn: &Connection) -> io::Result<()> {
    console.say("\n-- Workouts --")?;
    let listing = WorkoutRepo::get_all(conn).and_then(|w| Ok((w, trainers_by_id(conn)?)));
    let (workouts, trainers) = match listing {
        Ok(listing) => listing,
        Err(e) => return warn(console, "Could not list workouts", &e),
    };
    if workouts.is_empty() {
        return console.say("No workouts.");
    }
    for workout in &workouts {
        console.say(line(workout, trainers.get(&workout.trainer_id)))?;
    }
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    list(console, conn)?;
    let Some(id) = safe_int(&console.prompt("Enter Workout ID to delete: ")?) else {
        return console.say("⚠ Invalid ID.");
    };
    match WorkoutRepo::delete(conn, id) {
        Ok(true) => console.say("✓ Deleted."),
        Ok(false) => console.say("⚠ Workout not found."),
        Err(e) => warn(console, "Could not delete workout", &e),
    }
}

pub fn view_members<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &Connection,
) -> io::Result<()> {
    let name = console.prompt("Workout name to view members: ")?;
    let workout = match WorkoutRepo::find_by_name_any_trainer(conn, &name) {
        Ok(Some(workout)) => workout,
        Ok(None) => return console.say("⚠ Workout not found."),
        Err(e) => return warn(console, "Could not look up workout", &e),
    };

    console.say(format!("\nMembers in {}:", workout.name))?;
    let details = match ScheduleRepo::list_details_for_workout(conn, workout.id) {
        Ok(details) => details,
        Err(e) => return warn(console, "Could not list schedules", &e),
    };
    if details.is_empty() {
        return console.say("No members scheduled.");
    }
    for d in &details {
        console.say(format!(
            "{}. {} - Day: {}",
            d.schedule_id, d.member_name, d.day_of_week
        ))?;
    }
    Ok(())
}
