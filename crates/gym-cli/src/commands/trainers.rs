//! Trainer actions

use super::warn;
use crate::console::{safe_int, Console};
use gym_core::Trainer;
use gym_store::{TrainerRepo, WorkoutRepo};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

pub const MENU: &str = "
--- Trainers Menu ---
1. Add Trainer
2. List Trainers
3. Delete Trainer
4. View Trainer Workouts
0. Back
";

/// Listing line for one trainer
pub fn line(trainer: &Trainer) -> String {
    format!("{}. {} - {}", trainer.id, trainer.name, trainer.specialty_label())
}

pub fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say("\n-- Add Trainer --")?;
    let name = console.prompt("Name: ")?;
    if name.is_empty() {
        return console.say("⚠ Name required.");
    }
    let specialty = console.prompt("Specialty (optional): ")?;

    match TrainerRepo::create(conn, &name, Some(&specialty)) {
        Ok(trainer) => console.say(format!("✓ Created {}", trainer)),
        Err(e) => warn(console, "Could not create trainer", &e),
    }
}

pub fn list<R: BufRead, W: Write>(console: &mut Console<R, W>, conn: &Connection) -> io::Result<()> {
    console.say("\n-- Trainers --")?;
    let trainers = match TrainerRepo::get_all(conn) {
        Ok(trainers) => trainers,
        Err(e) => return warn(console, "Could not list trainers", &e),
    };
    if trainers.is_empty() {
        return console.say("No trainers.");
    }
    for trainer in &trainers {
        console.say(line(trainer))?;
    }
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    list(console, conn)?;
    let Some(id) = safe_int(&console.prompt("Enter Trainer ID to delete: ")?) else {
        return console.say("⚠ Invalid ID.");
    };
    match TrainerRepo::delete(conn, id) {
        Ok(true) => console.say("✓ Deleted."),
        Ok(false) => console.say("⚠ Trainer not found."),
        Err(e) => warn(console, "Could not delete trainer", &e),
    }
}

pub fn view_workouts<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &Connection,
) -> io::Result<()> {
    let name = console.prompt("Trainer name to view workouts: ")?;
    let trainer = match TrainerRepo::find_by_name(conn, &name) {
        Ok(Some(trainer)) => trainer,
        Ok(None) => return console.say("⚠ Trainer not found."),
        Err(e) => return warn(console, "Could not look up trainer", &e),
    };

    console.say(format!("\nWorkouts by {}:", trainer.name))?;
    let workouts = match WorkoutRepo::list_for_trainer(conn, trainer.id) {
        Ok(workouts) => workouts,
        Err(e) => return warn(console, "Could not list workouts", &e),
    };
    if workouts.is_empty() {
        return console.say("No workouts.");
    }
    for workout in &workouts {
        console.say(format!(
            "{}. {} - {}",
            workout.id,
            workout.name,
            workout.description.as_deref().unwrap_or("")
        ))?;
    }
    Ok(())
}
