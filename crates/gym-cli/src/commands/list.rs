//! Non-interactive listing command

use super::{members, trainers, workouts};
use anyhow::Context;
use clap::{Args, ValueEnum};
use gym_store::{MemberRepo, ScheduleRepo, TrainerRepo, WorkoutRepo};
use rusqlite::Connection;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Entity {
    Trainers,
    Workouts,
    Members,
    Schedules,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which entity to list
    #[arg(value_enum)]
    pub entity: Entity,

    /// Print a JSON array instead of text lines
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ListArgs, conn: &Connection, out: &mut impl Write) -> anyhow::Result<()> {
    tracing::debug!(entity = ?args.entity, json = args.json, "listing");

    let lines: Vec<String> = match (args.entity, args.json) {
        (Entity::Trainers, true) => {
            return write_json(out, &TrainerRepo::get_all(conn).context("listing trainers")?)
        }
        (Entity::Workouts, true) => {
            return write_json(out, &WorkoutRepo::get_all(conn).context("listing workouts")?)
        }
        (Entity::Members, true) => {
            return write_json(out, &MemberRepo::get_all(conn).context("listing members")?)
        }
        (Entity::Schedules, true) => {
            return write_json(
                out,
                &ScheduleRepo::list_details(conn).context("listing schedules")?,
            )
        }
        (Entity::Trainers, false) => TrainerRepo::get_all(conn)
            .context("listing trainers")?
            .iter()
            .map(trainers::line)
            .collect(),
        (Entity::Workouts, false) => {
            let trainers = workouts::trainers_by_id(conn).context("listing trainers")?;
            WorkoutRepo::get_all(conn)
                .context("listing workouts")?
                .iter()
                .map(|w| workouts::line(w, trainers.get(&w.trainer_id)))
                .collect()
        }
        (Entity::Members, false) => MemberRepo::get_all(conn)
            .context("listing members")?
            .iter()
            .map(members::line)
            .collect(),
        (Entity::Schedules, false) => ScheduleRepo::list_details(conn)
            .context("listing schedules")?
            .iter()
            .map(|d| d.to_string())
            .collect(),
    };

    for line in lines {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &mut impl Write, rows: &[T]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_store::db::open_store_in_memory;

    fn seeded() -> Connection {
        let mut conn = open_store_in_memory().unwrap();
        let alice = TrainerRepo::create(&mut conn, "Alice", Some("Yoga")).unwrap();
        let flow = WorkoutRepo::create(&mut conn, &alice, "Flow", None).unwrap();
        let bob = MemberRepo::create(&mut conn, "Bob", "Monthly", None).unwrap();
        ScheduleRepo::create(&mut conn, &bob, &flow, "Monday").unwrap();
        conn
    }

    fn run(entity: Entity, json: bool) -> String {
        let conn = seeded();
        let mut out = Vec::new();
        execute(ListArgs { entity, json }, &conn, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_trainers_text() {
        assert_eq!(run(Entity::Trainers, false), "1. Alice - Yoga\n");
    }

    #[test]
    fn test_list_workouts_shows_trainer_name() {
        assert!(run(Entity::Workouts, false).contains("Flow (Trainer: Alice)"));
    }

    #[test]
    fn test_list_members_json() {
        let out = run(Entity::Members, true);
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows[0]["name"], "Bob");
        assert_eq!(rows[0]["membership_type"], "Monthly");
        assert!(rows[0]["age"].is_null());
    }

    #[test]
    fn test_list_schedules_json_uses_names() {
        let out = run(Entity::Schedules, true);
        let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(rows[0]["member_name"], "Bob");
        assert_eq!(rows[0]["trainer_name"], "Alice");
        assert_eq!(rows[0]["day_of_week"], "Monday");
    }
}
