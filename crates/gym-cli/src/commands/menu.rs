//! Interactive menu loop

use super::{members, schedules, trainers, workouts};
use crate::console::Console;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

const MAIN_MENU: &str = "
=== Gym Manager ===
1. Members
2. Trainers
3. Workouts
4. Schedules
0. Exit
";

const INVALID_CHOICE: &str = "⚠ Invalid choice, try again.";

/// Run the main menu until the user exits or input ends
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    loop {
        console.say(MAIN_MENU)?;
        let choice = console.prompt("Choose an option: ")?;
        if console.is_closed() {
            break;
        }
        match choice.as_str() {
            "1" => members_menu(console, conn)?,
            "2" => trainers_menu(console, conn)?,
            "3" => workouts_menu(console, conn)?,
            "4" => schedules_menu(console, conn)?,
            "0" => break,
            _ => console.say(INVALID_CHOICE)?,
        }
    }
    console.say("Goodbye!")
}

fn members_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say(members::MENU)?;
    let choice = console.prompt("Choose an option: ")?;
    match choice.as_str() {
        _ if console.is_closed() => Ok(()),
        "1" => members::add(console, conn),
        "2" => members::list(console, conn),
        "3" => members::delete(console, conn),
        "4" => members::view_schedule(console, conn),
        "0" => Ok(()),
        _ => console.say(INVALID_CHOICE),
    }
}

fn trainers_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say(trainers::MENU)?;
    let choice = console.prompt("Choose an option: ")?;
    match choice.as_str() {
        _ if console.is_closed() => Ok(()),
        "1" => trainers::add(console, conn),
        "2" => trainers::list(console, conn),
        "3" => trainers::delete(console, conn),
        "4" => trainers::view_workouts(console, conn),
        "0" => Ok(()),
        _ => console.say(INVALID_CHOICE),
    }
}

fn workouts_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say(workouts::MENU)?;
    let choice = console.prompt("Choose an option: ")?;
    match choice.as_str() {
        _ if console.is_closed() => Ok(()),
        "1" => workouts::add(console, conn),
        "2" => workouts::list(console, conn),
        "3" => workouts::delete(console, conn),
        "4" => workouts::view_members(console, conn),
        "0" => Ok(()),
        _ => console.say(INVALID_CHOICE),
    }
}

fn schedules_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say(schedules::MENU)?;
    let choice = console.prompt("Choose an option: ")?;
    match choice.as_str() {
        _ if console.is_closed() => Ok(()),
        "1" => schedules::add(console, conn),
        "2" => schedules::list(console, conn),
        "3" => schedules::delete(console, conn),
        "0" => Ok(()),
        _ => console.say(INVALID_CHOICE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str) -> (String, Connection) {
        let mut conn = gym_store::db::open_store_in_memory().unwrap();
        let mut output = Vec::new();
        {
            let mut console = Console::new(script.as_bytes(), &mut output);
            run(&mut console, &mut conn).unwrap();
        }
        (String::from_utf8(output).unwrap(), conn)
    }

    #[test]
    fn test_exit_immediately() {
        let (out, _) = session("0\n");
        assert!(out.contains("=== Gym Manager ==="));
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let (out, _) = session("");
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_choice_loops() {
        let (out, _) = session("9\n0\n");
        assert!(out.contains(INVALID_CHOICE));
        assert_eq!(out.matches("=== Gym Manager ===").count(), 2);
    }

    #[test]
    fn test_add_trainer_then_list() {
        let (out, conn) = session("2\n1\nAlice\n\n2\n2\n0\n");
        assert!(out.contains("✓ Created Trainer 1: Alice (General)"));
        assert!(out.contains("1. Alice - General"));
        assert_eq!(gym_store::TrainerRepo::get_all(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_add_member_shows_fee() {
        let (out, _) = session("1\n1\nBob\nAnnual\n30\n0\n");
        assert!(out.contains("(fee: 22000)"));
    }

    #[test]
    fn test_invalid_membership_type_is_rejected() {
        let (out, conn) = session("1\n1\nBob\nweekly\n0\n");
        assert!(out.contains("⚠ Invalid membership type"));
        assert!(gym_store::MemberRepo::get_all(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_unparseable_age_is_dropped() {
        let (_, conn) = session("1\n1\nBob\nMonthly\nthirty\n0\n");
        let members = gym_store::MemberRepo::get_all(&conn).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].age, None);
    }

    #[test]
    fn test_duplicate_trainer_warns_and_continues() {
        let (out, conn) = session("2\n1\nAlice\n\n2\n1\nAlice\nYoga\n0\n");
        assert!(out.contains("⚠ Could not create trainer"));
        assert!(out.contains("Goodbye!"));
        assert_eq!(gym_store::TrainerRepo::get_all(&conn).unwrap().len(), 1);
    }

    #[test]
    fn test_view_workout_members_lists_schedule_ids() {
        let script = [
            "2", "1", "Alice", "", // trainer
            "3", "1", "Alice", "Flow", "", // workout
            "1", "1", "Bob", "Monthly", "", // member
            "4", "1", "Bob", "1", "Monday", // schedule
            "3", "4", "flow", // view workout members
            "0",
        ]
        .join("\n");
        let (out, _) = session(&script);
        assert!(out.contains("Members in Flow:"));
        assert!(out.contains("1. Bob - Day: Monday"));
    }

    #[test]
    fn test_invalid_delete_id_warns() {
        let (out, _) = session("2\n3\nabc\n0\n");
        assert!(out.contains("⚠ Invalid ID."));
    }
}
