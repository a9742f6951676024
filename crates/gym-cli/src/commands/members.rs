//! Member actions

use super::warn;
use crate::console::{safe_int, Console};
use gym_core::rules::validate_membership_type;
use gym_core::{Member, MembershipType};
use gym_store::{MemberRepo, ScheduleRepo};
use rusqlite::Connection;
use std::io::{self, BufRead, Write};

pub const MENU: &str = "
--- Members Menu ---
1. Add Member
2. List Members
3. Delete Member
4. View Member Schedule
0. Back
";

/// Listing line for one member
pub fn line(member: &Member) -> String {
    let age = member
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    format!(
        "{}. {} - {} - Age: {}",
        member.id, member.name, member.membership_type, age
    )
}

pub fn add<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    console.say("\n-- Add Member --")?;
    let name = console.prompt("Name: ")?;
    if name.is_empty() {
        return console.say("⚠ Name required.");
    }

    let options: Vec<&str> = MembershipType::ALL.iter().map(|m| m.as_str()).collect();
    console.say(format!("Membership options: {}", options.join(", ")))?;
    let membership_type = console.prompt("Membership type (Monthly or Annual): ")?;
    if validate_membership_type(&membership_type).is_err() {
        return console.say("⚠ Invalid membership type. Please choose 'Monthly' or 'Annual'.");
    }

    // Unparseable ages are dropped rather than rejected
    let age = safe_int(&console.prompt("Age (optional): ")?);

    match MemberRepo::create(conn, &name, &membership_type, age) {
        Ok(member) => console.say(format!(
            "✓ Created {} (fee: {})",
            member,
            member.membership_type.fee()
        )),
        Err(e) => warn(console, "Could not create member", &e),
    }
}

pub fn list<R: BufRead, W: Write>(console: &mut Console<R, W>, conn: &Connection) -> io::Result<()> {
    console.say("\n-- Members --")?;
    let members = match MemberRepo::get_all(conn) {
        Ok(members) => members,
        Err(e) => return warn(console, "Could not list members", &e),
    };
    if members.is_empty() {
        return console.say("No members.");
    }
    for member in &members {
        console.say(line(member))?;
    }
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &mut Connection,
) -> io::Result<()> {
    list(console, conn)?;
    let Some(id) = safe_int(&console.prompt("Enter Member ID to delete: ")?) else {
        return console.say("⚠ Invalid ID.");
    };
    match MemberRepo::delete(conn, id) {
        Ok(true) => console.say("✓ Deleted."),
        Ok(false) => console.say("⚠ Member not found."),
        Err(e) => warn(console, "Could not delete member", &e),
    }
}

pub fn view_schedule<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    conn: &Connection,
) -> io::Result<()> {
    let name = console.prompt("Member name to view schedule: ")?;
    let member = match MemberRepo::find_by_name(conn, &name) {
        Ok(Some(member)) => member,
        Ok(None) => return console.say("⚠ Member not found."),
        Err(e) => return warn(console, "Could not look up member", &e),
    };

    console.say(format!("\nSchedules for {}:", member.name))?;
    let details = match ScheduleRepo::list_details_for_member(conn, member.id) {
        Ok(details) => details,
        Err(e) => return warn(console, "Could not list schedules", &e),
    };
    if details.is_empty() {
        return console.say("No schedules.");
    }
    for d in &details {
        console.say(format!(
            "{}. Workout: {} (Trainer: {}) - Day: {}",
            d.schedule_id, d.workout_name, d.trainer_name, d.day_of_week
        ))?;
    }
    Ok(())
}
