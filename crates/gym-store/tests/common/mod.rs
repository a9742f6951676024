#![allow(dead_code)]

use gym_core::{Member, Trainer, Workout};
use gym_store::{MemberRepo, TrainerRepo, WorkoutRepo};
use rusqlite::Connection;

/// Fresh, migrated in-memory store
pub fn setup_store() -> Connection {
    gym_store::db::open_store_in_memory().expect("Failed to create in-memory store")
}

pub fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .expect("count query")
}

pub fn trainer(conn: &mut Connection, name: &str) -> Trainer {
    TrainerRepo::create(conn, name, None).expect("create trainer")
}

pub fn workout(conn: &mut Connection, trainer: &Trainer, name: &str) -> Workout {
    WorkoutRepo::create(conn, trainer, name, None).expect("create workout")
}

pub fn member(conn: &mut Connection, name: &str) -> Member {
    MemberRepo::create(conn, name, "Monthly", None).expect("create member")
}
