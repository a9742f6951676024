// Integration tests for cascading deletes
// Trainer -> Workout -> Schedule, Member -> Schedule

mod common;

use common::{count_rows, member, setup_store, trainer, workout};
use gym_core::GymError;
use gym_store::{MemberRepo, ScheduleRepo, TrainerRepo, WorkoutRepo};

#[test]
fn test_delete_trainer_removes_workouts_and_schedules() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Zed");
    let yoga = workout(&mut conn, &coach, "Yoga");
    let spin = workout(&mut conn, &coach, "Spin");
    let alice = member(&mut conn, "Alice");
    let s1 = ScheduleRepo::create(&mut conn, &alice, &yoga, "Monday").unwrap();
    let s2 = ScheduleRepo::create(&mut conn, &alice, &spin, "Tuesday").unwrap();

    assert!(TrainerRepo::delete(&mut conn, coach.id).unwrap());

    assert_eq!(TrainerRepo::find_by_id(&conn, coach.id).unwrap(), None);
    assert_eq!(WorkoutRepo::find_by_id(&conn, yoga.id).unwrap(), None);
    assert_eq!(WorkoutRepo::find_by_id(&conn, spin.id).unwrap(), None);
    assert_eq!(ScheduleRepo::find_by_id(&conn, s1.id).unwrap(), None);
    assert_eq!(ScheduleRepo::find_by_id(&conn, s2.id).unwrap(), None);
    // Members are never cascaded into
    assert_eq!(MemberRepo::find_by_id(&conn, alice.id).unwrap(), Some(alice));
}

#[test]
fn test_delete_trainer_leaves_other_trainers_alone() {
    let mut conn = setup_store();
    let doomed = trainer(&mut conn, "Ada");
    let kept = trainer(&mut conn, "Bea");
    let doomed_class = workout(&mut conn, &doomed, "Spin");
    let kept_class = workout(&mut conn, &kept, "Spin");
    let cole = member(&mut conn, "Cole");
    ScheduleRepo::create(&mut conn, &cole, &doomed_class, "Monday").unwrap();
    let kept_schedule = ScheduleRepo::create(&mut conn, &cole, &kept_class, "Monday").unwrap();

    TrainerRepo::delete(&mut conn, doomed.id).unwrap();

    assert_eq!(WorkoutRepo::get_all(&conn).unwrap(), vec![kept_class]);
    assert_eq!(ScheduleRepo::get_all(&conn).unwrap(), vec![kept_schedule]);
}

#[test]
fn test_delete_workout_keeps_member() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Fern");
    let yoga = workout(&mut conn, &coach, "Yoga");
    let alice = member(&mut conn, "Alice");
    let schedule = ScheduleRepo::create(&mut conn, &alice, &yoga, "Monday").unwrap();

    assert!(WorkoutRepo::delete(&mut conn, yoga.id).unwrap());

    assert_eq!(ScheduleRepo::find_by_id(&conn, schedule.id).unwrap(), None);
    assert_eq!(
        MemberRepo::find_by_name(&conn, "Alice").unwrap(),
        Some(alice)
    );
    assert_eq!(TrainerRepo::find_by_id(&conn, coach.id).unwrap(), Some(coach));
}

#[test]
fn test_delete_member_removes_only_its_schedules() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Gil");
    let yoga = workout(&mut conn, &coach, "Yoga");
    let alice = member(&mut conn, "Alice");
    let ben = member(&mut conn, "Ben");
    ScheduleRepo::create(&mut conn, &alice, &yoga, "Monday").unwrap();
    ScheduleRepo::create(&mut conn, &alice, &yoga, "Friday").unwrap();
    let bens = ScheduleRepo::create(&mut conn, &ben, &yoga, "Monday").unwrap();

    assert!(MemberRepo::delete(&mut conn, alice.id).unwrap());

    assert_eq!(MemberRepo::find_by_id(&conn, alice.id).unwrap(), None);
    assert_eq!(ScheduleRepo::get_all(&conn).unwrap(), vec![bens]);
    assert_eq!(WorkoutRepo::find_by_id(&conn, yoga.id).unwrap(), Some(yoga));
}

#[test]
fn test_failed_cascade_rolls_back_everything() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Hal");
    let free = workout(&mut conn, &coach, "Free");
    workout(&mut conn, &coach, "Locked");
    let alice = member(&mut conn, "Alice");
    ScheduleRepo::create(&mut conn, &alice, &free, "Monday").unwrap();

    // Make the second workout delete fail mid-cascade
    conn.execute_batch(
        "CREATE TRIGGER block_locked BEFORE DELETE ON workouts
         WHEN OLD.name = 'Locked'
         BEGIN SELECT RAISE(ABORT, 'workout is locked'); END;",
    )
    .unwrap();

    let err = TrainerRepo::delete(&mut conn, coach.id).unwrap_err();

    assert!(matches!(err, GymError::StorageConstraint { .. }));
    assert_eq!(count_rows(&conn, "trainers"), 1);
    assert_eq!(count_rows(&conn, "workouts"), 2);
    assert_eq!(count_rows(&conn, "schedules"), 1);
}

#[test]
fn test_store_rejects_orphaning_delete() {
    // Foreign keys are enforced, so bypassing the repository cannot orphan rows
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Ivy");
    workout(&mut conn, &coach, "Row");

    let result = conn.execute("DELETE FROM trainers WHERE id = ?1", [coach.id]);

    assert!(result.is_err());
    assert_eq!(count_rows(&conn, "trainers"), 1);
}
