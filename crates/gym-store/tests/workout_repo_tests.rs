// Integration tests for WorkoutRepo

mod common;

use common::{count_rows, setup_store, trainer};
use gym_core::{GymError, Trainer};
use gym_store::{TrainerRepo, WorkoutRepo};

#[test]
fn test_create_workout_for_trainer() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Mo");

    let workout = WorkoutRepo::create(&mut conn, &coach, " Spin ", Some(" Cardio ")).unwrap();

    assert_eq!(workout.name, "Spin");
    assert_eq!(workout.description.as_deref(), Some("Cardio"));
    assert_eq!(workout.trainer_id, coach.id);
    assert_eq!(WorkoutRepo::find_by_id(&conn, workout.id).unwrap(), Some(workout));
}

#[test]
fn test_blank_name_is_rejected() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Mo");

    let err = WorkoutRepo::create(&mut conn, &coach, "  ", None).unwrap_err();

    assert!(matches!(err, GymError::Validation { field: "name", .. }));
    assert_eq!(count_rows(&conn, "workouts"), 0);
}

#[test]
fn test_stale_trainer_is_constraint_violation() {
    let mut conn = setup_store();
    let coach = trainer(&mut conn, "Nia");
    TrainerRepo::delete(&mut conn, coach.id).unwrap();

    let err = WorkoutRepo::create(&mut conn, &coach, "Pilates", None).unwrap_err();

    assert!(matches!(err, GymError::StorageConstraint { .. }));
    assert_eq!(count_rows(&conn, "workouts"), 0);
}

#[test]
fn test_fabricated_trainer_is_constraint_violation() {
    let mut conn = setup_store();
    let ghost = Trainer {
        id: 999,
        name: "Ghost".to_string(),
        specialty: None,
    };

    let err = WorkoutRepo::create(&mut conn, &ghost, "Boo", None).unwrap_err();

    assert!(matches!(err, GymError::StorageConstraint { .. }));
}

#[test]
fn test_find_by_name_is_scoped_to_trainer() {
    let mut conn = setup_store();
    let oli = trainer(&mut conn, "Oli");
    let pat = trainer(&mut conn, "Pat");
    let olis_yoga = WorkoutRepo::create(&mut conn, &oli, "Yoga", None).unwrap();
    let pats_yoga = WorkoutRepo::create(&mut conn, &pat, "Yoga", None).unwrap();

    assert_eq!(
        WorkoutRepo::find_by_name(&conn, &pat, " yoga ").unwrap(),
        Some(pats_yoga)
    );
    assert_eq!(
        WorkoutRepo::find_by_name(&conn, &oli, "YOGA").unwrap(),
        Some(olis_yoga.clone())
    );
    assert_eq!(WorkoutRepo::find_by_name(&conn, &oli, "Spin").unwrap(), None);
    assert_eq!(WorkoutRepo::find_by_name(&conn, &oli, "").unwrap(), None);

    // Unscoped lookup takes the lowest id
    assert_eq!(
        WorkoutRepo::find_by_name_any_trainer(&conn, "yoga").unwrap(),
        Some(olis_yoga)
    );
}

#[test]
fn test_find_by_name_folds_non_ascii_letters() {
    let mut conn = setup_store();
    let zoe = trainer(&mut conn, "Zoë");
    let stretch = WorkoutRepo::create(&mut conn, &zoe, "Étirement", None).unwrap();

    assert_eq!(
        WorkoutRepo::find_by_name(&conn, &zoe, "ÉTIREMENT").unwrap(),
        Some(stretch.clone())
    );
    assert_eq!(
        WorkoutRepo::find_by_name_any_trainer(&conn, "étirement").unwrap(),
        Some(stretch)
    );
}

#[test]
fn test_list_for_trainer() {
    let mut conn = setup_store();
    let quinn = trainer(&mut conn, "Quinn");
    let ray = trainer(&mut conn, "Ray");
    let a = WorkoutRepo::create(&mut conn, &quinn, "HIIT", None).unwrap();
    WorkoutRepo::create(&mut conn, &ray, "Swim", None).unwrap();
    let b = WorkoutRepo::create(&mut conn, &quinn, "Core", None).unwrap();

    assert_eq!(WorkoutRepo::list_for_trainer(&conn, quinn.id).unwrap(), vec![a, b]);
    assert!(WorkoutRepo::list_for_trainer(&conn, 999).unwrap().is_empty());
}

#[test]
fn test_get_all_empty_then_ordered() {
    let mut conn = setup_store();
    assert!(WorkoutRepo::get_all(&conn).unwrap().is_empty());

    let coach = trainer(&mut conn, "Sol");
    let first = WorkoutRepo::create(&mut conn, &coach, "Row", None).unwrap();
    let second = WorkoutRepo::create(&mut conn, &coach, "Run", None).unwrap();

    assert_eq!(WorkoutRepo::get_all(&conn).unwrap(), vec![first, second]);
}

#[test]
fn test_delete_missing_returns_false() {
    let mut conn = setup_store();
    assert!(!WorkoutRepo::delete(&mut conn, 77).unwrap());
}
