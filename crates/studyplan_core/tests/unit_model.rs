use chrono::NaiveDate;
use studyplan_core::{
    compute_weight_score, AvailabilityProfile, BlockKind, Difficulty, StudyDay, StudyPreference,
    Unit, UnitType,
};

#[test]
fn unit_new_derives_weight_and_defaults() {
    let unit = Unit::new("u-1", "Linear Algebra", Difficulty::Hard, UnitType::Exam);

    assert_eq!(unit.id, "u-1");
    assert_eq!(unit.name, "Linear Algebra");
    assert_eq!(unit.weight_score, 4.5);
    assert_eq!(unit.assessment_date, None);
    assert!(unit.is_hard());
    assert!(unit.is_exam());
    unit.validate().expect("fresh unit should be valid");
}

#[test]
fn unit_type_maps_to_block_kind() {
    assert_eq!(UnitType::Exam.block_kind(), BlockKind::DeepFocus);
    assert_eq!(UnitType::Practical.block_kind(), BlockKind::Sprint);
    assert_eq!(UnitType::Project.block_kind(), BlockKind::Revision);
}

#[test]
fn harder_difficulty_never_lowers_weight() {
    for kind in [UnitType::Exam, UnitType::Practical, UnitType::Project] {
        let easy = compute_weight_score(Difficulty::Easy, kind);
        let moderate = compute_weight_score(Difficulty::Moderate, kind);
        let hard = compute_weight_score(Difficulty::Hard, kind);
        assert!(easy < moderate && moderate < hard, "kind {kind}");
    }
}

#[test]
fn unit_serialization_uses_expected_wire_fields() {
    let unit = Unit::new("u-2", "Chemistry Lab", Difficulty::Moderate, UnitType::Practical)
        .with_assessment_date(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());

    let json = serde_json::to_value(&unit).unwrap();
    assert_eq!(json["id"], "u-2");
    assert_eq!(json["name"], "Chemistry Lab");
    assert_eq!(json["difficulty"], "moderate");
    assert_eq!(json["type"], "practical");
    assert_eq!(json["assessmentDate"], "2025-06-01");
    assert!((json["weightScore"].as_f64().unwrap() - 2.4).abs() < 1e-9);

    let decoded: Unit = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, unit);
}

#[test]
fn deserialize_derives_missing_weight_score() {
    let value = serde_json::json!({
        "id": "u-3",
        "name": "Thesis",
        "difficulty": "hard",
        "type": "project"
    });

    let unit: Unit = serde_json::from_value(value).unwrap();
    assert_eq!(unit.weight_score, 3.0);
    assert_eq!(unit.assessment_date, None);
}

#[test]
fn deserialize_keeps_persisted_weight_score() {
    let value = serde_json::json!({
        "id": "u-4",
        "name": "History",
        "difficulty": "easy",
        "type": "exam",
        "weightScore": 7.0
    });

    let unit: Unit = serde_json::from_value(value).unwrap();
    assert_eq!(unit.weight_score, 7.0);
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": "u-5",
        "name": "  ",
        "difficulty": "easy",
        "type": "exam"
    });

    let err = serde_json::from_value::<Unit>(value).unwrap_err();
    assert!(
        err.to_string().contains("unit name is required"),
        "unexpected error: {err}"
    );
}

#[test]
fn availability_deserializes_with_defaults() {
    let value = serde_json::json!({
        "dailyHours": 1.5,
        "weeklyDays": ["friday", "monday"]
    });

    let profile: AvailabilityProfile = serde_json::from_value(value).unwrap();
    assert_eq!(profile.daily_hours, 1.5);
    assert!(profile.preferred_times.is_empty());
    assert_eq!(profile.study_preference, StudyPreference::Mixed);
    assert_eq!(
        profile.canonical_days(),
        vec![StudyDay::Monday, StudyDay::Friday]
    );
    assert_eq!(profile.total_weekly_hours(), 3.0);
}

#[test]
fn availability_rejects_unknown_day() {
    let value = serde_json::json!({
        "dailyHours": 1.0,
        "weeklyDays": ["funday"]
    });

    assert!(serde_json::from_value::<AvailabilityProfile>(value).is_err());
}
