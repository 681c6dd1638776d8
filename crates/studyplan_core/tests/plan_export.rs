use chrono::{NaiveDate, TimeZone, Utc};
use studyplan_core::{
    export_file_name, generate_plan, render_plan_text, stress_level, AvailabilityProfile,
    Difficulty, PreferredTime, StressLevel, StudyDay, StudyPreference, Unit, UnitType,
};

fn export_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
}

#[test]
fn text_export_matches_layout() {
    let units = vec![Unit::new("u1", "Essay", Difficulty::Easy, UnitType::Project)];
    let availability = AvailabilityProfile {
        daily_hours: 1.0,
        weekly_days: vec![StudyDay::Monday],
        preferred_times: vec![],
        study_preference: StudyPreference::Mixed,
    };
    let now = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    let plan = generate_plan(&units, &availability, now).unwrap();

    let text = render_plan_text(&plan, export_date());
    let expected = "\
STUDY PLAN
============

Generated: 2025-03-03
Total Hours: 1.0h
Average Daily: 1.0h
Stress Index: 33%

WARNINGS:
- Low total study hours - consider increasing daily availability

MONDAY
------
18:00 - 19:00: Essay (revision)

";
    assert_eq!(text, expected);
    assert_eq!(stress_level(plan.stress_index), StressLevel::Medium);
}

#[test]
fn text_export_lists_days_in_week_order() {
    let units = vec![
        Unit::new("a", "Algebra", Difficulty::Hard, UnitType::Exam),
        Unit::new("b", "Biology Lab", Difficulty::Moderate, UnitType::Practical),
    ];
    let availability = AvailabilityProfile {
        daily_hours: 3.0,
        weekly_days: vec![StudyDay::Sunday, StudyDay::Tuesday, StudyDay::Friday, StudyDay::Monday],
        preferred_times: vec![],
        study_preference: StudyPreference::Long,
    };
    let now = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    let plan = generate_plan(&units, &availability, now).unwrap();

    let text = render_plan_text(&plan, export_date());
    let positions: Vec<usize> = ["MONDAY\n", "TUESDAY\n", "FRIDAY\n", "SUNDAY\n"]
        .iter()
        .map(|header| text.find(header).expect("day header present"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);

    assert!(!text.contains("WARNINGS:"));
    assert!(text.contains("18:00 - 19:30: Algebra (deep_focus)\n"));
    assert!(text.contains("19:00 - 19:15: Break (break)\n"));
}

#[test]
fn export_file_name_is_dated() {
    assert_eq!(export_file_name(export_date()), "study-plan-2025-03-03.txt");
}

#[test]
fn text_export_sorts_blocks_that_wrap_past_midnight() {
    let units: Vec<Unit> = (0..8)
        .map(|index| {
            Unit::new(
                format!("u{index}"),
                format!("Unit {index}"),
                Difficulty::Hard,
                UnitType::Exam,
            )
        })
        .collect();
    let availability = AvailabilityProfile {
        daily_hours: 8.0,
        weekly_days: StudyDay::ALL.to_vec(),
        preferred_times: vec![PreferredTime::Evening],
        study_preference: StudyPreference::Mixed,
    };
    let now = Utc.with_ymd_and_hms(2025, 3, 3, 9, 0, 0).unwrap();
    let plan = generate_plan(&units, &availability, now).unwrap();

    let text = render_plan_text(&plan, export_date());
    let monday = "\
MONDAY
------
00:00 - 01:00: Unit 6 (deep_focus)
01:00 - 02:00: Unit 7 (deep_focus)
18:00 - 19:00: Unit 0 (deep_focus)
19:00 - 20:00: Unit 1 (deep_focus)
20:00 - 21:00: Unit 2 (deep_focus)
21:00 - 22:00: Unit 3 (deep_focus)
22:00 - 23:00: Unit 4 (deep_focus)
22:00 - 22:15: Break (break)
23:00 - 00:00: Unit 5 (deep_focus)

";
    assert!(text.contains(monday), "unexpected export:\n{text}");

    for day in availability.canonical_days() {
        let header = format!("{}\n", day.as_str().to_uppercase());
        let start = text.find(&header).expect("day header present") + header.len();
        let section = &text[start..];
        let section = &section[..section.find("\n\n").unwrap_or(section.len())];
        let starts: Vec<&str> = section
            .lines()
            .skip(1)
            .map(|line| &line[..5])
            .collect();
        let mut sorted = starts.clone();
        sorted.sort();
        assert_eq!(starts, sorted, "{day} is out of order");
    }
}
