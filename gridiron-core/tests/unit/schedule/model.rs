use super::*;

fn games(n: usize) -> Vec<ScheduleEntry> {
    (0..n)
        .map(|i| ScheduleEntry::new(format!("Team {i}"), format!("09-{:02}", i + 1), i % 2 == 0))
        .collect()
}

#[test]
fn grid_entries_drop_byes() {
    let mut entries = games(4);
    entries.push(ScheduleEntry::new(BYE, "09-02", false));
    let schedule = Schedule::new(entries);

    assert_eq!(schedule.len(), 5);
    let grid = schedule.grid_entries();
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|e| e.opponent != BYE));
}

#[test]
fn grid_entries_cap_at_twelve() {
    let schedule = Schedule::new(games(15));
    let grid = schedule.grid_entries();
    assert_eq!(grid.len(), MAX_GRID_GAMES);
    assert_eq!(grid[0].date, "09-01");
    assert_eq!(grid[11].date, "09-12");
}

#[test]
fn season_order_survives_new_year() {
    let json = r#"[
        {"opponent": "Michigan", "home": true, "date": "08-31"},
        {"opponent": "Auburn", "home": false, "date": "11-30"},
        {"opponent": "BYE", "home": false, "date": "12-07"},
        {"opponent": "Oklahoma", "home": true, "date": "12-31"},
        {"opponent": "Western Kentucky", "home": false, "date": "01-01"}
    ]"#;
    let schedule = Schedule::from_json(json).unwrap();
    let order: Vec<&str> = schedule
        .grid_entries()
        .iter()
        .map(|e| e.opponent.as_str())
        .collect();
    assert_eq!(order, vec!["Michigan", "Auburn", "Oklahoma", "Western Kentucky"]);
}

#[test]
fn bowl_game_after_twelve_regular_games_is_the_one_capped() {
    let mut entries = games(12);
    entries.push(ScheduleEntry::new("Bowl Opponent", "01-01", true));
    let schedule = Schedule::new(entries);
    let grid = schedule.grid_entries();
    assert_eq!(grid.len(), MAX_GRID_GAMES);
    assert!(grid.iter().all(|e| e.opponent != "Bowl Opponent"));
    assert_eq!(grid[0].opponent, schedule.entries[0].opponent);
}

#[test]
fn from_json_derives_missing_logo_and_ignores_week() {
    let json = r#"[
        {"week": 1, "opponent": "Texas A&M", "home": true, "date": "08-31"},
        {"opponent": "LSU", "opponent_logo": "LSU.png", "home": false, "date": "09-07"},
        {"opponent": "BYE", "home": false, "date": "09-14"}
    ]"#;
    let schedule = Schedule::from_json(json).unwrap();
    assert_eq!(schedule.entries[0].opponent_logo, "Texas_AM.png");
    assert_eq!(schedule.entries[0].week, Some(1));
    assert_eq!(schedule.entries[1].opponent_logo, "LSU.png");
    assert!(schedule.entries[2].is_bye());
}

#[test]
fn from_json_rejects_garbage() {
    assert!(Schedule::from_json("{\"opponent\": 3}").is_err());
}

#[test]
fn filename_rules() {
    assert_eq!(logo_filename_for_team("Ole Miss"), "Ole_Miss.png");
    assert_eq!(logo_filename_for_team("Texas A&M"), "Texas_A&M.png");
    assert_eq!(logo_filename_for_opponent("Hawai'i"), "Hawaii.png");
    assert_eq!(logo_filename_for_opponent("San José State"), "San_Jos_State.png");
    assert_eq!(
        logo_filename_for_opponent("Miami (OH)"),
        "Miami_OH.png"
    );
}
