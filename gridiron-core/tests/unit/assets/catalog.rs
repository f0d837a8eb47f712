use std::path::Path;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "gridiron_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn touch_png(path: &Path) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 255]))
        .save(path)
        .unwrap();
}

fn fixture(name: &str) -> (PathBuf, FsCatalog) {
    let root = temp_dir(name);
    for team in ["Alabama", "Ole_Miss", "Georgia", "fallback"] {
        touch_png(&root.join(format!("data/logos/{team}.png")));
    }
    std::fs::write(root.join("data/logos/notes.txt"), "x").unwrap();
    std::fs::create_dir_all(root.join("data/schedules")).unwrap();
    for team in ["Alabama", "Ole_Miss"] {
        std::fs::write(
            root.join(format!("data/schedules/{team}.json")),
            r#"[{"opponent": "LSU", "date": "09-07", "home": true}]"#,
        )
        .unwrap();
    }
    (root.clone(), FsCatalog::new(AssetConfig::with_root(root)))
}

#[test]
fn list_teams_requires_logo_and_schedule() {
    let (root, catalog) = fixture("catalog_list");
    let teams = catalog.list_teams().unwrap();
    let names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Alabama", "Ole Miss"]);
    assert_eq!(teams[1].logo, "Ole_Miss.png");
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn collage_logos_skip_fallback_and_non_png() {
    let (root, catalog) = fixture("catalog_collage");
    let logos = catalog.collage_logos().unwrap();
    let stems: Vec<_> = logos
        .iter()
        .map(|p| p.file_stem().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(stems, ["Alabama", "Georgia", "Ole_Miss"]);
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn logo_and_schedule_lookup() {
    let (root, catalog) = fixture("catalog_lookup");
    assert!(catalog.logo_path_for("Ole Miss").is_some());
    assert!(catalog.logo_path_for("Texas").is_none());

    let schedule = catalog.schedule_for("Ole Miss").unwrap();
    assert_eq!(schedule.entries[0].opponent_logo, "LSU.png");

    let err = catalog.schedule_for("Georgia").unwrap_err();
    assert!(matches!(err, WallpaperError::ScheduleNotFound(ref t) if t == "Georgia"));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn missing_logos_dir_is_reported() {
    let catalog = FsCatalog::new(AssetConfig::with_root(temp_dir("catalog_empty")));
    assert!(matches!(
        catalog.collage_logos().unwrap_err(),
        WallpaperError::MissingAsset { .. }
    ));
}
