use rand::{SeedableRng as _, rngs::StdRng};

use super::*;
use crate::config::AssetConfig;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gridiron_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn square_logo(dir: &Path, name: &str, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(40, 40, image::Rgba([rgb[0], rgb[1], rgb[2], 255]))
        .save(&path)
        .unwrap();
    path
}

#[test]
fn priority_logos_are_planned_last() {
    let logos: Vec<PathBuf> = ["Alabama.png", "Zed.png", "Georgia.png", "Ames.png", "Baylor.png"]
        .iter()
        .map(PathBuf::from)
        .collect();
    let mut rng = StdRng::seed_from_u64(7);
    let plan = plan_collage(
        &logos,
        &DEFAULT_PRIORITY,
        DeviceProfile::Pc,
        &CollageOptions::default(),
        &mut rng,
    )
    .unwrap();

    let first_top = plan.placements.iter().position(|p| p.priority).unwrap();
    assert!(plan.placements[..first_top].iter().all(|p| !p.priority));
    assert!(plan.placements[first_top..].iter().all(|p| p.priority));
    assert!(
        plan.placements[first_top..]
            .iter()
            .all(|p| p.logo == Path::new("Alabama.png") || p.logo == Path::new("Georgia.png"))
    );

    for logo in &logos {
        let copies = plan.placements.iter().filter(|p| &p.logo == logo).count();
        assert!((5..=8).contains(&copies), "{} copies of {logo:?}", copies);
    }
    for p in &plan.placements {
        assert!((70..=180).contains(&p.size));
        assert!((-25.0..=25.0).contains(&p.rotation));
        assert!((0.0..1.0).contains(&p.fx) && (0.0..1.0).contains(&p.fy));
    }
    assert_eq!(plan.target, DeviceProfile::Pc.size());
    assert_eq!((plan.working.width, plan.working.height), (3456, 1944));
}

#[test]
fn empty_logo_set_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = plan_collage::<&str, _>(
        &[],
        &[],
        DeviceProfile::Mobile,
        &CollageOptions::default(),
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(err, WallpaperError::Validation(_)));
}

#[test]
fn forced_overlap_shows_priority_logo_on_top() {
    let dir = temp_dir("collage_layer");
    let red = square_logo(&dir, "Rice.png", [200, 0, 0]);
    let blue = square_logo(&dir, "Kentucky.png", [0, 0, 200]);

    let options = CollageOptions {
        copies: 1..=1,
        size: 40..=40,
        max_rotation: 0.0,
        ..CollageOptions::default()
    };
    // Priority logo listed first so input order cannot explain the result.
    let logos = vec![blue.clone(), red.clone()];
    let mut rng = StdRng::seed_from_u64(99);
    let mut plan = plan_collage(&logos, &["Kentucky"], DeviceProfile::Pc, &options, &mut rng)
        .unwrap();
    for p in &mut plan.placements {
        p.fx = 0.5;
        p.fy = 0.5;
    }
    assert_eq!(plan.placements.len(), 2);
    assert_eq!(plan.placements[1].logo, blue);

    let loader = LogoLoader::new(AssetConfig::with_root(&dir));
    let collage = paint_collage(&plan, &loader).unwrap();
    assert_eq!(collage.image.dimensions(), (2560, 1440));
    assert_eq!(collage.report.placed, 2);

    let center = collage.image.get_pixel(1280, 720).0;
    assert_eq!(center, [0, 0, 200]);
    assert_eq!(collage.image.get_pixel(0, 0).0, COLLAGE_BACKGROUND.to_array());

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn broken_logo_is_skipped_not_fatal() {
    let dir = temp_dir("collage_skip");
    let good = square_logo(&dir, "Navy.png", [10, 20, 90]);
    let bad = dir.join("Broken.png");
    std::fs::write(&bad, b"definitely not a png").unwrap();
    let missing = dir.join("Nowhere.png");

    let options = CollageOptions {
        copies: 2..=2,
        ..CollageOptions::default()
    };
    let loader = LogoLoader::new(AssetConfig::with_root(&dir));
    let mut rng = StdRng::seed_from_u64(3);
    let collage = generate_collage(
        &[good, bad.clone(), missing.clone()],
        &[] as &[&str],
        DeviceProfile::Mobile,
        &options,
        &loader,
        &mut rng,
    )
    .unwrap();

    assert_eq!(collage.image.dimensions(), (1284, 2778));
    assert_eq!(collage.report.placed, 2);
    assert_eq!(collage.report.skipped, 4);
    assert_eq!(collage.report.failed_logos.len(), 2);
    assert!(collage.report.failed_logos.contains(&bad));
    assert!(collage.report.failed_logos.contains(&missing));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn die_cut_border_surrounds_sticker() {
    let dir = temp_dir("collage_border");
    let logo = square_logo(&dir, "Army.png", [0, 90, 0]);
    let plan = CollagePlan {
        target: CanvasSize::new(120, 120).unwrap(),
        working: CanvasSize::new(120, 120).unwrap(),
        background: COLLAGE_BACKGROUND,
        border: Some(6),
        border_color: Rgb8::WHITE,
        placements: vec![Placement {
            logo,
            priority: false,
            size: 40,
            rotation: 0.0,
            fx: 0.5,
            fy: 0.5,
        }],
    };
    let loader = LogoLoader::new(AssetConfig::with_root(&dir));
    let collage = paint_collage(&plan, &loader).unwrap();

    // 40px logo + 6px margin each side = 52px sticker, centered at 34..86.
    assert_eq!(collage.image.get_pixel(60, 60).0, [0, 90, 0]);
    assert_eq!(collage.image.get_pixel(38, 60).0, [255, 255, 255]);
    assert_eq!(collage.image.get_pixel(5, 5).0, COLLAGE_BACKGROUND.to_array());

    std::fs::remove_dir_all(&dir).ok();
}
