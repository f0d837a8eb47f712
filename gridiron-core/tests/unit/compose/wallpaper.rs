use super::*;
use crate::config::AssetConfig;

fn temp_root(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "gridiron_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(dir.join("data/logos")).unwrap();
    dir
}

fn write_logo(root: &Path, name: &str, rgb: [u8; 3]) -> PathBuf {
    let path = root.join("data/logos").join(name);
    let mut img = RgbaImage::new(60, 40);
    for y in 5..35 {
        for x in 5..55 {
            img.put_pixel(x, y, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
        }
    }
    img.save(&path).unwrap();
    path
}

fn composer(root: &Path) -> Composer {
    Composer::new(LogoLoader::new(AssetConfig::with_root(root))).with_font(None)
}

#[test]
fn centering_floors_like_integer_division() {
    assert_eq!(centered(100, 40), 30);
    assert_eq!(centered(100, 41), 29);
    assert_eq!(centered(1284, 1829), -273);
}

#[test]
fn outlined_logo_grows_by_thickness() {
    let logo = RgbaImage::from_pixel(10, 6, image::Rgba([9, 9, 9, 255]));
    let out = outlined(&logo, 3).unwrap();
    assert_eq!(out.dimensions(), (16, 12));
    assert_eq!(out.get_pixel(1, 6).0, [255, 255, 255, 255]);
    assert_eq!(out.get_pixel(8, 6).0, [9, 9, 9, 255]);
    assert_eq!(out.get_pixel(0, 0).0[3], 0);
}

#[test]
fn missing_hero_logo_is_fatal() {
    let root = temp_root("compose_missing_hero");
    let err = composer(&root)
        .compose(
            "Nobody",
            &Schedule::default(),
            Path::new("data/logos/Nobody.png"),
            &ComposeOptions::default(),
            DeviceProfile::Pc,
        )
        .unwrap_err();
    assert!(matches!(err, WallpaperError::MissingAsset { .. }));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn stickerbomb_without_collage_asset_is_fatal() {
    let root = temp_root("compose_no_collage");
    let logo = write_logo(&root, "Auburn.png", [3, 36, 77]);
    let options = ComposeOptions {
        stickerbomb: true,
        ..ComposeOptions::default()
    };
    let err = composer(&root)
        .compose("Auburn", &Schedule::default(), &logo, &options, DeviceProfile::Mobile)
        .unwrap_err();
    assert!(matches!(err, WallpaperError::MissingAsset { .. }));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn solid_fill_defaults_to_logo_primary() {
    let root = temp_root("compose_primary");
    let logo = write_logo(&root, "Rice.png", [0, 32, 91]);
    let options = ComposeOptions {
        show_schedule: false,
        ..ComposeOptions::default()
    };
    let out = composer(&root)
        .compose("Rice", &Schedule::default(), &logo, &options, DeviceProfile::Pc)
        .unwrap();

    let expected = derive_palette(&image::open(&logo).unwrap().to_rgba8()).primary;
    assert_eq!(Rgb8::from(out.image.get_pixel(0, 0).0), expected);
    assert_eq!(out.report.background, BackgroundKind::Solid);
    assert_eq!(out.report.grid_cells, 0);
    // Hero is centered when there is no schedule.
    assert_eq!(Rgb8::from(out.image.get_pixel(1280, 720).0), Rgb8::new(0, 32, 91));
    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn gradient_uses_explicit_colors_first() {
    let root = temp_root("compose_gradient");
    let logo = write_logo(&root, "Duke.png", [0, 48, 135]);
    let options = ComposeOptions {
        gradient_enabled: true,
        style: GradientStyle::Split,
        color1: Some(Rgb8::new(255, 0, 0)),
        show_schedule: false,
        ..ComposeOptions::default()
    };
    let out = composer(&root)
        .compose("Duke", &Schedule::default(), &logo, &options, DeviceProfile::Pc)
        .unwrap();

    let palette = derive_palette(&image::open(&logo).unwrap().to_rgba8());
    assert_eq!(Rgb8::from(out.image.get_pixel(0, 0).0), Rgb8::new(255, 0, 0));
    assert_eq!(Rgb8::from(out.image.get_pixel(0, 1439).0), palette.secondary);
    assert_eq!(
        out.report.background,
        BackgroundKind::Gradient(GradientStyle::Split)
    );
    std::fs::remove_dir_all(&root).ok();
}
