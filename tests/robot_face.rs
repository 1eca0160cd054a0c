#![cfg(feature = "png")]

use image::Rgb;
use robot_icons::icon_gen::{create_icon_in, render_icon, Layout};
use tempfile::TempDir;

const FEATURES: Rgb<u8> = Rgb([102, 126, 234]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

#[test]
fn test_eyes_are_symmetric_at_every_size() {
    for size in [16, 48, 128] {
        let canvas = render_icon(size).unwrap();
        let layout = Layout::for_size(size);

        assert_eq!(
            *canvas.get_pixel(layout.left_eye_x, layout.eye_y),
            FEATURES,
            "left eye at {size}px"
        );
        assert_eq!(
            *canvas.get_pixel(layout.right_eye_x, layout.eye_y),
            FEATURES,
            "right eye at {size}px"
        );
    }
}

#[test]
fn test_smile_is_visible_at_16px() {
    let canvas = render_icon(16).unwrap();
    let layout = Layout::for_size(16);

    // the stroke width rounds down to zero here and is drawn as a hairline
    assert_eq!(layout.stroke_width, 0);

    let mouth_rows = layout.mouth_y..16;
    let smile_pixels = mouth_rows
        .flat_map(|y| (0..16).map(move |x| (x, y)))
        .filter(|&(x, y)| *canvas.get_pixel(x, y) == FEATURES)
        .count();
    assert!(smile_pixels > 0, "smile should be drawn at 16px");
}

#[test]
fn test_head_is_white_between_eyes_and_smile() {
    let canvas = render_icon(48).unwrap();
    assert_eq!(*canvas.get_pixel(24, 24), WHITE);
}

#[test]
fn test_single_pixel_icon_is_written() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let out_dir = temp_dir.path().join("nested").join("icons");

    create_icon_in(&out_dir, 1, "icon1.png").unwrap();

    let icon = image::open(out_dir.join("icon1.png")).expect("Failed to decode icon");
    assert_eq!((icon.width(), icon.height()), (1, 1));
}
