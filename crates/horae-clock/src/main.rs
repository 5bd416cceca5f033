use std::path::PathBuf;

use horae_dial::ClockApp;

fn main() {
    // Startup banner, printed before the window opens.
    println!();
    println!("  ┌────────────────────────────────────┐");
    println!("  │   HORAE  ·  analog wall clock      │");
    println!("  │   cpu raster  ·  one tick a second │");
    println!("  └────────────────────────────────────┘");
    println!();

    let mut app = ClockApp::new()
        .title("horae")
        .width(900)
        .font(load_font());

    if let Some(face) = find_face_image() {
        app = app.face_image(face);
    }

    app.run()
}

fn load_font() -> Vec<u8> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .find_map(|p| std::fs::read(p).ok())
    .unwrap_or_default()
}

fn find_face_image() -> Option<PathBuf> {
    ["assets/clock-face.svg", "assets/clock-face.png", "clock-face.svg"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
