//! Stickwander desktop host: macroquad entry point.

use macroquad::prelude::{Conf, clear_background, draw_rectangle, get_frame_time, next_frame};
use macroquad::prelude::{is_quit_requested, prevent_quit};

use sw_companion::{Clock, Companion, CompanionConfig, Point, SystemClock, ThreadRandom};
use sw_gui::app::{AppState, sample_desktop};
use sw_gui::input::{Pointer, escape_pressed};
use sw_gui::render::{draw_click, draw_desktop, draw_stickman};
use sw_gui::theme::{CANVAS_H, CANVAS_W, CLICK_MARKER_SECS, palette, setup_virtual_canvas};
use sw_memory::{DEFAULT_FILE_NAME, MemoryStore};

fn window_conf() -> Conf {
    Conf {
        window_title: "Stickwander".to_owned(),
        window_width: CANVAS_W as i32,
        window_height: CANVAS_H as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    prevent_quit();

    let config = CompanionConfig::default().with_screen(CANVAS_W, CANVAS_H);
    let store = MemoryStore::beside_executable(DEFAULT_FILE_NAME);
    let memory = store.load();
    let now = SystemClock.now();

    let desktop = sample_desktop(config.screen_rect());
    let mut companion = Companion::new(config, memory, ThreadRandom::new(), now).with_store(store);
    companion.launch();
    let mut app = AppState::new(companion, SystemClock, desktop);
    log::info!("Stickwander started");

    loop {
        if escape_pressed() || is_quit_requested() {
            app.should_quit = true;
        }
        if app.should_quit {
            break;
        }

        let pointer = Pointer::read();
        app.apply_pointer(&pointer);
        app.update(f64::from(get_frame_time()), pointer.position);

        clear_background(palette::BLACK);
        setup_virtual_canvas();
        draw_rectangle(0.0, 0.0, CANVAS_W, CANVAS_H, palette::WALLPAPER);

        draw_desktop(&app.desktop, app.companion.surface_title());
        let origin: Point = app.companion.state().position;
        let pose = app.pose(pointer.position);
        draw_stickman(origin, &pose);

        let now = app.companion.clock().now();
        if let Some(marker) = app.click_marker(now, CLICK_MARKER_SECS) {
            draw_click(&marker, now - marker.time, CLICK_MARKER_SECS);
        }

        next_frame().await;
    }

    // Dropping the app flushes memory.
    drop(app);
    log::info!("Stickwander stopped");
}
