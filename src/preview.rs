//! Interactive preview window (feature `simulator`).
//!
//! Shows one widget at a time in an SDL window through
//! `embedded-graphics-simulator`, using the same four-button model the
//! simulator's keyboard mapping suggests plus two extras:
//!
//! | Key | Dial page        | Grid page        |
//! |-----|------------------|------------------|
//! | `A` | level up         | count up         |
//! | `B` | level down       | count down       |
//! | `Y` | switch page      | switch page      |
//! | `R` | reset icons      | reset icons      |
//! | `S` | save PNG         | save PNG         |
//!
//! The window is redrawn only when the visible widget repainted or the page
//! changed. Saves run in the background; finished exports are reaped each frame.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use tracing::{debug, info};

use crate::canvas::Canvas;
use crate::export::{ExportHandle, ExportService};
use crate::pages::Page;
use crate::render::{DialWidget, GridWidget};

/// Target frame time (~50 FPS). The loop sleeps if a frame completes early.
const FRAME_TIME: Duration = Duration::from_millis(20);

/// Display large enough for either widget.
fn display_size(
    a: &Canvas,
    b: &Canvas,
) -> Size {
    Size::new(a.width().max(b.width()), a.height().max(b.height()))
}

/// Run the preview until the window is closed.
pub fn run_preview(
    mut dial: DialWidget,
    mut grid: GridWidget,
    exporter: &ExportService,
) {
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(display_size(dial.canvas(), grid.canvas()));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Vintage Widgets", &output_settings);

    display.clear(Rgb888::BLACK).ok();
    window.update(&display);

    let mut page = Page::default();
    let mut page_just_switched = true;
    let mut pending: Vec<ExportHandle> = Vec::new();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    for handle in pending.drain(..) {
                        handle.wait();
                    }
                    return;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat so holding a key steps once
                    if repeat {
                        continue;
                    }
                    match keycode {
                        Keycode::Y => {
                            page = page.toggle();
                            page_just_switched = true;
                            debug!(page = page.name(), "page switched");
                        }
                        Keycode::A => {
                            match page {
                                Page::Dial => dial.level_up(),
                                Page::Grid => {
                                    grid.increment();
                                }
                            }
                            debug!(page = page.name(), "{} up", page.stepped());
                        }
                        Keycode::B => {
                            match page {
                                Page::Dial => dial.level_down(),
                                Page::Grid => {
                                    grid.decrement();
                                }
                            }
                            debug!(page = page.name(), "{} down", page.stepped());
                        }
                        Keycode::R => dial.reset_icons(),
                        Keycode::S => {
                            info!(page = page.name(), "saving");
                            pending.push(match page {
                                Page::Dial => dial.save(exporter),
                                Page::Grid => grid.save(exporter),
                            });
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        pending.retain(|handle| !handle.is_finished());

        let repainted = match page {
            Page::Dial => dial.frame(),
            Page::Grid => grid.frame(),
        };
        if repainted || page_just_switched {
            let canvas = match page {
                Page::Dial => dial.canvas(),
                Page::Grid => grid.canvas(),
            };
            display.clear(Rgb888::BLACK).ok();
            display.draw_iter(canvas.iter_pixels()).ok();
            page_just_switched = false;
        }
        window.update(&display);

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}
