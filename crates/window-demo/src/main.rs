// File: crates/window-demo/src/main.rs
// Summary: Minimal windowed demo that renders the chart pipeline to a window via
// RGBA blit (CPU) using winit + softbuffer. Exercises hover, tooltips, click
// events, responsive resize, and the coalescing redraw scheduler.
//
// Controls: move the mouse for tooltips, click points or legend rows for
// events, press any key to cycle chart kinds.

use std::num::NonZeroU32;
use std::time::Instant;

use lumen_core::theme;
use lumen_core::{Chart, ChartConfig, ChartKind, Series};
use lumen_render_skia::render_to_rgba8;
use winit::event::{ElementState, Event, MouseButton, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let theme_name = std::env::args().nth(1).unwrap_or_else(|| "default".to_string());

    let mut config = ChartConfig::default();
    config.title = Some("Lumen Chart".to_string());
    config.subtitle = Some("window demo".to_string());
    let mut chart = Chart::with_config(config).with_size(1024.0, 640.0);
    chart.set_theme(theme::find(&theme_name));
    chart.set_series(sample_series());

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Lumen Chart - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .expect("build window");

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    let mut size = window.inner_size();
    let mut cursor: Option<(f64, f64)> = None;
    let mut kind_idx = 0usize;
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Poll;
        match event {
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    chart.cancel_pending();
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    chart.resize(new_size.width as f32, new_size.height as f32);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    chart.on_pointer_move(position.x as f32, position.y as f32);
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    chart.on_pointer_leave();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left && state == ElementState::Pressed {
                        if let Some((x, y)) = cursor {
                            if let Some(event) = chart.on_click(x as f32, y as f32) {
                                println!("event: {event:?}");
                            }
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        kind_idx = (kind_idx + 1) % ChartKind::ALL.len();
                        chart.set_kind(ChartKind::ALL[kind_idx]);
                        println!("kind: {}", ChartKind::ALL[kind_idx]);
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let now = Instant::now();
                let dt = now - last_tick;
                last_tick = now;
                if chart.tick(dt) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                // Render to RGBA and convert to packed u32 for softbuffer
                match render_to_rgba8(&mut chart) {
                    Ok((rgba, _, _, _)) => {
                        let mut frame = surface.buffer_mut().expect("frame");
                        let max_px = frame.len().min(rgba.len() / 4);
                        for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                            let r = px[0] as u32;
                            let g = px[1] as u32;
                            let b = px[2] as u32;
                            let a = px[3] as u32;
                            frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                        }
                        if let Err(e) = frame.present() {
                            eprintln!("present error: {e:?}");
                        }
                    }
                    Err(e) => {
                        // surface not ready; the next scheduled redraw retries
                        eprintln!("render skipped: {e}");
                        chart.refresh();
                    }
                }
            }
            _ => {}
        }
    });
}

fn sample_series() -> Vec<Series> {
    vec![
        Series::from_values(
            "Throughput",
            &[("Mon", 120.0), ("Tue", 180.0), ("Wed", 140.0), ("Thu", 220.0), ("Fri", 260.0), ("Sat", 90.0), ("Sun", 70.0)],
        ),
        Series::from_values(
            "Errors",
            &[("Mon", 14.0), ("Tue", 9.0), ("Wed", 22.0), ("Thu", 12.0), ("Fri", 8.0), ("Sat", 5.0), ("Sun", 4.0)],
        ),
    ]
}
