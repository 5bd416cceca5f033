use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;
use pixels::{Pixels, SurfaceTexture};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx};
use crate::raster::Frame;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,

    /// Logical framebuffer width in pixels.
    ///
    /// The window opens at this size; on resize the surface scales the
    /// fixed-size framebuffer to fit, so draw code never sees the resize.
    pub frame_width: u32,

    /// Logical framebuffer height in pixels.
    pub frame_height: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "horae".to_string(),
            frame_width: 900,
            frame_height: 450,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    surface: Pixels<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    app: A,

    entry: Option<WindowEntry>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            entry: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(
                f64::from(self.config.frame_width),
                f64::from(self.config.frame_height),
            ));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let (frame_width, frame_height) = (self.config.frame_width, self.config.frame_height);

        let entry = WindowEntryBuilder {
            clock: FrameClock::default(),
            window,
            surface_builder: |window| {
                let size = window.inner_size();
                let texture = SurfaceTexture::new(size.width.max(1), size.height.max(1), window);
                Pixels::new(frame_width, frame_height, texture)
                    .expect("pixel surface initialization failed for window")
            },
        }
        .build();

        self.entry = Some(entry);
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit();
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_ref() else {
            return;
        };

        // Apps that animate on a coarse schedule report a wake deadline and
        // the loop sleeps until it. Apps without one redraw continuously.
        let now = Instant::now();
        match self.app.next_wake(now) {
            Some(at) if at > now => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(at));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.entry = None;
                self.request_exit();
            }

            WindowEvent::Resized(new_size) => {
                let resized = entry.with_surface_mut(|surface| {
                    surface.resize_surface(new_size.width.max(1), new_size.height.max(1))
                });
                if let Err(e) = resized {
                    log::error!("surface resize failed: {e}");
                }
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                let resized = entry.with_surface_mut(|surface| {
                    surface.resize_surface(new_size.width.max(1), new_size.height.max(1))
                });
                if let Err(e) = resized {
                    log::error!("surface resize failed: {e}");
                }
                entry.with_window(|w| w.request_redraw());
            }

            WindowEvent::RedrawRequested => {
                // Track exit request from the callback without mutating
                // `self` inside the `ouroboros` closure.
                let mut app_control = AppControl::Continue;

                entry.with_mut(|fields| {
                    let ft = fields.clock.tick();

                    // Scope so the frame borrow ends before presenting.
                    {
                        let mut ctx = FrameCtx {
                            frame: Frame::new(
                                fields.surface.frame_mut(),
                                self.config.frame_width,
                                self.config.frame_height,
                            ),
                            time: ft,
                        };
                        app_control = self.app.on_frame(&mut ctx);
                    }

                    fields.window.pre_present_notify();
                    if let Err(e) = fields.surface.render() {
                        log::error!("surface present failed: {e}");
                    }
                });

                if app_control == AppControl::Exit {
                    self.request_exit();
                }
            }

            _ => {}
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }
}
