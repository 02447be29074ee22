// File: crates/plots-core/src/viewer.rs
// Summary: Display seam for committed figures: PNG preview by default, native window with `window`.

use std::path::PathBuf;

use crate::error::Result;
use crate::figure::{Figure, FigureFormat};

/// Shows a finished figure to the user.
pub trait Viewer {
    fn show(&self, title: &str, figure: &Figure) -> Result<()>;
}

/// Writes `<dir>/<title>_preview.png` (overwriting) and logs where it went.
#[derive(Clone, Debug)]
pub struct PreviewViewer {
    pub dir: PathBuf,
}

impl Default for PreviewViewer {
    fn default() -> Self {
        Self { dir: std::env::temp_dir() }
    }
}

impl PreviewViewer {
    pub fn path_for(&self, title: &str) -> PathBuf {
        self.dir.join(format!("{title}_preview.png"))
    }
}

impl Viewer for PreviewViewer {
    fn show(&self, title: &str, figure: &Figure) -> Result<()> {
        let path = self.path_for(title);
        figure.save(&path, FigureFormat::Png, false)?;
        tracing::info!(path = %path.display(), "preview of {title} written");
        Ok(())
    }
}

/// Viewer used by new graphs: a native window when built with `window`, else a PNG preview.
pub fn default_viewer() -> Box<dyn Viewer> {
    #[cfg(feature = "window")]
    {
        Box::new(window::WindowViewer)
    }
    #[cfg(not(feature = "window"))]
    {
        Box::new(PreviewViewer::default())
    }
}

#[cfg(feature = "window")]
pub use window::WindowViewer;

#[cfg(feature = "window")]
mod window {
    use std::cell::RefCell;
    use std::num::NonZeroU32;

    use winit::dpi::PhysicalSize;
    use winit::event::{Event, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::platform::run_return::EventLoopExtRunReturn;
    use winit::window::WindowBuilder;

    use super::Viewer;
    use crate::error::{PlotError, Result};
    use crate::figure::Figure;

    // winit allows a single event loop per process; reuse it across shows.
    thread_local! {
        static EVENT_LOOP: RefCell<Option<EventLoop<()>>> = RefCell::new(None);
    }

    /// Blocking window that blits the raster render and redraws on resize.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct WindowViewer;

    impl Viewer for WindowViewer {
        fn show(&self, title: &str, figure: &Figure) -> Result<()> {
            EVENT_LOOP.with(|cell| {
                let mut slot = cell.borrow_mut();
                let event_loop = slot.get_or_insert_with(EventLoop::new);
                run_window(event_loop, title, figure)
            })
        }
    }

    fn display_err(e: impl std::fmt::Display) -> PlotError {
        PlotError::Display(e.to_string())
    }

    fn run_window(event_loop: &mut EventLoop<()>, title: &str, figure: &Figure) -> Result<()> {
        let (w, h) = figure.pixel_size();
        let window = WindowBuilder::new()
            .with_title(title)
            .with_inner_size(PhysicalSize::new(w as u32, h as u32))
            .build(&*event_loop)
            .map_err(display_err)?;

        let context = unsafe { softbuffer::Context::new(&window) }.map_err(display_err)?;
        let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(display_err)?;

        let mut size = window.inner_size();
        let mut failure: Option<PlotError> = None;
        tracing::debug!(title, width = w, height = h, "showing figure window");

        event_loop.run_return(|event, _, cf| {
            *cf = ControlFlow::Wait;
            match event {
                Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                    WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                    WindowEvent::Resized(new_size) => {
                        size = new_size;
                        window.request_redraw();
                    }
                    _ => {}
                },
                Event::RedrawRequested(id) if id == window.id() => {
                    if let Err(e) = present(&mut surface, figure, size) {
                        failure = Some(e);
                        *cf = ControlFlow::Exit;
                    }
                }
                _ => {}
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn present(surface: &mut softbuffer::Surface, figure: &Figure, size: PhysicalSize<u32>) -> Result<()> {
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };
        surface.resize(w, h).map_err(display_err)?;
        let (rgba, _, _, _) = figure.render_to_rgba8(w.get() as i32, h.get() as i32)?;

        let mut frame = surface.buffer_mut().map_err(display_err)?;
        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
            // 0RGB
            *dst = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
        }
        frame.present().map_err(display_err)
    }
}
