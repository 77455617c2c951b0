//! Desktop window viewer based on `embedded-graphics-simulator`.

use embedded_graphics::{image::Image, pixelcolor::Rgb888, prelude::*};
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};

use crate::{view::Viewer, Error, RawImage};

/// Shows images in a simulator window, blocking until the window is closed.
#[derive(Debug, Clone, Copy)]
pub struct SimulatorViewer {
    scale: u32,
}

impl SimulatorViewer {
    /// Creates a new viewer which zooms images by `scale`.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
        }
    }
}

impl Viewer for SimulatorViewer {
    fn show(&mut self, title: &str, image: &RawImage) -> Result<(), Error> {
        let mut display = SimulatorDisplay::<Rgb888>::new(image.size());
        Image::new(image, Point::zero())
            .draw(&mut display)
            .map_err(|never| match never {})?;

        let settings = OutputSettingsBuilder::new().scale(self.scale).build();
        let mut window = Window::new(title, &settings);
        window.show_static(&display);

        Ok(())
    }
}
