//! Showing decoded images.

use crate::{Error, RawImage};

/// Something that can put a [`RawImage`] on screen.
///
/// `show` returns once the user is done looking at the image.
pub trait Viewer {
    /// Shows `image` in a window titled `title`.
    fn show(&mut self, title: &str, image: &RawImage) -> Result<(), Error>;
}

/// Shows `image` as stored, then with its rows in reverse order.
///
/// Raw sensor dumps are often stored bottom-up, so both orientations are shown.
pub fn show_both<V: Viewer + ?Sized>(
    viewer: &mut V,
    title: &str,
    image: &RawImage,
) -> Result<(), Error> {
    log::info!("showing {title}");
    viewer.show(title, image)?;

    log::info!("showing {title} flipped");
    viewer.show(&format!("{title} (flipped)"), &image.flipped())
}
