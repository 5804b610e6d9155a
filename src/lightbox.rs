// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine for the gallery overlay.
//!
//! The `Lightbox` owns the ordered sequence of image locators, the current
//! cursor position, and the overlay visibility. It is instantiated once by the
//! application and mutated only through its own methods, so the invariant
//! "while open, the cursor always indexes a present image" is enforced in a
//! single place.

/// Whether the overlay is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Open,
    #[default]
    Closed,
}

/// Navigation direction for [`Lightbox::change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Step towards the previous image (wraps to the last).
    Back,
    /// Step towards the next image (wraps to the first).
    Forward,
}

/// Gallery overlay state: image sequence, cursor, and visibility.
///
/// All operations are total. Requests that cannot be satisfied (an index with
/// no present element) leave every field unchanged and report failure through
/// the return value; the caller decides whether to record a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lightbox {
    images: Vec<String>,
    cursor: usize,
    visibility: Visibility,
}

impl Lightbox {
    /// Creates an empty, closed lightbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the image sequence and resets the cursor to the first image.
    ///
    /// Visibility is left unchanged, with one exception: if the overlay is
    /// open and the new sequence is empty, it closes, because an open overlay
    /// must always display a present image.
    pub fn init(&mut self, images: Vec<String>) {
        self.images = images;
        self.cursor = 0;
        if self.images.is_empty() {
            self.visibility = Visibility::Closed;
        }
    }

    /// Opens the overlay at `index`.
    ///
    /// Returns the locator now on display, or `None` if `index` does not
    /// refer to a present image (out of bounds, or the sequence is empty).
    /// On failure the cursor and visibility are left unchanged.
    pub fn open(&mut self, index: usize) -> Option<&str> {
        if index >= self.images.len() {
            return None;
        }
        self.cursor = index;
        self.visibility = Visibility::Open;
        Some(self.images[self.cursor].as_str())
    }

    /// Closes the overlay. Idempotent; the cursor is retained.
    pub fn close(&mut self) {
        self.visibility = Visibility::Closed;
    }

    /// Advances the cursor one step in `direction`, wrapping at both ends.
    ///
    /// Returns the locator now on display, or `None` if the sequence is
    /// empty (in which case nothing changes).
    pub fn change(&mut self, direction: Direction) -> Option<&str> {
        let len = self.images.len();
        if len == 0 {
            return None;
        }
        self.cursor = match direction {
            Direction::Forward => (self.cursor + 1) % len,
            Direction::Back => self.cursor.checked_sub(1).unwrap_or(len - 1),
        };
        Some(self.images[self.cursor].as_str())
    }

    /// Returns the current cursor position.
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Returns the locator under the cursor, if the sequence is non-empty.
    pub fn current_locator(&self) -> Option<&str> {
        self.images.get(self.cursor).map(String::as_str)
    }

    /// Returns the full image sequence.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Returns whether the overlay is currently presented.
    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    /// Returns the number of images in the sequence.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
