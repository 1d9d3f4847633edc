use crate::chip8_vm::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// The 64x32 monochrome screen. Pixels only ever change by XOR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: [bool; SCREEN_WIDTH * SCREEN_HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self {
            pixels: [false; SCREEN_WIDTH * SCREEN_HEIGHT],
        }
    }
}

impl Framebuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles the pixel at `(x, y)` when `should_set` is true.
    ///
    /// Returns true only when a lit pixel was turned off. Coordinates outside
    /// the screen are ignored rather than wrapped.
    pub fn flip_pixel(&mut self, x: usize, y: usize, should_set: bool) -> bool {
        if !should_set || x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }

        let pixel = &mut self.pixels[x + y * SCREEN_WIDTH];
        let collided = *pixel;
        *pixel = !*pixel;
        collided
    }

    pub fn clear(&mut self) {
        self.pixels = [false; SCREEN_WIDTH * SCREEN_HEIGHT];
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < SCREEN_WIDTH && y < SCREEN_HEIGHT && self.pixels[x + y * SCREEN_WIDTH]
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    /// Iterates over the coordinates of every lit pixel, row by row.
    pub fn lit_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(|(index, _)| (index % SCREEN_WIDTH, index / SCREEN_WIDTH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_turns_pixel_on_then_off_with_collision() {
        let mut fb = Framebuffer::new();

        assert!(!fb.flip_pixel(3, 4, true));
        assert!(fb.pixel(3, 4));

        assert!(fb.flip_pixel(3, 4, true));
        assert!(!fb.pixel(3, 4));
    }

    #[test]
    fn unset_bit_leaves_pixel_alone() {
        let mut fb = Framebuffer::new();
        fb.flip_pixel(0, 0, true);

        assert!(!fb.flip_pixel(0, 0, false));
        assert!(fb.pixel(0, 0));
    }

    #[test]
    fn out_of_bounds_flip_is_ignored() {
        let mut fb = Framebuffer::new();

        assert!(!fb.flip_pixel(SCREEN_WIDTH, 0, true));
        assert!(!fb.flip_pixel(0, SCREEN_HEIGHT, true));
        assert_eq!(fb.lit_pixels().count(), 0);
    }

    #[test]
    fn clear_unsets_everything() {
        let mut fb = Framebuffer::new();
        fb.flip_pixel(63, 31, true);
        fb.flip_pixel(10, 10, true);

        fb.clear();

        assert!(fb.pixels().iter().all(|lit| !lit));
    }
}
