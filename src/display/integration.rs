// Integration helpers for connecting PPU with display system
//
// This module provides utilities to convert PPU frame buffer data
// into the display system's frame buffer format.

use super::framebuffer::FrameBuffer;

/// Copy PPU frame buffer data into a display frame buffer
///
/// The PPU frame buffer contains palette indices (0-63) for each pixel.
/// This function copies those indices directly into the display frame buffer.
///
/// # Arguments
///
/// * `ppu_frame` - Slice of PPU frame data (palette indices, 256×240 = 61,440 bytes)
/// * `display_buffer` - Mutable reference to the display frame buffer
///
/// # Example
///
/// ```rust,no_run
/// use nesturia::{Emulator, FrameBuffer};
/// use nesturia::display::integration::copy_ppu_to_display;
///
/// let emulator = Emulator::new();
/// let mut display_buffer = FrameBuffer::new();
///
/// // Copy the PPU's current frame into the display buffer after a run_frame() call.
/// copy_ppu_to_display(emulator.framebuffer(), &mut display_buffer);
/// ```
pub fn copy_ppu_to_display(ppu_frame: &[u8], display_buffer: &mut FrameBuffer) {
    // Verify that the PPU frame has the correct size
    const EXPECTED_SIZE: usize = 256 * 240;
    assert_eq!(
        ppu_frame.len(),
        EXPECTED_SIZE,
        "PPU frame buffer must be exactly 256×240 pixels"
    );

    // Copy palette indices directly
    display_buffer.as_mut_slice().copy_from_slice(ppu_frame);
}
