//! SDL2 window/canvas/texture presenter, driving a streaming texture sized
//! to the 32-bit BGRA-pad framebuffer the video decoder produces.

use invaders_core::video::{HEIGHT, WIDTH};
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::Sdl;

pub struct Video {
    canvas: Canvas<Window>,
    texture_creator: TextureCreator<WindowContext>,
}

impl Video {
    pub fn new(sdl_context: &Sdl, scale: u32) -> Result<Self, String> {
        let video_subsystem = sdl_context.video()?;
        let window = video_subsystem
            .window(
                "Space Invaders",
                WIDTH as u32 * scale,
                HEIGHT as u32 * scale,
            )
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| e.to_string())?;
        let texture_creator = canvas.texture_creator();

        Ok(Self {
            canvas,
            texture_creator,
        })
    }

    fn texture(&self) -> Result<Texture<'_>, String> {
        self.texture_creator
            .create_texture_streaming(PixelFormatEnum::BGRA32, WIDTH as u32, HEIGHT as u32)
            .map_err(|e| e.to_string())
    }

    pub fn present(&mut self, framebuffer: &[u8]) -> Result<(), String> {
        let mut texture = self.texture()?;
        texture
            .update(None, framebuffer, WIDTH * invaders_core::video::BYTES_PER_PIXEL)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
