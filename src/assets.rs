//! Named asset cache
//!
//! Shader modules and textures are registered once at session init and
//! looked up by name, returning opaque handles the rest of the code
//! passes around without ever inspecting the contents. The cache is an
//! owned value with scoped lifetime - constructed during setup, dropped
//! with the session - and is injected wherever handles are needed.
//! Key to value only; nothing is ever evicted.
//!
//! Asset sources are embedded: WGSL ships via `include_str!` and the
//! sprite textures are generated as RGBA pixel data, since the primary
//! target is the browser where there is no filesystem to read from.

use std::collections::HashMap;

/// Opaque handle to a cached texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHandle(pub(crate) usize);

/// Opaque handle to a cached shader module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShaderHandle(pub(crate) usize);

/// CPU-side RGBA8 pixel data
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

struct TextureEntry {
    // The bind group is what draws consume; the texture is kept so the
    // entry owns its GPU memory for the cache's whole lifetime.
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// Shader/texture storage keyed by name
#[derive(Default)]
pub struct ResourceCache {
    shaders: Vec<wgpu::ShaderModule>,
    shader_names: HashMap<String, ShaderHandle>,
    textures: Vec<TextureEntry>,
    texture_names: HashMap<String, TextureHandle>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile and store a shader module. Loading an already-cached
    /// name returns the existing handle without recompiling.
    pub fn load_shader(
        &mut self,
        device: &wgpu::Device,
        name: &str,
        source: &str,
    ) -> ShaderHandle {
        if let Some(&handle) = self.shader_names.get(name) {
            return handle;
        }

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(name),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let handle = ShaderHandle(self.shaders.len());
        self.shaders.push(module);
        self.shader_names.insert(name.to_string(), handle);
        log::info!("Loaded shader '{}'", name);
        handle
    }

    /// Retrieve a stored shader module by name
    pub fn shader(&self, name: &str) -> Option<&wgpu::ShaderModule> {
        self.shader_names
            .get(name)
            .and_then(|handle| self.shaders.get(handle.0))
    }

    /// Upload pixel data and store the texture. Loading an
    /// already-cached name returns the existing handle.
    pub fn load_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        name: &str,
        data: &TextureData,
    ) -> TextureHandle {
        if let Some(&handle) = self.texture_names.get(name) {
            return handle;
        }

        let size = wgpu::Extent3d {
            width: data.width,
            height: data.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(name),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &data.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * data.width),
                rows_per_image: Some(data.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(name),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let handle = TextureHandle(self.textures.len());
        self.textures.push(TextureEntry {
            _texture: texture,
            bind_group,
        });
        self.texture_names.insert(name.to_string(), handle);
        log::info!("Loaded texture '{}' ({}x{})", name, data.width, data.height);
        handle
    }

    /// Retrieve a stored texture handle by name
    pub fn texture(&self, name: &str) -> Option<TextureHandle> {
        self.texture_names.get(name).copied()
    }

    /// Resolve a handle to its GPU bind group
    pub fn texture_bind_group(&self, handle: TextureHandle) -> Option<&wgpu::BindGroup> {
        self.textures.get(handle.0).map(|entry| &entry.bind_group)
    }
}

/// Court background: dark vertical gradient with a dashed center line
pub fn background_data() -> TextureData {
    const W: u32 = 64;
    const H: u32 = 48;
    let mut pixels = Vec::with_capacity((W * H * 4) as usize);
    for y in 0..H {
        let t = y as f32 / (H - 1) as f32;
        for x in 0..W {
            let on_center_line = x == W / 2 && (y / 3) % 2 == 0;
            if on_center_line {
                pixels.extend_from_slice(&[70, 78, 110, 255]);
            } else {
                let r = (8.0 + 12.0 * t) as u8;
                let g = (10.0 + 14.0 * t) as u8;
                let b = (26.0 + 30.0 * t) as u8;
                pixels.extend_from_slice(&[r, g, b, 255]);
            }
        }
    }
    TextureData {
        width: W,
        height: H,
        pixels,
    }
}

/// Paddle sprite: light slab with a darker one-pixel border
pub fn paddle_data() -> TextureData {
    const W: u32 = 8;
    const H: u32 = 32;
    let mut pixels = Vec::with_capacity((W * H * 4) as usize);
    for y in 0..H {
        for x in 0..W {
            let border = x == 0 || y == 0 || x == W - 1 || y == H - 1;
            if border {
                pixels.extend_from_slice(&[120, 128, 150, 255]);
            } else {
                pixels.extend_from_slice(&[225, 230, 240, 255]);
            }
        }
    }
    TextureData {
        width: W,
        height: H,
        pixels,
    }
}

/// Ball sprite: white disc with a soft antialiased rim
pub fn ball_data() -> TextureData {
    const SIZE: u32 = 32;
    let center = (SIZE - 1) as f32 / 2.0;
    let solid = center - 2.0;
    let mut pixels = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();
            // Fade alpha over the last two pixels of radius
            let alpha = ((center - dist) / (center - solid)).clamp(0.0, 1.0);
            pixels.extend_from_slice(&[255, 255, 255, (alpha * 255.0) as u8]);
        }
    }
    TextureData {
        width: SIZE,
        height: SIZE,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_textures_are_fully_populated() {
        for data in [background_data(), paddle_data(), ball_data()] {
            assert_eq!(data.pixels.len(), (data.width * data.height * 4) as usize);
        }
    }

    #[test]
    fn test_ball_sprite_is_opaque_center_transparent_corners() {
        let data = ball_data();
        let center_idx = ((16 * data.width + 16) * 4 + 3) as usize;
        assert_eq!(data.pixels[center_idx], 255);
        // Corner pixel alpha
        assert_eq!(data.pixels[3], 0);
    }
}
