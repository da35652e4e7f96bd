//! GPU textures: model maps, solid fallbacks and the depth buffer

use std::path::Path;

use image::RgbaImage;
use orbit_core::AssetError;

/// Depth buffer format shared by both pipelines
pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// A texture with its default view
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub size: wgpu::Extent3d,
}

impl Texture {
    /// Upload an RGBA image
    ///
    /// Color maps should pass `srgb = true` so sampling returns linear values;
    /// data maps (specular) pass `false`.
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        srgb: bool,
        label: &str,
    ) -> Self {
        let (width, height) = image.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };
        let format = if srgb {
            wgpu::TextureFormat::Rgba8UnormSrgb
        } else {
            wgpu::TextureFormat::Rgba8Unorm
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
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
            image.as_raw(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view, size }
    }

    /// Load an image file, flipped vertically so row 0 is the bottom
    /// (OBJ texture coordinates put v = 0 at the bottom of the image)
    pub fn from_path(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        path: &Path,
        srgb: bool,
    ) -> Result<Self, AssetError> {
        let image = load_flipped(path)?;
        log::info!(
            "Loaded texture {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(device, queue, &image, srgb, &path.display().to_string()))
    }

    /// A 1x1 texture of a single color
    pub fn solid(device: &wgpu::Device, queue: &wgpu::Queue, rgba: [u8; 4], label: &str) -> Self {
        let image = RgbaImage::from_pixel(1, 1, image::Rgba(rgba));
        Self::from_image(device, queue, &image, false, label)
    }

    /// Depth buffer matching the surface size
    pub fn depth(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let size = wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Depth Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view, size }
    }

    /// Check if this texture matches the given size
    pub fn matches_size(&self, width: u32, height: u32) -> bool {
        self.size.width == width.max(1) && self.size.height == height.max(1)
    }
}

/// Decode an image file into RGBA8, flipped vertically
pub fn load_flipped(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::NotFound(path.display().to_string()));
    }
    let image = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(err) => AssetError::Io(err),
        other => AssetError::Image(format!("{}: {}", path.display(), other)),
    })?;
    Ok(image.flipv().to_rgba8())
}

/// Linear-filtered repeating sampler used for model maps
pub fn create_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("Model Sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    })
}
