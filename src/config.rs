//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`ORB_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use orbit_core::{AnimationLimits, AnimationState, Attenuation, Lighting, OrbitSettings, PointLight, SpotLight, Vec3};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Animation configuration
    #[serde(default)]
    pub animation: AnimationConfig,
    /// Lighting configuration
    #[serde(default)]
    pub lighting: LightingConfig,
    /// Asset locations
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`ORB_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // ORB_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("ORB_").split("__"));

        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the scene and camera cannot work with
    ///
    /// Bounds must be finite and in order: the scale range, the speed limit,
    /// the zoom range, the pitch limit and the clip planes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let animation = &self.animation;
        let camera = &self.camera;

        let bounds = [
            ("animation.min_scale", animation.min_scale),
            ("animation.max_scale", animation.max_scale),
            ("animation.max_speed", animation.max_speed),
            ("camera.fov", camera.fov),
            ("camera.min_fov", camera.min_fov),
            ("camera.pitch_limit", camera.pitch_limit),
            ("camera.near", camera.near),
            ("camera.far", camera.far),
        ];
        if let Some((name, value)) = bounds.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::invalid(format!("{} must be finite, got {}", name, value)));
        }

        if animation.min_scale <= 0.0 || animation.min_scale > animation.max_scale {
            return Err(ConfigError::invalid(format!(
                "animation scale range [{}, {}] must be positive and ordered",
                animation.min_scale, animation.max_scale
            )));
        }
        if animation.max_speed < 0.0 {
            return Err(ConfigError::invalid(format!(
                "animation.max_speed must not be negative, got {}",
                animation.max_speed
            )));
        }
        if camera.min_fov <= 0.0 || camera.min_fov > camera.fov || camera.fov >= 180.0 {
            return Err(ConfigError::invalid(format!(
                "camera fov range [{}, {}] must be ordered and within (0, 180)",
                camera.min_fov, camera.fov
            )));
        }
        if !(0.0..90.0).contains(&camera.pitch_limit) {
            return Err(ConfigError::invalid(format!(
                "camera.pitch_limit must be in [0, 90), got {}",
                camera.pitch_limit
            )));
        }
        if camera.near <= 0.0 || camera.far <= camera.near {
            return Err(ConfigError::invalid(format!(
                "camera clip planes near={} far={} must satisfy 0 < near < far",
                camera.near, camera.far
            )));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
    /// Capture the cursor as soon as the window opens
    pub capture_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Orbit Scene".to_string(),
            width: 800,
            height: 600,
            fullscreen: false,
            vsync: true,
            capture_cursor: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Starting position [x, y, z]
    pub start_position: [f32; 3],
    /// Starting yaw in degrees (-90 looks down -Z)
    pub yaw: f32,
    /// Starting pitch in degrees
    pub pitch: f32,
    /// Widest (and starting) field of view in degrees
    pub fov: f32,
    /// Narrowest field of view reachable by zooming
    pub min_fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Maximum pitch angle in degrees
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: [0.0, 0.0, 3.0],
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            min_fov: 1.0,
            near: 0.1,
            far: 100.0,
            pitch_limit: 89.0,
        }
    }
}

impl CameraConfig {
    pub fn start_position(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Movement speed (units per second)
    pub move_speed: f32,
    /// Mouse sensitivity (degrees per pixel)
    pub mouse_sensitivity: f32,
    /// Input smoothing half-life in seconds (lower = more responsive)
    pub smoothing_half_life: f32,
    /// Enable input smoothing by default
    pub smoothing_enabled: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            move_speed: 2.5,
            mouse_sensitivity: 0.1,
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }
}

/// Animation configuration
///
/// Speeds are given in degrees per second here and converted on use.
/// Adjustment rates and limits are in the units the keys change them in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Starting scale of the primary model
    pub initial_scale: f32,
    /// Starting orbit speed (degrees per second)
    pub orbit_speed_deg: f32,
    /// Starting spin speed (degrees per second)
    pub spin_speed_deg: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Scale change per second while U/J is held
    pub scale_rate: f32,
    /// Speed limit in radians per second (applies in both directions)
    pub max_speed: f32,
    /// Speed change per second while H/K or M/N is held (rad/s^2)
    pub speed_rate: f32,
    /// Axis the satellite orbits around
    pub orbit_axis: [f32; 3],
    /// Satellite distance from the origin
    pub orbit_radius: f32,
    /// Satellite scale
    pub satellite_scale: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let limits = AnimationLimits::default();
        let orbit = OrbitSettings::default();
        Self {
            initial_scale: 1.0,
            orbit_speed_deg: 50.0,
            spin_speed_deg: 30.0,
            min_scale: limits.min_scale,
            max_scale: limits.max_scale,
            scale_rate: limits.scale_rate,
            max_speed: limits.max_speed,
            speed_rate: limits.speed_rate,
            orbit_axis: [-1.0, 1.0, 0.0],
            orbit_radius: orbit.radius,
            satellite_scale: orbit.satellite_scale,
        }
    }
}

impl AnimationConfig {
    /// Starting animation state
    pub fn to_state(&self) -> AnimationState {
        AnimationState::new(
            self.initial_scale,
            self.orbit_speed_deg.to_radians(),
            self.spin_speed_deg.to_radians(),
        )
    }

    /// Adjustment limits
    pub fn to_limits(&self) -> AnimationLimits {
        AnimationLimits {
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            scale_rate: self.scale_rate,
            max_speed: self.max_speed,
            speed_rate: self.speed_rate,
        }
    }

    /// Orbit geometry
    pub fn to_orbit(&self) -> OrbitSettings {
        OrbitSettings {
            axis: Vec3::from_array(self.orbit_axis),
            radius: self.orbit_radius,
            satellite_scale: self.satellite_scale,
        }
    }
}

/// Lighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// Point light position [x, y, z]
    pub point_position: [f32; 3],
    pub point_ambient: f32,
    pub point_diffuse: f32,
    pub point_specular: f32,
    /// Point light attenuation [constant, linear, quadratic]
    pub point_attenuation: [f32; 3],
    /// Spotlight inner cone angle in degrees
    pub spot_inner_angle: f32,
    /// Spotlight outer cone angle in degrees
    pub spot_outer_angle: f32,
    pub spot_ambient: f32,
    pub spot_diffuse: f32,
    pub spot_specular: f32,
    /// Spotlight attenuation [constant, linear, quadratic]
    pub spot_attenuation: [f32; 3],
    /// Scale of the cube drawn at the point light
    pub marker_scale: f32,
    /// Color of the marker cube [r, g, b, a]
    pub marker_color: [f32; 4],
}

impl Default for LightingConfig {
    fn default() -> Self {
        let spot = SpotLight::default();
        let point = PointLight::default();
        Self {
            point_position: point.position.to_array(),
            point_ambient: point.ambient.x,
            point_diffuse: point.diffuse.x,
            point_specular: point.specular.x,
            point_attenuation: attenuation_array(&point.attenuation),
            spot_inner_angle: spot.inner_angle,
            spot_outer_angle: spot.outer_angle,
            spot_ambient: spot.ambient.x,
            spot_diffuse: spot.diffuse.x,
            spot_specular: spot.specular.x,
            spot_attenuation: attenuation_array(&spot.attenuation),
            marker_scale: 0.2,
            marker_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

impl LightingConfig {
    /// Build scene lights (the spotlight is placed at the camera each frame)
    pub fn to_lighting(&self) -> Lighting {
        Lighting {
            spot: SpotLight {
                inner_angle: self.spot_inner_angle,
                outer_angle: self.spot_outer_angle,
                ambient: Vec3::splat(self.spot_ambient),
                diffuse: Vec3::splat(self.spot_diffuse),
                specular: Vec3::splat(self.spot_specular),
                attenuation: attenuation_from(self.spot_attenuation),
                ..SpotLight::default()
            },
            point: PointLight {
                position: Vec3::from_array(self.point_position),
                ambient: Vec3::splat(self.point_ambient),
                diffuse: Vec3::splat(self.point_diffuse),
                specular: Vec3::splat(self.point_specular),
                attenuation: attenuation_from(self.point_attenuation),
            },
        }
    }
}

fn attenuation_array(a: &Attenuation) -> [f32; 3] {
    [a.constant, a.linear, a.quadratic]
}

fn attenuation_from(terms: [f32; 3]) -> Attenuation {
    Attenuation {
        constant: terms[0],
        linear: terms[1],
        quadratic: terms[2],
    }
}

/// Asset locations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// OBJ model drawn at the origin and as the satellite
    pub model_path: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model/model.obj"),
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Specular exponent for the model
    pub shininess: f32,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.05, 0.05, 0.05, 1.0],
            shininess: 32.0,
        }
    }
}

impl RenderingConfig {
    pub fn clear_color(&self) -> wgpu::Color {
        let bg = &self.background_color;
        wgpu::Color {
            r: bg[0] as f64,
            g: bg[1] as f64,
            b: bg[2] as f64,
            a: bg[3] as f64,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level used when RUST_LOG is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show camera position, scale and speeds in the window title
    pub title_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            title_stats: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(message: String) -> Self {
        ConfigError { message }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
