//! # Demo Configuration
//!
//! All tunables of the board scene and the hex grid demo in one place. The
//! defaults reproduce the constants the scenes were designed around; every
//! field can be overridden from a `.toml` or `.ron` file, and missing fields
//! fall back to their defaults.

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};
use crate::foundation::math::{constants, Vec2};

/// # Camera Configuration
///
/// Overview framing, keyboard/pointer input tuning and the focus
/// interpolation policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye height above the ground plane in overview mode
    pub height: f32,
    /// Tilt of the overview camera in radians (pi/4 looks down at 45 degrees)
    pub angle: f32,
    /// Keyboard pan speed in world units per second
    pub keyboard_speed: f32,
    /// Maximum orbit radius; also scales pointer drag panning
    pub max_height: f32,
    /// Minimum orbit radius
    pub min_radius: f32,
    /// Mouse wheel units per world unit of zoom
    pub wheel_precision: f32,
    /// Fraction of the orbit offsets kept from one frame to the next
    pub inertia: f32,
    /// Orbit offset added per frame and per held key in rotate mode (radians)
    pub rotate_step: f32,
    /// Fraction of the remaining distance covered per frame during a focus move
    pub lerp_factor: f32,
    /// Per-axis distance below which a focus move counts as settled
    pub settle_epsilon: f32,
    /// Multiplier applied to pointer drag panning
    pub drag_speed: f32,
    /// Horizontal distance between eye and target when focused on a piece
    pub focus_radius: f32,
    /// Eye height when focused on a piece
    pub focus_height: f32,
    /// Upper limit for the vertical orbit angle
    pub upper_beta_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 50.0,
            angle: constants::QUARTER_PI,
            keyboard_speed: 10.0,
            max_height: 200.0,
            min_radius: 5.0,
            wheel_precision: 9.0,
            inertia: 0.9,
            rotate_step: 3.0 / 1000.0,
            lerp_factor: 0.05,
            settle_epsilon: 0.01,
            drag_speed: 0.2,
            focus_radius: 10.0,
            focus_height: 5.0,
            upper_beta_limit: constants::HALF_PI,
        }
    }
}

impl CameraConfig {
    /// Validate the camera settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height <= 0.0 || self.max_height <= 0.0 {
            return Err(ConfigError::Invalid("camera heights must be positive".to_string()));
        }
        if self.angle <= 0.0 || self.angle >= constants::HALF_PI {
            return Err(ConfigError::Invalid(format!(
                "camera angle must lie in (0, pi/2), got {}",
                self.angle
            )));
        }
        if self.lerp_factor <= 0.0 || self.lerp_factor > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "lerp factor must lie in (0, 1], got {}",
                self.lerp_factor
            )));
        }
        if self.settle_epsilon <= 0.0 {
            return Err(ConfigError::Invalid("settle epsilon must be positive".to_string()));
        }
        if !(0.0..1.0).contains(&self.inertia) {
            return Err(ConfigError::Invalid(format!(
                "inertia must lie in [0, 1), got {}",
                self.inertia
            )));
        }
        if self.min_radius <= 0.0 || self.min_radius > self.max_height {
            return Err(ConfigError::Invalid(
                "min radius must be positive and not exceed max height".to_string(),
            ));
        }
        if self.wheel_precision <= 0.0 {
            return Err(ConfigError::Invalid("wheel precision must be positive".to_string()));
        }
        Ok(())
    }
}

/// # Board Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Edge length of one square in world units
    pub square_size: f32,
    /// Number of squares along each side
    pub squares_per_side: u32,
    /// Probability that a square receives a piece
    pub piece_chance: f64,
    /// Height of a piece's center above the board
    pub piece_height: f32,
    /// Fixed RNG seed for reproducible layouts
    pub seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            square_size: 5.0,
            squares_per_side: 8,
            piece_chance: 0.2,
            piece_height: 1.5,
            seed: None,
        }
    }
}

impl BoardConfig {
    /// World-space coordinate of the board center along x and z
    pub fn center(&self) -> f32 {
        self.square_size * ((self.squares_per_side as f32 - 1.0) / 2.0)
    }

    /// Validate the board settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_size <= 0.0 {
            return Err(ConfigError::Invalid("square size must be positive".to_string()));
        }
        if self.squares_per_side == 0 {
            return Err(ConfigError::Invalid("board needs at least one square".to_string()));
        }
        if !(0.0..=1.0).contains(&self.piece_chance) {
            return Err(ConfigError::Invalid(format!(
                "piece chance must lie in [0, 1], got {}",
                self.piece_chance
            )));
        }
        Ok(())
    }
}

/// # Missile Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissileConfig {
    /// Keyframe rate of the flight table
    pub fps: f32,
    /// Number of samples along the arc
    pub samples: usize,
    /// Apex height of the arc above the straight line
    pub peak_height: f32,
    /// Lower bound of the distance factor
    pub min_speed: f32,
    /// Distance that maps to a distance factor of 1.0
    pub speed_distance: f32,
    /// Multiplier turning the distance factor into a playback speed ratio
    pub speed_scale: f32,
}

impl Default for MissileConfig {
    fn default() -> Self {
        Self {
            fps: 24.0,
            samples: 24,
            peak_height: 20.0,
            min_speed: 0.15,
            speed_distance: 200.0,
            speed_scale: 10.0,
        }
    }
}

impl MissileConfig {
    /// Validate the missile settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps <= 0.0 || self.speed_distance <= 0.0 {
            return Err(ConfigError::Invalid(
                "missile fps and speed distance must be positive".to_string(),
            ));
        }
        if self.samples < 2 {
            return Err(ConfigError::Invalid("missile needs at least two samples".to_string()));
        }
        if self.min_speed <= 0.0 || self.speed_scale <= 0.0 {
            return Err(ConfigError::Invalid("missile speed must be positive".to_string()));
        }
        Ok(())
    }
}

/// # Explosion Configuration
///
/// The explosion plays three stages on two objects (cloud and stem): a rise
/// that also grows both objects, a spin, and a slow final spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplosionConfig {
    /// Keyframe rate of every explosion table
    pub fps: f32,
    /// Samples per table
    pub samples: usize,
    /// Playback speed of the rise stage
    pub rise_speed: f32,
    /// Playback speed of the spin stage
    pub spin_speed: f32,
    /// Playback speed of the final spin stage
    pub fade_speed: f32,
    /// Scale both objects start from
    pub start_scale: f32,
    /// How far the cloud climbs above the impact point
    pub cloud_rise: f32,
    /// Final cloud scale
    pub cloud_max_scale: f32,
    /// How far below the impact point the stem starts
    pub stem_depth: f32,
    /// Final stem scale
    pub stem_max_scale: f32,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            fps: 24.0,
            samples: 24,
            rise_speed: 0.5,
            spin_speed: 0.25,
            fade_speed: 0.05,
            start_scale: 0.1,
            cloud_rise: 10.0,
            cloud_max_scale: 10.0,
            stem_depth: 5.0,
            stem_max_scale: 0.5,
        }
    }
}

impl ExplosionConfig {
    /// Validate the explosion settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fps <= 0.0 || self.samples < 2 {
            return Err(ConfigError::Invalid(
                "explosion tables need a positive rate and two samples".to_string(),
            ));
        }
        if self.rise_speed <= 0.0 || self.spin_speed <= 0.0 || self.fade_speed <= 0.0 {
            return Err(ConfigError::Invalid("explosion stage speeds must be positive".to_string()));
        }
        Ok(())
    }
}

/// # Hex Grid Configuration
///
/// Layout of the hex mask texture: where hex (0, 0) sits in UV space and how
/// far apart neighbouring hexes are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HexGridConfig {
    /// Hexes per row
    pub columns: usize,
    /// Number of rows
    pub rows: usize,
    /// UV offset of hex (0, 0)
    pub origin: Vec2,
    /// UV distance between columns
    pub column_step: f32,
    /// UV distance between rows
    pub row_step: f32,
    /// Vertical shift applied to every other hex
    pub stagger: f32,
    /// U scale of the mask texture, negative to compensate for the ground UV layout
    pub mask_u_scale: f32,
}

impl Default for HexGridConfig {
    fn default() -> Self {
        Self {
            columns: 13,
            rows: 7,
            origin: Vec2::new(-0.07, 0.04),
            column_step: 0.0698,
            row_step: 0.1208,
            stagger: 0.04,
            mask_u_scale: -1.0,
        }
    }
}

impl HexGridConfig {
    /// Validate the hex grid settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(ConfigError::Invalid("hex grid needs at least one hex".to_string()));
        }
        Ok(())
    }
}

/// # Logging Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter passed to `env_logger` when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// # Complete Demo Configuration
///
/// Top-level configuration for both demo scenes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Camera framing and input
    pub camera: CameraConfig,
    /// Board layout
    pub board: BoardConfig,
    /// Missile flight
    pub missile: MissileConfig,
    /// Explosion stages
    pub explosion: ExplosionConfig,
    /// Hex grid demo
    pub hex_grid: HexGridConfig,
    /// Logging
    pub logging: LoggingConfig,
}

impl DemoConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.board.validate()?;
        self.missile.validate()?;
        self.explosion.validate()?;
        self.hex_grid.validate()?;
        Ok(())
    }

    /// Load from `path` when given, otherwise use the defaults; the result is validated
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path);
                Self::load_from_file(path)?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config for DemoConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(DemoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_board_center() {
        let board = BoardConfig::default();
        assert_eq!(board.center(), 17.5);
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let text = "[camera]\nheight = 80.0\n\n[board]\nseed = 7\n";
        let config = DemoConfig::parse("demo.toml", text).unwrap();

        assert_eq!(config.camera.height, 80.0);
        assert_eq!(config.camera.keyboard_speed, 10.0);
        assert_eq!(config.board.seed, Some(7));
        assert_eq!(config.missile, MissileConfig::default());
    }

    #[test]
    fn test_ron_parse() {
        let text = "(missile: (peak_height: 12.0), logging: (level: \"debug\"))";
        let config = DemoConfig::parse("demo.ron", text).unwrap();

        assert_eq!(config.missile.peak_height, 12.0);
        assert_eq!(config.missile.samples, 24);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_render_then_parse_toml() {
        let mut config = DemoConfig::default();
        config.hex_grid.columns = 5;
        let text = config.render("demo.toml").unwrap();
        let parsed = DemoConfig::parse("demo.toml", &text).unwrap();
        assert_eq!(parsed.hex_grid.columns, 5);
    }

    #[test]
    fn test_unsupported_format() {
        let result = DemoConfig::parse("demo.json", "{}");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_invalid_lerp_factor_rejected() {
        let mut config = DemoConfig::default();
        config.camera.lerp_factor = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DemoConfig::load_from_file("definitely/not/here.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
