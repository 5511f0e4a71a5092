//! Driver configuration types and builder

pub use crate::error::{BuilderError, MAX_DIMENSION};

/// Default screen width of the reference board
pub const DEFAULT_WIDTH: u16 = 800;
/// Default screen height of the reference board
pub const DEFAULT_HEIGHT: u16 = 480;

/// Screen dimensions
///
/// The driver only clips against negative coordinates; the dimensions are
/// used by the demo driver and by the embedded-graphics integration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Dimensions {
    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if either axis is zero or
    /// larger than [`MAX_DIMENSION`].
    pub fn new(width: u16, height: u16) -> Result<Self, BuilderError> {
        if width == 0 || width > MAX_DIMENSION || height == 0 || height > MAX_DIMENSION {
            return Err(BuilderError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether a point lies on screen
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// How arbitrary lines are rasterized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Delegate to the accelerator's `DrawLine` command
    #[default]
    Hardware,
    /// Rasterize in software and write one pixel at a time
    ///
    /// For accelerator builds without a working `DrawLine` command.
    Software,
}

/// Driver configuration
///
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Screen dimensions
    pub dimensions: Dimensions,
    /// Line rasterization strategy
    pub line_mode: LineMode,
}

/// Builder for constructing driver configuration
///
/// # Example
///
/// ```
/// use graphics_accel::{Builder, Dimensions, LineMode};
///
/// let dims = match Dimensions::new(640, 480) {
///     Ok(dims) => dims,
///     Err(_) => return,
/// };
/// let config = Builder::new()
///     .dimensions(dims)
///     .line_mode(LineMode::Software)
///     .build();
/// assert_eq!(config.dimensions.width, 640);
/// ```
#[must_use]
#[derive(Default)]
pub struct Builder {
    dimensions: Dimensions,
    line_mode: LineMode,
}

impl Builder {
    /// Create a new Builder with default values (800x480, hardware lines)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set screen dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set the line rasterization strategy
    pub fn line_mode(mut self, mode: LineMode) -> Self {
        self.line_mode = mode;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        log::debug!(
            "graphics config: {}x{}, {:?} lines",
            self.dimensions.width,
            self.dimensions.height,
            self.line_mode
        );
        Config {
            dimensions: self.dimensions,
            line_mode: self.line_mode,
        }
    }
}
