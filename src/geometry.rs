use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Ring thickness used when the caller does not pick one.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;

/// Size category of a progress ring. Each one maps to a fixed diameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RingSize {
    pub const ALL: [RingSize; 3] = [RingSize::Small, RingSize::Medium, RingSize::Large];

    /// Outer diameter in pixels.
    pub fn diameter(self) -> f64 {
        match self {
            RingSize::Small => 64.0,
            RingSize::Medium => 80.0,
            RingSize::Large => 96.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RingSize::Small => "small",
            RingSize::Medium => "medium",
            RingSize::Large => "large",
        }
    }
}

impl fmt::Display for RingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRingSizeError(String);

impl fmt::Display for ParseRingSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown ring size: {:?} (expected small, medium or large)", self.0)
    }
}

impl std::error::Error for ParseRingSizeError {}

impl FromStr for RingSize {
    type Err = ParseRingSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(RingSize::Small),
            "medium" => Ok(RingSize::Medium),
            "large" => Ok(RingSize::Large),
            other => Err(ParseRingSizeError(other.to_string())),
        }
    }
}

/// Inputs of a single ring render.
///
/// `value` is a percentage. Nothing here is validated: values outside
/// 0..=100 or a stroke wider than the ring give a degenerate drawing, not an
/// error. Use [`ProgressSpec::clamped`] to opt into sanitised inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSpec {
    pub value: f64,
    pub size: RingSize,
    pub show_value: bool,
    pub stroke_width: f64,
}

impl Default for ProgressSpec {
    fn default() -> Self {
        Self {
            value: 0.0,
            size: RingSize::default(),
            show_value: true,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ProgressSpec {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: RingSize) -> Self {
        self.size = size;
        self
    }

    pub fn show_value(mut self, show_value: bool) -> Self {
        self.show_value = show_value;
        self
    }

    pub fn stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Copy with `value` clamped to 0..=100 and `stroke_width` kept strictly
    /// inside (0, diameter). NaN inputs fall back to 0 and the default stroke.
    pub fn clamped(self) -> Self {
        let diameter = self.size.diameter();
        let value = if self.value.is_nan() {
            0.0
        } else {
            self.value.clamp(0.0, 100.0)
        };
        let stroke_width = if self.stroke_width.is_nan() {
            DEFAULT_STROKE_WIDTH
        } else {
            self.stroke_width
                .clamp(f64::MIN_POSITIVE, diameter - f64::EPSILON * diameter)
        };
        Self {
            value,
            stroke_width,
            ..self
        }
    }
}

/// Derived ring measurements, recomputed for every render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub diameter: f64,
    pub stroke_width: f64,
    pub radius: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    pub fn compute(spec: &ProgressSpec) -> Self {
        let diameter = spec.size.diameter();
        let radius = (diameter - spec.stroke_width) / 2.0;
        let circumference = 2.0 * PI * radius;
        let dash_offset = circumference - (spec.value / 100.0) * circumference;

        Self {
            diameter,
            stroke_width: spec.stroke_width,
            radius,
            circumference,
            dash_offset,
        }
    }

    /// Centre coordinate, identical on both axes.
    pub fn center(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Text shown inside the ring: the value rounded half-up, then `%`.
pub fn percent_label(value: f64) -> String {
    if value.is_nan() {
        return "NaN%".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity%" } else { "-Infinity%" }.to_string();
    }
    // .5 rounds towards +inf; `value - floor` is exact, `+ 0.0` folds -0 into 0
    let floor = value.floor();
    let rounded = (if value - floor >= 0.5 { floor + 1.0 } else { floor }) + 0.0;
    if rounded.abs() >= 1e21 {
        // browsers switch to exponent notation at 1e21
        return format!("{:e}%", rounded).replacen('e', "e+", 1);
    }
    format!("{}%", rounded)
}
