//! Parsed scene commands and the directives that introduce them.

use std::fmt;

use serde::Deserialize;

/// How irregular command strings are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Never fail. Unreadable operands take their defaults, unknown clauses
    /// are skipped and every irregularity is reported as a warning.
    #[default]
    Lenient,
    /// Report every irregularity as an error and produce no commands.
    Strict,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lenient => write!(f, "lenient"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// The directive letter opening a clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Point,
    Circle,
    Triangle,
    Fill,
}

const POINT_DEFAULTS: [f64; 2] = [0.0, 0.0];
// A failed read keeps the constructor default rather than writing 0, so a
// malformed radius still yields a unit circle.
const CIRCLE_DEFAULTS: [f64; 3] = [0.0, 0.0, 1.0];
const TRIANGLE_DEFAULTS: [f64; 6] = [0.0; 6];

impl Directive {
    /// Recognizes a directive letter, ignoring case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Self::Point),
            'C' => Some(Self::Circle),
            'T' => Some(Self::Triangle),
            'F' => Some(Self::Fill),
            _ => None,
        }
    }

    /// The upper-case letter of this directive.
    pub fn letter(self) -> char {
        match self {
            Self::Point => 'P',
            Self::Circle => 'C',
            Self::Triangle => 'T',
            Self::Fill => 'F',
        }
    }

    /// Number of operands the directive reads.
    pub fn arity(self) -> usize {
        self.defaults().len()
    }

    /// Values of operands that could not be read.
    ///
    /// Coordinates default to 0, a circle radius to 1.
    pub fn defaults(self) -> &'static [f64] {
        match self {
            Self::Point => &POINT_DEFAULTS,
            Self::Circle => &CIRCLE_DEFAULTS,
            Self::Triangle => &TRIANGLE_DEFAULTS,
            Self::Fill => &[],
        }
    }

    /// Name of the operand at `index`, used in diagnostics.
    pub fn operand_name(self, index: usize) -> &'static str {
        let names: &[&'static str] = match self {
            Self::Point => &["x", "y"],
            Self::Circle => &["cx", "cy", "r"],
            Self::Triangle => &["x1", "y1", "x2", "y2", "x3", "y3"],
            Self::Fill => &[],
        };
        names.get(index).copied().unwrap_or("operand")
    }

    /// Operand syntax shown in help messages.
    pub fn usage(self) -> &'static str {
        match self {
            Self::Point => "P x,y",
            Self::Circle => "C cx,cy,r",
            Self::Triangle => "T x1,y1,x2,y2,x3,y3",
            Self::Fill => "F",
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single instruction for the scene builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Create a point through the shape factory.
    Point { x: f64, y: f64 },
    /// Create a circle through the shape factory.
    Circle { cx: f64, cy: f64, r: f64 },
    /// Build a triangle and hold it as the pending triangle.
    Triangle { coords: [f64; 6] },
    /// Fill the pending triangle and register it.
    Fill,
}

impl Command {
    /// Builds the command of `directive` from its operands.
    ///
    /// Operands beyond those given take the directive defaults.
    pub fn from_operands(directive: Directive, operands: &[f64]) -> Self {
        let defaults = directive.defaults();
        let operand = |i: usize| operands.get(i).copied().unwrap_or(defaults[i]);

        match directive {
            Directive::Point => Self::Point {
                x: operand(0),
                y: operand(1),
            },
            Directive::Circle => Self::Circle {
                cx: operand(0),
                cy: operand(1),
                r: operand(2),
            },
            Directive::Triangle => Self::Triangle {
                coords: std::array::from_fn(operand),
            },
            Directive::Fill => Self::Fill,
        }
    }

    /// The directive this command was parsed from.
    pub fn directive(&self) -> Directive {
        match self {
            Self::Point { .. } => Directive::Point,
            Self::Circle { .. } => Directive::Circle,
            Self::Triangle { .. } => Directive::Triangle,
            Self::Fill => Directive::Fill,
        }
    }
}
