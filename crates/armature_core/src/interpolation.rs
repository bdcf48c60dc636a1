use serde::{Deserialize, Serialize};

/// Interpolation scheme of an animation channel.
///
/// The set mirrors the `INTERPOLATION` semantic of Collada animation
/// sources. Only [`Linear`](Self::Linear) and [`Bezier`](Self::Bezier) can
/// be evaluated; channels tagged [`Undefined`](Self::Undefined) are dropped
/// when a clip is built, every other mode fails at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationMode {
    #[default]
    Undefined,
    Linear,
    Bezier,
    Step,
    Hermite,
    Cardinal,
    Bspline,
}

impl InterpolationMode {
    /// Parses a Collada interpolation token such as `LINEAR` or `BEZIER`.
    ///
    /// Unknown tokens map to [`Undefined`](Self::Undefined).
    #[must_use]
    pub fn from_collada(token: &str) -> Self {
        match token.trim() {
            "LINEAR" => Self::Linear,
            "BEZIER" => Self::Bezier,
            "STEP" => Self::Step,
            "HERMITE" => Self::Hermite,
            "CARDINAL" => Self::Cardinal,
            "BSPLINE" => Self::Bspline,
            _ => Self::Undefined,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::Linear | Self::Bezier)
    }
}

impl std::fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Undefined => "UNDEFINED",
            Self::Linear => "LINEAR",
            Self::Bezier => "BEZIER",
            Self::Step => "STEP",
            Self::Hermite => "HERMITE",
            Self::Cardinal => "CARDINAL",
            Self::Bspline => "BSPLINE",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collada_tokens() {
        assert_eq!(InterpolationMode::from_collada("LINEAR"), InterpolationMode::Linear);
        assert_eq!(InterpolationMode::from_collada(" BEZIER\n"), InterpolationMode::Bezier);
        assert_eq!(InterpolationMode::from_collada("STEP"), InterpolationMode::Step);
        assert_eq!(InterpolationMode::from_collada("linear"), InterpolationMode::Undefined);
    }

    #[test]
    fn only_linear_and_bezier_are_supported() {
        assert!(InterpolationMode::Linear.is_supported());
        assert!(InterpolationMode::Bezier.is_supported());
        assert!(!InterpolationMode::Step.is_supported());
        assert!(!InterpolationMode::Undefined.is_supported());
    }
}
