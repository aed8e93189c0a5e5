//! CIE standard observers.
//!
//! Registry tables are scoped per observer: the same illuminant name maps
//! to slightly different chromaticities under the 1931 2 degree and the
//! 1964 10 degree colour matching functions.

/// CIE standard observer (colour matching function set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observer {
    /// CIE 1931 2 Degree Standard Observer.
    ///
    /// The default observer for colourspace definitions (sRGB, DCI-P3,
    /// ACES all specify their whitepoints against it).
    Cie1931TwoDegree,
    /// CIE 1964 10 Degree Standard Observer.
    Cie1964TenDegree,
}

impl Observer {
    /// Canonical registry key for this observer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cine_colorimetry::Observer;
    ///
    /// assert_eq!(
    ///     Observer::Cie1931TwoDegree.name(),
    ///     "CIE 1931 2 Degree Standard Observer"
    /// );
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cie1931TwoDegree => "CIE 1931 2 Degree Standard Observer",
            Self::Cie1964TenDegree => "CIE 1964 10 Degree Standard Observer",
        }
    }

    /// Resolves an observer from its canonical name.
    ///
    /// Returns `None` for unrecognized names.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CIE 1931 2 Degree Standard Observer" => Some(Self::Cie1931TwoDegree),
            "CIE 1964 10 Degree Standard Observer" => Some(Self::Cie1964TenDegree),
            _ => None,
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::Cie1931TwoDegree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observer_name_roundtrip() {
        for obs in [Observer::Cie1931TwoDegree, Observer::Cie1964TenDegree] {
            assert_eq!(Observer::from_name(obs.name()), Some(obs));
        }
    }

    #[test]
    fn test_observer_unknown_name() {
        assert_eq!(Observer::from_name("CIE 2006 Observer"), None);
    }
}
