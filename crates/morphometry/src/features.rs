//! Feature keys and their static metadata.
//!
//! The analyzers write doubles under these keys; the tables below carry the
//! labeling the persistence/reporting layer needs (display names, physical
//! dimension, integer-valued flag). Nothing here is recomputed at analysis
//! time.

/// Physical dimension tag of a feature value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Length,
    Area,
    Volume,
    Angle,
    None,
}

/// Static description of one feature key.
#[derive(Clone, Copy, Debug)]
pub struct FeatureInfo {
    pub key: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub dimension: Dimension,
    pub is_int: bool,
}

// ── Shape descriptors ──────────────────────────────────────────────────────

pub const AREA: &str = "AREA";
pub const PERIMETER: &str = "PERIMETER";
pub const CIRCULARITY: &str = "CIRCULARITY";
pub const SOLIDITY: &str = "SOLIDITY";
pub const SHAPE_INDEX: &str = "SHAPE_INDEX";
pub const VOLUME: &str = "VOLUME";
pub const CONVEXITY: &str = "CONVEXITY";
pub const SPHERICITY: &str = "SPHERICITY";

pub const SHAPE_FEATURES: &[FeatureInfo] = &[
    FeatureInfo {
        key: AREA,
        name: "Area",
        short_name: "Area",
        dimension: Dimension::Area,
        is_int: false,
    },
    FeatureInfo {
        key: PERIMETER,
        name: "Perimeter",
        short_name: "Perim.",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: CIRCULARITY,
        name: "Circularity",
        short_name: "Circ.",
        dimension: Dimension::None,
        is_int: false,
    },
    FeatureInfo {
        key: SOLIDITY,
        name: "Solidity",
        short_name: "Solidity",
        dimension: Dimension::None,
        is_int: false,
    },
    FeatureInfo {
        key: SHAPE_INDEX,
        name: "Shape index",
        short_name: "Shape index",
        dimension: Dimension::None,
        is_int: false,
    },
    FeatureInfo {
        key: VOLUME,
        name: "Volume",
        short_name: "Vol.",
        dimension: Dimension::Volume,
        is_int: false,
    },
    FeatureInfo {
        key: CONVEXITY,
        name: "Convexity",
        short_name: "Conv.",
        dimension: Dimension::None,
        is_int: false,
    },
    FeatureInfo {
        key: SPHERICITY,
        name: "Sphericity",
        short_name: "Sphericity",
        dimension: Dimension::None,
        is_int: false,
    },
];

// ── Ellipse fit ────────────────────────────────────────────────────────────

pub const ELLIPSE_X0: &str = "ELLIPSE_X0";
pub const ELLIPSE_Y0: &str = "ELLIPSE_Y0";
pub const ELLIPSE_MAJOR: &str = "ELLIPSE_MAJOR";
pub const ELLIPSE_MINOR: &str = "ELLIPSE_MINOR";
pub const ELLIPSE_THETA: &str = "ELLIPSE_THETA";
pub const ELLIPSE_ASPECTRATIO: &str = "ELLIPSE_ASPECTRATIO";

pub const ELLIPSE_FEATURES: &[FeatureInfo] = &[
    FeatureInfo {
        key: ELLIPSE_X0,
        name: "Ellipse center x",
        short_name: "El. x0",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSE_Y0,
        name: "Ellipse center y",
        short_name: "El. y0",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSE_MAJOR,
        name: "Ellipse long axis",
        short_name: "El. long axis",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSE_MINOR,
        name: "Ellipse short axis",
        short_name: "El. short axis",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSE_THETA,
        name: "Ellipse angle",
        short_name: "El. angle",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSE_ASPECTRATIO,
        name: "Ellipse aspect ratio",
        short_name: "El. a.r.",
        dimension: Dimension::None,
        is_int: false,
    },
];

// ── Ellipsoid fit ──────────────────────────────────────────────────────────

pub const ELLIPSOID_X0: &str = "ELLIPSOID_X0";
pub const ELLIPSOID_Y0: &str = "ELLIPSOID_Y0";
pub const ELLIPSOID_Z0: &str = "ELLIPSOID_Z0";
pub const ELLIPSOID_MINOR_LENGTH: &str = "ELLIPSOID_MINOR_LENGTH";
pub const ELLIPSOID_MEDIAN_LENGTH: &str = "ELLIPSOID_MEDIAN_LENGTH";
pub const ELLIPSOID_MAJOR_LENGTH: &str = "ELLIPSOID_MAJOR_LENGTH";
pub const ELLIPSOID_MINOR_PHI: &str = "ELLIPSOID_MINOR_PHI";
pub const ELLIPSOID_MINOR_THETA: &str = "ELLIPSOID_MINOR_THETA";
pub const ELLIPSOID_MEDIAN_PHI: &str = "ELLIPSOID_MEDIAN_PHI";
pub const ELLIPSOID_MEDIAN_THETA: &str = "ELLIPSOID_MEDIAN_THETA";
pub const ELLIPSOID_MAJOR_PHI: &str = "ELLIPSOID_MAJOR_PHI";
pub const ELLIPSOID_MAJOR_THETA: &str = "ELLIPSOID_MAJOR_THETA";
pub const ELLIPSOID_ASPECTRATIO: &str = "ELLIPSOID_ASPECTRATIO";
pub const ELLIPSOID_SHAPE: &str = "ELLIPSOID_SHAPE";

pub const ELLIPSOID_FEATURES: &[FeatureInfo] = &[
    FeatureInfo {
        key: ELLIPSOID_X0,
        name: "Ellipsoid center x",
        short_name: "Ell. x0",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_Y0,
        name: "Ellipsoid center y",
        short_name: "Ell. y0",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_Z0,
        name: "Ellipsoid center z",
        short_name: "Ell. z0",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MINOR_LENGTH,
        name: "Ellipsoid A length",
        short_name: "Ell. rA",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MEDIAN_LENGTH,
        name: "Ellipsoid B length",
        short_name: "Ell. rB",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MAJOR_LENGTH,
        name: "Ellipsoid C length",
        short_name: "Ell. rC",
        dimension: Dimension::Length,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MINOR_PHI,
        name: "Ellipsoid A axis azimuth",
        short_name: "Ell. A phi",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MINOR_THETA,
        name: "Ellipsoid A axis polar angle",
        short_name: "Ell. A theta",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MEDIAN_PHI,
        name: "Ellipsoid B axis azimuth",
        short_name: "Ell. B phi",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MEDIAN_THETA,
        name: "Ellipsoid B axis polar angle",
        short_name: "Ell. B theta",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MAJOR_PHI,
        name: "Ellipsoid C axis azimuth",
        short_name: "Ell. C phi",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_MAJOR_THETA,
        name: "Ellipsoid C axis polar angle",
        short_name: "Ell. C theta",
        dimension: Dimension::Angle,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_ASPECTRATIO,
        name: "Ellipsoid aspect ratio",
        short_name: "Ell. a.r.",
        dimension: Dimension::None,
        is_int: false,
    },
    FeatureInfo {
        key: ELLIPSOID_SHAPE,
        name: "Ellipsoid shape class",
        short_name: "Ell. shape",
        dimension: Dimension::None,
        is_int: true,
    },
];

// ── Legacy morphology ──────────────────────────────────────────────────────

pub const MORPHOLOGY: &str = "MORPHOLOGY";

pub const MORPHOLOGY_FEATURES: &[FeatureInfo] = &[FeatureInfo {
    key: MORPHOLOGY,
    name: "Morphology class",
    short_name: "Morph.",
    dimension: Dimension::None,
    is_int: true,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique_across_all_tables() {
        let mut seen = std::collections::HashSet::new();
        for table in [
            SHAPE_FEATURES,
            ELLIPSE_FEATURES,
            ELLIPSOID_FEATURES,
            MORPHOLOGY_FEATURES,
        ] {
            for info in table {
                assert!(seen.insert(info.key), "duplicate key {}", info.key);
            }
        }
    }

    #[test]
    fn integer_features_are_the_class_codes() {
        let ints: Vec<&str> = [
            SHAPE_FEATURES,
            ELLIPSE_FEATURES,
            ELLIPSOID_FEATURES,
            MORPHOLOGY_FEATURES,
        ]
        .iter()
        .flat_map(|t| t.iter())
        .filter(|i| i.is_int)
        .map(|i| i.key)
        .collect();
        assert_eq!(ints, vec![ELLIPSOID_SHAPE, MORPHOLOGY]);
    }
}
