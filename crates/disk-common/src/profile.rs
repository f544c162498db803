//! Radial profile of a warped disk.
//!
//! The profile is a flat mapping produced by the disk evolution code: cell
//! edges and centers, the stellar mass, and per-radius surface density,
//! scale height, aspect ratio and annulus normal vector.

use crate::{ProfileError, ProfileResult};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialized encodings accepted for a profile file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Json,
    Yaml,
}

impl ProfileFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> ProfileResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ProfileError::UnsupportedFormat(if other.is_empty() {
                path.display().to_string()
            } else {
                other.to_string()
            })),
        }
    }
}

/// Radial disk profile, one entry per radial cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiskProfile {
    /// Stellar mass [g]
    pub m_star: f64,
    /// Radial cell edges [cm], `nr + 1` values
    pub ri: Vec<f64>,
    /// Radial cell centers [cm]
    pub rc: Vec<f64>,
    /// Dust surface density [g/cm^2]
    pub sigmad: Vec<f64>,
    /// Pressure scale height [cm]
    pub hh: Vec<f64>,
    /// Dimensionless scale height (aspect ratio), nominally `hh / rc`.
    ///
    /// The upstream data flags this field as unverified: it may differ from
    /// `hh / rc` by a constant factor or a unit convention. It is passed
    /// through as given and used unchanged by the density law.
    pub hhr: Vec<f64>,
    /// Annulus normal vectors `(lx, ly, lz)`, not necessarily normalized
    pub l: Vec<Vec<f64>>,
    /// Evolution time of the snapshot, if recorded
    #[serde(default)]
    pub time: Option<f64>,
}

impl DiskProfile {
    /// Load and validate a profile from a JSON or YAML file.
    pub fn from_path(path: impl AsRef<Path>) -> ProfileResult<Self> {
        let path = path.as_ref();
        let format = ProfileFormat::from_path(path)?;
        let text = fs::read_to_string(path)?;

        let profile = match format {
            ProfileFormat::Json => Self::from_json_str(&text)?,
            ProfileFormat::Yaml => Self::from_yaml_str(&text)?,
        };

        info!(
            path = %path.display(),
            nr = profile.nr(),
            m_star = profile.m_star,
            "Loaded disk profile"
        );
        Ok(profile)
    }

    /// Parse and validate a JSON profile.
    pub fn from_json_str(text: &str) -> ProfileResult<Self> {
        let profile: Self = serde_json::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Parse and validate a YAML profile.
    pub fn from_yaml_str(text: &str) -> ProfileResult<Self> {
        let profile: Self = serde_yaml::from_str(text)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Number of radial shells.
    pub fn nr(&self) -> usize {
        self.rc.len()
    }

    /// Check that all per-radius arrays agree in length.
    pub fn validate(&self) -> ProfileResult<()> {
        let nr = self.nr();

        let per_radius: [(&'static str, usize); 4] = [
            ("sigmad", self.sigmad.len()),
            ("hh", self.hh.len()),
            ("hhr", self.hhr.len()),
            ("l", self.l.len()),
        ];
        for (field, found) in per_radius {
            if found != nr {
                return Err(ProfileError::length_mismatch(field, nr, found));
            }
        }

        if self.ri.len() != nr + 1 {
            return Err(ProfileError::length_mismatch("ri", nr + 1, self.ri.len()));
        }

        if let Some((index, normal)) = self.l.iter().enumerate().find(|(_, n)| n.len() != 3) {
            return Err(ProfileError::InvalidNormal {
                index,
                len: normal.len(),
            });
        }

        debug!(nr, "Profile shapes validated");
        Ok(())
    }

    /// Cell-center radii as an array.
    pub fn radii(&self) -> Array1<f64> {
        Array1::from_vec(self.rc.clone())
    }

    /// Cell-edge radii as an array.
    pub fn radius_edges(&self) -> Array1<f64> {
        Array1::from_vec(self.ri.clone())
    }

    /// Normal vectors as an `(nr, 3)` array.
    pub fn normals(&self) -> ProfileResult<Array2<f64>> {
        let mut flat = Vec::with_capacity(self.l.len() * 3);
        for (index, normal) in self.l.iter().enumerate() {
            if normal.len() != 3 {
                return Err(ProfileError::InvalidNormal {
                    index,
                    len: normal.len(),
                });
            }
            flat.extend_from_slice(normal);
        }

        Array2::from_shape_vec((self.l.len(), 3), flat)
            .map_err(|_| ProfileError::length_mismatch("l", self.l.len() * 3, self.l.len()))
    }

    pub fn surface_density(&self) -> Array1<f64> {
        Array1::from_vec(self.sigmad.clone())
    }

    pub fn scale_height(&self) -> Array1<f64> {
        Array1::from_vec(self.hh.clone())
    }

    /// Aspect ratio, passed through unchanged (see the field docs).
    pub fn aspect_ratio(&self) -> Array1<f64> {
        Array1::from_vec(self.hhr.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "m_star": 1.98892e33,
            "ri": [1.0, 2.0, 3.0],
            "rc": [1.5, 2.5],
            "sigmad": [10.0, 5.0],
            "hh": [0.05, 0.1],
            "hhr": [0.033, 0.04],
            "l": [[0.0, 0.0, 1.0], [0.1, 0.0, 0.99]]
        }"#
    }

    #[test]
    fn test_parse_json_profile() {
        let profile = DiskProfile::from_json_str(sample_json()).unwrap();
        assert_eq!(profile.nr(), 2);
        assert_eq!(profile.time, None);

        let normals = profile.normals().unwrap();
        assert_eq!(normals.shape(), &[2, 3]);
        assert_eq!(normals[[1, 0]], 0.1);
    }

    #[test]
    fn test_missing_field_is_reported() {
        let text = r#"{"m_star": 1.0, "ri": [1.0, 2.0], "rc": [1.5]}"#;
        let err = DiskProfile::from_json_str(text).unwrap_err();
        assert!(matches!(err, ProfileError::Json(_)));
        assert!(err.to_string().contains("sigmad"));
    }

    #[test]
    fn test_length_mismatch() {
        let text = sample_json().replace("\"hh\": [0.05, 0.1]", "\"hh\": [0.05]");
        match DiskProfile::from_json_str(&text) {
            Err(ProfileError::LengthMismatch {
                field,
                expected,
                found,
            }) => {
                assert_eq!(field, "hh");
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_edges_must_bracket_centers() {
        let text = sample_json().replace("[1.0, 2.0, 3.0]", "[1.0, 2.0]");
        let err = DiskProfile::from_json_str(&text).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::LengthMismatch { field: "ri", .. }
        ));
    }

    #[test]
    fn test_normal_with_wrong_arity() {
        let text = sample_json().replace("[0.1, 0.0, 0.99]", "[0.1, 0.99]");
        let err = DiskProfile::from_json_str(&text).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidNormal { index: 1, len: 2 }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            ProfileFormat::from_path(Path::new("disk.JSON")).unwrap(),
            ProfileFormat::Json
        );
        assert_eq!(
            ProfileFormat::from_path(Path::new("disk.yml")).unwrap(),
            ProfileFormat::Yaml
        );
        assert!(ProfileFormat::from_path(Path::new("warped_disk.rad")).is_err());
    }
}
