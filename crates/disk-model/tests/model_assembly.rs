//! Building the full warped disk model from synthetic profiles.

use disk_model::{GridConfig, ModelError, SetupConfig, WarpedDiskModel};
use ndarray::Axis;
use std::f64::consts::PI;
use test_utils::{assert_approx_eq, flat_profile, warped_profile};

fn small_config() -> SetupConfig {
    let mut config = SetupConfig::default();
    config.grid = GridConfig {
        ntheta: 20,
        nphi: 16,
        theta_up: 0.2,
    };
    config
}

#[test]
fn test_flat_disk_keeps_global_angles() {
    let profile = flat_profile(6);
    let model = WarpedDiskModel::build(&profile, &small_config()).unwrap();

    let (theta, phi) = model.grid.angle_meshgrid();
    assert_eq!(model.theta_local, theta);
    assert_eq!(model.phi_local, phi);
    assert_eq!(model.dust_density.shape(), &[6, 20, 16]);
    assert_eq!(model.stellar_mass, profile.m_star);
}

#[test]
fn test_flat_disk_density_is_midplane_symmetric() {
    let model = WarpedDiskModel::build(&flat_profile(4), &small_config()).unwrap();
    let rho = &model.dust_density;
    let ntheta = model.grid.ntheta();

    for i in 0..4 {
        for j in 0..ntheta / 2 {
            for k in 0..16 {
                let upper = rho[[i, j, k]];
                let lower = rho[[i, ntheta - 1 - j, k]];
                assert_approx_eq!(upper / lower, 1.0, 1e-9);
            }
        }
        // Independent of azimuth
        let shell = rho.index_axis(Axis(0), i);
        for row in shell.outer_iter() {
            assert!(row.iter().all(|&v| (v - row[0]).abs() <= 1e-12 * row[0].abs()));
        }
    }
}

#[test]
fn test_warped_outer_shell_peaks_off_midplane() {
    let config = small_config();
    let model = WarpedDiskModel::build(&warped_profile(5, 0.5, 0.0), &config).unwrap();
    let outer = model.dust_density.index_axis(Axis(0), 4);

    // Normal tipped towards +x: at phi ≈ 0 the local midplane dips below z = 0.
    let column = outer.index_axis(Axis(1), 0);
    let (j_max, _) = column
        .iter()
        .enumerate()
        .fold((0, f64::MIN), |acc, (j, &v)| if v > acc.1 { (j, v) } else { acc });
    let theta_peak = model.grid.theta_centers[j_max];
    assert!(
        (theta_peak - (PI / 2.0 + 0.5)).abs() < 0.2,
        "peak at theta = {}",
        theta_peak
    );

    assert!(model.dust_density.iter().all(|v| v.is_finite() && *v >= 0.0));
}

#[test]
fn test_inner_shell_of_warp_is_flat() {
    let model = WarpedDiskModel::build(&warped_profile(5, 0.5, 1.0), &small_config()).unwrap();
    let (theta, _) = model.grid.angle_meshgrid();
    assert_eq!(
        model.theta_local.index_axis(Axis(0), 0),
        theta.index_axis(Axis(0), 0)
    );
    assert_ne!(
        model.theta_local.index_axis(Axis(0), 4),
        theta.index_axis(Axis(0), 4)
    );
}

#[test]
fn test_inconsistent_profile_is_rejected() {
    let mut profile = flat_profile(4);
    profile.l.pop();
    let err = WarpedDiskModel::build(&profile, &small_config()).unwrap_err();
    assert!(matches!(err, ModelError::Profile(_)));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("setup.yaml");
    std::fs::write(&path, "grid:\n  ntheta: 12\n  nphi: 24\ndust:\n  opacity: carbon\n").unwrap();

    let config = SetupConfig::from_file(&path).unwrap();
    assert_eq!(config.grid.ntheta, 12);
    assert_eq!(config.dust.opacity, "carbon");

    let model = WarpedDiskModel::build(&flat_profile(3), &config).unwrap();
    assert_eq!(model.grid.shape(), (3, 12, 24));
    assert_eq!(model.wavelengths.len(), 150);
}
