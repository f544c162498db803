//! Shell-by-shell transform of the global angle grid into the local frame.

use crate::tilt::Tilt;
use crate::{WarpError, WarpResult};
use ndarray::{Array1, Array2, Array3, ArrayView1, Zip};
use tracing::debug;

fn tilt_of(normal: ArrayView1<'_, f64>) -> Option<Tilt> {
    Tilt::from_normal([normal[0], normal[1], normal[2]])
}

fn check_shapes(
    theta: &Array3<f64>,
    phi: &Array3<f64>,
    radii: &Array1<f64>,
    normals: &Array2<f64>,
) -> WarpResult<()> {
    let nr = radii.len();

    if theta.shape()[0] != nr {
        return Err(WarpError::ShapeMismatch {
            what: "theta leading dimension vs number of radii",
            expected: vec![nr],
            found: vec![theta.shape()[0]],
        });
    }

    if phi.shape() != theta.shape() {
        return Err(WarpError::ShapeMismatch {
            what: "phi vs theta",
            expected: theta.shape().to_vec(),
            found: phi.shape().to_vec(),
        });
    }

    if normals.shape() != [nr, 3] {
        return Err(WarpError::InvalidNormals {
            nr,
            found: normals.shape().to_vec(),
        });
    }

    Ok(())
}

/// Rotate every `(theta, phi)` grid point into the frame of its shell's
/// disk normal.
///
/// `theta` and `phi` have shape `(nr, ntheta, nphi)`, `radii` holds the
/// `nr` shell radii and `normals` the `(nr, 3)` normal vectors. Shells whose
/// unit normal points along the global z axis are copied unchanged.
///
/// Shapes are checked before anything is computed. A zero normal vector is
/// not rejected; it turns its shell into NaN.
pub fn warped_coordinate_transformation(
    theta: &Array3<f64>,
    phi: &Array3<f64>,
    radii: &Array1<f64>,
    normals: &Array2<f64>,
) -> WarpResult<(Array3<f64>, Array3<f64>)> {
    check_shapes(theta, phi, radii, normals)?;

    let tilted = normals
        .outer_iter()
        .filter(|n| tilt_of(n.view()).is_some())
        .count();
    debug!(
        shells = radii.len(),
        tilted,
        shape = ?theta.shape(),
        "Transforming grid into local disk frame"
    );

    let mut theta_local = Array3::<f64>::zeros(theta.raw_dim());
    let mut phi_local = Array3::<f64>::zeros(phi.raw_dim());

    Zip::from(theta_local.outer_iter_mut())
        .and(phi_local.outer_iter_mut())
        .and(theta.outer_iter())
        .and(phi.outer_iter())
        .and(radii)
        .and(normals.outer_iter())
        .par_for_each(|mut theta_out, mut phi_out, theta_in, phi_in, &r, normal| {
            match tilt_of(normal) {
                None => {
                    theta_out.assign(&theta_in);
                    phi_out.assign(&phi_in);
                }
                Some(tilt) => {
                    Zip::from(&mut theta_out)
                        .and(&mut phi_out)
                        .and(&theta_in)
                        .and(&phi_in)
                        .for_each(|t_out, p_out, &t, &p| {
                            let (t_local, p_local) = tilt.apply(t, p, r);
                            *t_out = t_local;
                            *p_out = p_local;
                        });
                }
            }
        });

    Ok((theta_local, phi_local))
}
