//! Natural constants in CGS units.

/// Astronomical unit [cm]
pub const AU: f64 = 1.49598e13;
/// Parsec [cm]
pub const PARSEC: f64 = 3.08572e18;
/// Solar mass [g]
pub const SOLAR_MASS: f64 = 1.98892e33;
/// Solar effective temperature [K]
pub const SOLAR_TEMPERATURE: f64 = 5.78e3;
/// Solar luminosity [erg/s]
pub const SOLAR_LUMINOSITY: f64 = 3.8525e33;
/// Solar radius [cm]
pub const SOLAR_RADIUS: f64 = 6.96e10;
/// Stefan-Boltzmann constant [erg/cm^2/K^4/s]
pub const STEFAN_BOLTZMANN: f64 = 5.6703e-5;
/// Gravitational constant [cm^3/g/s^2]
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67408e-08;
/// Proton mass [g]
pub const PROTON_MASS: f64 = 1.6726e-24;
/// Boltzmann constant [erg/K]
pub const BOLTZMANN: f64 = 1.3807e-16;
