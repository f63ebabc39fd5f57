//! Reference landmarks for tests
//!
//! Values were cross-checked against an independent geodesy code base. They
//! are sensitive to the retained precision of the WGS 84 constants.

use nalgebra::Vector3;

pub struct Landmark {
    /// Latitude (deg), longitude (deg), height (m)
    pub llh: [f64; 3],
    pub ecef: [f64; 3],
    pub gravitation: [f64; 3],
}

impl Landmark {
    pub fn llh(&self) -> Vector3<f64> {
        Vector3::from(self.llh)
    }

    pub fn ecef(&self) -> Vector3<f64> {
        Vector3::from(self.ecef)
    }

    pub fn gravitation(&self) -> Vector3<f64> {
        Vector3::from(self.gravitation)
    }
}

pub const WHITE_HOUSE: Landmark = Landmark {
    llh: [3.8897778000000002E+01, -7.7036389000000000E+01, 4.5719999999999999E+01],
    ecef: [1.1150423452941689E+06, -4.8438122981491517E+06, 3.9835202164462707E+06],
    gravitation: [-1.7170260919766687E+00, 7.4588665943134185E+00, -6.1541304311837033E+00],
};

pub const SYDNEY_OPERA_HOUSE: Landmark = Landmark {
    llh: [-3.3856810000000003E+01, 1.5121513999999999E+02, 4.0000000000000000E+00],
    ecef: [-4.6469638774879947E+06, 2.5530911988806850E+06, -3.5332702770814989E+06],
    gravitation: [7.1547316446011369E+00, -3.9308853853322177E+00, 5.4577459118432454E+00],
};

pub const ACONCAGUA_PEAK: Landmark = Landmark {
    llh: [-3.2653055999999999E+01, -7.0011667000000003E+01, 6.9608000000000002E+03],
    ecef: [1.8394468460281149E+06, -5.0570424596377872E+06, -3.4253819319244744E+06],
    gravitation: [-2.8227611074196277E+00, 7.7603888388830651E+00, 5.2735711300239210E+00],
};

pub const LANDMARKS: [Landmark; 3] = [WHITE_HOUSE, SYDNEY_OPERA_HOUSE, ACONCAGUA_PEAK];
