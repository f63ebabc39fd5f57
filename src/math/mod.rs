//! Linear algebra helpers for attitude representation

pub mod rotation;

pub use rotation::{
    mean_attitude_update, normalize_groves, normalize_svd, orthogonality_error,
    quaternion_to_rotation, rotation_exp, so3, vee, Normalization, SMALL_ANGLE_THRESHOLD,
};
