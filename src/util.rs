use crate::aliases::Vec3;

pub fn zipwith_vec3(lhs: &Vec3, rhs: &Vec3, zipper: impl Fn(f64, f64) -> f64) -> Vec3 {
    Vec3::new(
        zipper(lhs[0], rhs[0]),
        zipper(lhs[1], rhs[1]),
        zipper(lhs[2], rhs[2]),
    )
}

pub fn min_vec3(lhs: &Vec3, rhs: &Vec3) -> Vec3 {
    zipwith_vec3(lhs, rhs, f64::min)
}

pub fn max_vec3(lhs: &Vec3, rhs: &Vec3) -> Vec3 {
    zipwith_vec3(lhs, rhs, f64::max)
}

/// Replaces NaN channels by zero. Returns whether anything was replaced.
pub fn sanitize_vec3(col: &mut Vec3) -> bool {
    let mut replaced = false;
    for c in col.iter_mut() {
        if c.is_nan() {
            *c = 0.0;
            replaced = true;
        }
    }
    replaced
}

/// Gamma 2 correction and quantization of one linear channel to a byte.
pub fn to_byte(linear: f64) -> u8 {
    let gamma = linear.max(0.0).sqrt();
    (255.99 * gamma).floor().min(255.0).max(0.0) as u8
}
