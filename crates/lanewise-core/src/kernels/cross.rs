//! Cross products
//!
//! Only defined for two and three dimensions. The 2-D form yields one scalar
//! batch (the z component of the embedded 3-D product), the 3-D form a vector
//! batch. Any other dimension count has no `cross` at all.

use super::Kernels;
use crate::element::Number;
use crate::view::{ScalarsMut, Vectors, VectorsMut};

impl<T: Number, const N: usize> Kernels<T, 2, N> {
    /// `out = v.x * w.y - v.y * w.x`
    #[inline]
    pub fn cross(v: Vectors<'_, T, 2, N>, w: Vectors<'_, T, 2, N>, out: ScalarsMut<'_, T, N>) {
        let [vx, vy] = v;
        let [wx, wy] = w;
        for i in 0..N {
            out[i] = vx[i] * wy[i] - vy[i] * wx[i];
        }
    }
}

impl<T: Number, const N: usize> Kernels<T, 3, N> {
    /// `out = (vy*wz - vz*wy, vz*wx - vx*wz, vx*wy - vy*wx)`
    #[inline]
    pub fn cross(v: Vectors<'_, T, 3, N>, w: Vectors<'_, T, 3, N>, out: VectorsMut<'_, T, 3, N>) {
        let [vx, vy, vz] = v;
        let [wx, wy, wz] = w;
        let [ox, oy, oz] = out;
        for i in 0..N {
            ox[i] = vy[i] * wz[i] - vz[i] * wy[i];
            oy[i] = vz[i] * wx[i] - vx[i] * wz[i];
            oz[i] = vx[i] * wy[i] - vy[i] * wx[i];
        }
    }
}
