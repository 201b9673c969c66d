//! Seeded 3D value noise for the blob outline
//!
//! Lattice values and the hash permutation come from a `Pcg32`, so the same
//! seed always produces the same field. Octaves sum like p5's `noise()`:
//! four octaves, each half the amplitude and twice the frequency.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

const LATTICE: usize = 256;
const OCTAVES: u32 = 4;
const FALLOFF: f32 = 0.5;

/// Smooth, deterministic noise in `[0, 1)`
#[derive(Debug, Clone)]
pub struct ValueNoise {
    perm: Vec<usize>,
    values: Vec<f32>,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut perm: Vec<usize> = (0..LATTICE).collect();
        perm.shuffle(&mut rng);
        let values = (0..LATTICE).map(|_| rng.random::<f32>()).collect();

        Self { perm, values }
    }

    /// Multi-octave noise at `(x, y, z)`
    pub fn sample(&self, x: f32, y: f32, z: f32) -> f32 {
        let mut sum = 0.0;
        let mut amp = FALLOFF;
        let mut freq = 1.0;
        for _ in 0..OCTAVES {
            sum += amp * self.octave(x * freq, y * freq, z * freq);
            amp *= FALLOFF;
            freq *= 2.0;
        }
        sum
    }

    fn octave(&self, x: f32, y: f32, z: f32) -> f32 {
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (fx, fy, fz) = (fade(x - x0), fade(y - y0), fade(z - z0));
        let (ix, iy, iz) = (x0 as i64, y0 as i64, z0 as i64);

        let corner = |dx: i64, dy: i64, dz: i64| self.lattice(ix + dx, iy + dy, iz + dz);

        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), fx);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), fx);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), fx);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), fx);

        let y0v = lerp(x00, x10, fy);
        let y1v = lerp(x01, x11, fy);
        lerp(y0v, y1v, fz)
    }

    fn lattice(&self, x: i64, y: i64, z: i64) -> f32 {
        let wrap = |v: i64| (v & (LATTICE as i64 - 1)) as usize;
        let h = self.perm[wrap(x)];
        let h = self.perm[(h + wrap(y)) % LATTICE];
        let h = self.perm[(h + wrap(z)) % LATTICE];
        self.values[h]
    }
}

/// Cosine ease, same curve p5 uses between lattice points
#[inline]
fn fade(t: f32) -> f32 {
    0.5 * (1.0 - (t * std::f32::consts::PI).cos())
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
