//! Cube field animation state.
//!
//! Every cube drifts by a fixed per-frame delta. Cubes that travel past the
//! respawn depth are re-rolled at a new random position and velocity.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cubefield_engine::math::Mat4;

/// Largest per-frame lateral drift, in either direction.
const LATERAL_SPEED: f32 = 0.1;
/// Largest per-frame movement away from the viewer.
const DEPTH_SPEED: f32 = 0.5;
/// Largest per-frame spin about each axis, in either direction.
const SPIN_SPEED: f32 = 0.1;

/// Position and orientation of one cube.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rx: f32,
    pub ry: f32,
    pub rz: f32,
}

impl Pose {
    fn advance(&mut self, delta: &Pose) {
        self.x += delta.x;
        self.y += delta.y;
        self.z += delta.z;
        self.rx += delta.rx;
        self.ry += delta.ry;
        self.rz += delta.rz;
    }
}

/// A cube and its constant per-frame velocity.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cube {
    pub pose: Pose,
    pub delta: Pose,
}

impl Cube {
    /// Rolls a cube inside the field's lateral extent and `[min_z, max_z)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig) -> Self {
        let mut u = || rng.random::<f32>();
        let extent = config.extent;

        // Draw order is fixed so a seed always yields the same field.
        let pose = Pose {
            x: u() * 2.0 * extent - extent,
            y: u() * 2.0 * extent - extent,
            z: u() * (config.max_z - config.min_z) + config.min_z,
            rx: u() * TAU,
            ry: u() * TAU,
            rz: u() * TAU,
        };
        let delta = Pose {
            x: u() * 2.0 * LATERAL_SPEED - LATERAL_SPEED,
            y: u() * 2.0 * LATERAL_SPEED - LATERAL_SPEED,
            z: DEPTH_SPEED - u() * DEPTH_SPEED,
            rx: u() * 2.0 * SPIN_SPEED - SPIN_SPEED,
            ry: u() * 2.0 * SPIN_SPEED - SPIN_SPEED,
            rz: u() * 2.0 * SPIN_SPEED - SPIN_SPEED,
        };

        Self { pose, delta }
    }

    /// Advances one frame. Returns `true` if the cube crossed the respawn depth
    /// and was re-rolled.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &FieldConfig) -> bool {
        self.pose.advance(&self.delta);
        if self.pose.z > config.respawn_z {
            *self = Cube::spawn(rng, config);
            return true;
        }
        false
    }

    /// Model-view matrix for this cube under `view`.
    ///
    /// Applied after the view: scale, translate, then rotate about z, y, x.
    pub fn model_view(&self, view: &Mat4, scale: f32) -> Mat4 {
        let p = &self.pose;
        let mut m = *view;
        m.scale(scale, scale, scale)
            .translate(p.x, p.y, p.z)
            .rotate_z(p.rz)
            .rotate_y(p.ry)
            .rotate_x(p.rx);
        m
    }
}

/// Field shape and respawn rule.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub count: usize,
    /// Cubes spawn with `|x|, |y| < extent`.
    pub extent: f32,
    pub min_z: f32,
    pub max_z: f32,
    /// A cube whose depth exceeds this is re-rolled.
    pub respawn_z: f32,
    pub cube_scale: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 50,
            extent: 10.0,
            min_z: 3.0,
            max_z: 100.0,
            respawn_z: 50.0,
            cube_scale: 1.0,
        }
    }
}

/// The full set of animated cubes plus the generator that re-rolls them.
pub struct CubeField {
    config: FieldConfig,
    cubes: Vec<Cube>,
    rng: StdRng,
}

impl CubeField {
    /// Spawns `config.count` cubes. A fixed `seed` makes the whole animation
    /// reproducible; otherwise the generator is seeded from the OS.
    pub fn new(config: FieldConfig, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let cubes = (0..config.count)
            .map(|_| Cube::spawn(&mut rng, &config))
            .collect();

        Self { config, cubes, rng }
    }

    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Advances every cube one frame. Returns how many were respawned.
    pub fn step(&mut self) -> usize {
        let (rng, config) = (&mut self.rng, &self.config);
        self.cubes
            .iter_mut()
            .map(|cube| cube.update(rng, config))
            .filter(|respawned| *respawned)
            .count()
    }

    /// One model-view matrix per cube, in cube order.
    pub fn instances(&self, view: &Mat4) -> Vec<Mat4> {
        self.cubes
            .iter()
            .map(|c| c.model_view(view, self.config.cube_scale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_spawn_range(cube: &Cube, config: &FieldConfig) {
        let (p, d) = (&cube.pose, &cube.delta);
        assert!((-config.extent..config.extent).contains(&p.x), "x {}", p.x);
        assert!((-config.extent..config.extent).contains(&p.y), "y {}", p.y);
        assert!((config.min_z..=config.max_z).contains(&p.z), "z {}", p.z);
        for r in [p.rx, p.ry, p.rz] {
            assert!((0.0..=TAU).contains(&r), "rotation {r}");
        }
        for v in [d.x, d.y, d.rx, d.ry, d.rz] {
            assert!((-0.1..=0.1).contains(&v), "delta {v}");
        }
        assert!(d.z >= 0.0 && d.z <= 0.5, "dz {}", d.z);
    }

    fn still_cube(z: f32, dz: f32) -> Cube {
        Cube {
            pose: Pose { z, ..Pose::default() },
            delta: Pose { z: dz, ..Pose::default() },
        }
    }

    // ── spawn ─────────────────────────────────────────────────────────────

    #[test]
    fn spawned_cubes_stay_in_range() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert_in_spawn_range(&Cube::spawn(&mut rng, &config), &config);
        }
    }

    #[test]
    fn field_spawns_configured_count() {
        let config = FieldConfig { count: 12, ..FieldConfig::default() };
        let field = CubeField::new(config, Some(1));
        assert_eq!(field.cubes().len(), 12);
    }

    #[test]
    fn same_seed_same_field() {
        let mut a = CubeField::new(FieldConfig::default(), Some(42));
        let mut b = CubeField::new(FieldConfig::default(), Some(42));
        assert_eq!(a.cubes(), b.cubes());
        for _ in 0..200 {
            assert_eq!(a.step(), b.step());
        }
        assert_eq!(a.cubes(), b.cubes());
    }

    #[test]
    fn different_seeds_differ() {
        let a = CubeField::new(FieldConfig::default(), Some(1));
        let b = CubeField::new(FieldConfig::default(), Some(2));
        assert_ne!(a.cubes(), b.cubes());
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn z_advances_by_exactly_delta() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut cube = still_cube(10.0, 0.5);
        for k in 1..=20 {
            assert!(!cube.update(&mut rng, &config));
            assert_eq!(cube.pose.z, 10.0 + 0.5 * k as f32);
            assert_eq!(cube.delta.z, 0.5);
        }
    }

    #[test]
    fn all_six_fields_advance() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let delta = Pose { x: 0.25, y: -0.25, z: 0.5, rx: 0.125, ry: -0.125, rz: 0.0625 };
        let mut cube = Cube { pose: Pose { z: 5.0, ..Pose::default() }, delta };
        cube.update(&mut rng, &config);
        assert_eq!(
            cube.pose,
            Pose { x: 0.25, y: -0.25, z: 5.5, rx: 0.125, ry: -0.125, rz: 0.0625 }
        );
    }

    #[test]
    fn crossing_threshold_respawns_in_range() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let mut cube = still_cube(49.75, 0.5);
            assert!(cube.update(&mut rng, &config));
            assert_in_spawn_range(&cube, &config);
        }
    }

    #[test]
    fn reaching_threshold_exactly_does_not_respawn() {
        let config = FieldConfig::default();
        let mut rng = StdRng::seed_from_u64(0);
        let mut cube = still_cube(49.5, 0.5);
        assert!(!cube.update(&mut rng, &config));
        assert_eq!(cube.pose.z, 50.0);
    }

    #[test]
    fn far_spawns_respawn_on_first_step() {
        let config = FieldConfig { count: 1, min_z: 60.0, max_z: 70.0, ..FieldConfig::default() };
        let mut field = CubeField::new(config, Some(9));
        assert_eq!(field.step(), 1);
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn unrotated_cube_is_a_translation() {
        let cube = Cube {
            pose: Pose { x: 1.0, y: -2.0, z: 8.0, ..Pose::default() },
            delta: Pose::default(),
        };
        let m = cube.model_view(&Mat4::unity(), 1.0);
        assert!(m.approx_eq(&Mat4::translation(1.0, -2.0, 8.0), 1e-6));
    }

    #[test]
    fn instances_follow_cube_order() {
        let field = CubeField::new(FieldConfig { count: 5, ..FieldConfig::default() }, Some(5));
        let view = Mat4::translation(0.0, 0.0, 2.0);
        let out = field.instances(&view);
        assert_eq!(out.len(), 5);
        for (m, cube) in out.iter().zip(field.cubes()) {
            assert_eq!(*m, cube.model_view(&view, 1.0));
        }
    }
}
