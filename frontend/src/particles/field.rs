use rand::Rng;

/// Pairs closer than this are joined by a line.
pub const LINK_DISTANCE: f64 = 100.0;
pub const LINK_MAX_OPACITY: f64 = 0.15;
pub const MAX_SPEED: f64 = 0.2;
pub const RADIUS_RANGE: (f64, f64) = (0.5, 2.5);
pub const ALPHA_RANGE: (f64, f64) = (0.1, 0.6);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Self {
        Self {
            x: sample(rng, 0.0, width),
            y: sample(rng, 0.0, height),
            vx: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            vy: rng.gen_range(-MAX_SPEED..MAX_SPEED),
            radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
            alpha: rng.gen_range(ALPHA_RANGE.0..ALPHA_RANGE.1),
        }
    }
}

// gen_range panics on an empty range, and a hidden canvas measures 0x0.
fn sample<R: Rng>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

/// Keeps a coordinate in `[0, extent)` by moving it to the opposite edge
/// when it leaves. Past the far edge lands on 0, below 0 lands on the
/// last value short of `extent`, however far out the coordinate was.
pub fn wrap(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    if value >= extent {
        0.0
    } else if value < 0.0 {
        below(extent)
    } else {
        value
    }
}

// Largest f64 strictly less than a positive finite `value`.
fn below(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}

/// Opacity of the line joining two particles `distance` apart, if any.
pub fn link_opacity(distance: f64) -> Option<f64> {
    if distance < LINK_DISTANCE {
        Some(LINK_MAX_OPACITY * (1.0 - distance / LINK_DISTANCE))
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn seeded<R: Rng>(rng: &mut R, count: usize, width: f64, height: f64) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// New bounds for the surface. Positions are kept as they are and fold
    /// back inside on the next step.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.vx, width);
            particle.y = wrap(particle.y + particle.vy, height);
        }
    }

    /// Lines for every unordered pair closer than `LINK_DISTANCE`.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let distance = (a.x - b.x).hypot(a.y - b.y);
                if let Some(opacity) = link_opacity(distance) {
                    links.push(Link {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        opacity,
                    });
                }
            }
        }
        links
    }

    #[cfg(test)]
    pub(crate) fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(x: f64, y: f64) -> Particle {
        Particle {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius: 1.0,
            alpha: 0.5,
        }
    }

    fn in_bounds(field: &ParticleField) -> bool {
        let (w, h) = field.size();
        field
            .particles()
            .iter()
            .all(|p| p.x >= 0.0 && p.x < w && p.y >= 0.0 && p.y < h)
    }

    #[test]
    fn seeding_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::seeded(&mut rng, 60, 800.0, 600.0);
        assert_eq!(field.particles().len(), 60);
        assert!(in_bounds(&field));
        for p in field.particles() {
            assert!(p.vx.abs() <= MAX_SPEED && p.vy.abs() <= MAX_SPEED);
            assert!(p.radius >= RADIUS_RANGE.0 && p.radius < RADIUS_RANGE.1);
            assert!(p.alpha >= ALPHA_RANGE.0 && p.alpha < ALPHA_RANGE.1);
        }
    }

    #[test]
    fn positions_stay_in_bounds_over_many_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut field = ParticleField::seeded(&mut rng, 60, 320.0, 200.0);
        for _ in 0..10_000 {
            field.step();
            assert!(in_bounds(&field));
        }
    }

    #[test]
    fn step_wraps_toroidally_instead_of_reflecting() {
        let mut left = still(0.05, 50.0);
        left.vx = -0.1;
        let mut bottom = still(50.0, 99.95);
        bottom.vy = 0.1;
        let mut field = ParticleField::from_particles(vec![left, bottom], 100.0, 100.0);
        field.step();
        let p = field.particles();
        assert!(p[0].x > 99.99 && p[0].x < 100.0);
        assert_eq!(p[0].vx, -0.1);
        assert_eq!(p[1].y, 0.0);
        assert_eq!(p[1].vy, 0.1);
    }

    #[test]
    fn shrinking_keeps_positions_until_next_step() {
        let mut drifting = still(750.0, 500.0);
        drifting.vx = 0.1;
        let mut field = ParticleField::from_particles(vec![drifting], 800.0, 600.0);
        field.resize(400.0, 300.0);
        assert_eq!(field.particles()[0].x, 750.0);
        field.step();
        assert!(in_bounds(&field));
        assert_eq!(field.particles()[0].x, 0.0);
        assert_eq!(field.particles()[0].y, 0.0);
    }

    #[test]
    fn far_negative_lands_on_the_far_edge() {
        let mut field = ParticleField::from_particles(vec![still(-250.0, -0.5)], 400.0, 300.0);
        field.step();
        let p = field.particles()[0];
        assert!(in_bounds(&field));
        assert!(p.x > 399.99);
        assert!(p.y > 299.99);
    }

    #[test]
    fn zero_sized_surface_pins_particles() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::seeded(&mut rng, 10, 0.0, 0.0);
        field.step();
        assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }

    #[test]
    fn wrap_edges() {
        assert_eq!(wrap(10.0, 100.0), 10.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(250.0, 100.0), 0.0);
        assert_eq!(wrap(0.0, 100.0), 0.0);
        for outside in [-0.5, -100.0, -1e-20] {
            let wrapped = wrap(outside, 100.0);
            assert!(wrapped < 100.0 && wrapped > 99.999);
        }
        assert_eq!(wrap(5.0, 0.0), 0.0);
    }

    #[test]
    fn link_opacity_fades_with_distance() {
        assert_eq!(link_opacity(0.0), Some(LINK_MAX_OPACITY));
        let half = link_opacity(50.0).unwrap();
        assert!((half - 0.075).abs() < 1e-12);
        assert_eq!(link_opacity(LINK_DISTANCE), None);
        assert_eq!(link_opacity(150.0), None);
    }

    #[test]
    fn links_cover_each_close_pair_once() {
        let field = ParticleField::from_particles(
            vec![still(0.0, 0.0), still(30.0, 40.0), still(500.0, 500.0)],
            1000.0,
            1000.0,
        );
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, (0.0, 0.0));
        assert_eq!(links[0].to, (30.0, 40.0));
        assert!((links[0].opacity - 0.15 * 0.5).abs() < 1e-12);
    }
}
