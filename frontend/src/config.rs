use log::Level;

pub const DEFAULT_PARTICLE_COUNT: usize = 60;
/// Upper bound for the particle field; the link pass is quadratic.
pub const MAX_PARTICLES: usize = 150;
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u32 = 4000;
pub const MIN_CAROUSEL_INTERVAL_MS: u32 = 500;

pub fn particle_count() -> usize {
    parse_particle_count(option_env!("LANDING_PARTICLE_COUNT"))
}

pub fn carousel_interval_ms() -> u32 {
    parse_carousel_interval(option_env!("LANDING_CAROUSEL_INTERVAL_MS"))
}

pub fn log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    }
}

fn parse_particle_count(raw: Option<&str>) -> usize {
    raw.and_then(|value| value.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_PARTICLE_COUNT)
        .clamp(1, MAX_PARTICLES)
}

fn parse_carousel_interval(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_CAROUSEL_INTERVAL_MS)
        .max(MIN_CAROUSEL_INTERVAL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_count_falls_back_and_clamps() {
        assert_eq!(parse_particle_count(None), DEFAULT_PARTICLE_COUNT);
        assert_eq!(parse_particle_count(Some("abc")), DEFAULT_PARTICLE_COUNT);
        assert_eq!(parse_particle_count(Some(" 80 ")), 80);
        assert_eq!(parse_particle_count(Some("0")), 1);
        assert_eq!(parse_particle_count(Some("100000")), MAX_PARTICLES);
    }

    #[test]
    fn carousel_interval_has_a_floor() {
        assert_eq!(parse_carousel_interval(None), 4000);
        assert_eq!(parse_carousel_interval(Some("10")), MIN_CAROUSEL_INTERVAL_MS);
        assert_eq!(parse_carousel_interval(Some("6000")), 6000);
        assert_eq!(parse_carousel_interval(Some("-1")), 4000);
    }
}
