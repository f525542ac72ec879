//! Zigbee brightness runs 0-255, HomeKit uses a 0-100 percentage.

pub(crate) fn level_to_percent(level: f64) -> i64 {
    (level * 100. / 255.).round() as i64
}

pub(crate) fn percent_to_level(percent: f64) -> i64 {
    (percent * 255. / 100.).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_round_up() {
        assert_eq!(percent_to_level(50.), 128);
        assert_eq!(percent_to_level(10.), 26);
        assert_eq!(level_to_percent(254.), 100);
        assert_eq!(level_to_percent(128.), 50);
    }

    #[test]
    fn extremes() {
        assert_eq!(percent_to_level(0.), 0);
        assert_eq!(percent_to_level(100.), 255);
        assert_eq!(level_to_percent(255.), 100);
    }
}
