//! Tests for threshold escalation and anti-duplication matching

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use tilemosaic::TileLibrary;
    use tilemosaic::algorithm::matcher::{TileMatcher, match_tile};
    use tilemosaic::algorithm::session::MatchSession;
    use tilemosaic::color::average::Color;
    use tilemosaic::color::distance::distance;
    use tilemosaic::io::configuration::WIDENED_MARGIN;

    fn solid_library(colors: &[[u8; 3]]) -> TileLibrary {
        let images = colors
            .iter()
            .map(|&rgb| RgbImage::from_pixel(4, 4, Rgb(rgb)))
            .collect();
        TileLibrary::from_images(images).unwrap()
    }

    fn color(rgb: [u8; 3]) -> Color {
        Color::from_pixel(Rgb(rgb))
    }

    // Tests the first unused tile within the threshold wins, not the closest
    // Verified by choosing the minimum-distance tile
    #[test]
    fn test_primary_pass_is_first_fit() {
        // (250,0,0) is 1.87 from red and (252,0,0) is 1.12: both fit at threshold 3
        let library = solid_library(&[[250, 0, 0], [252, 0, 0]]);
        let mut session = MatchSession::for_library(&library);

        let tile = match_tile(color([255, 0, 0]), &mut session, &library).unwrap();
        assert_eq!(tile.id(), 0);
        assert_eq!(session.stats().primary, 1);
        assert_eq!(session.stats().escalations, 1);
    }

    // Tests an exact unused match is taken on the first cycle
    // Verified by starting the threshold at the first step
    #[test]
    fn test_exact_match_needs_no_escalation() {
        let library = solid_library(&[[0, 0, 255], [255, 0, 0]]);
        let mut session = MatchSession::for_library(&library);

        let tile = match_tile(color([255, 0, 0]), &mut session, &library).unwrap();
        assert_eq!(tile.id(), 1);
        assert_eq!(session.stats().escalations, 0);
        assert_eq!(session.used_tiles(), &[1]);
    }

    // Tests a near hit on a used tile opens the widened pass
    // Verified by skipping the widened pass entirely
    #[test]
    fn test_widened_pass_after_used_near_hit() {
        // (240,0,0) is 5.63 from red: outside threshold 1, inside 1 + 5
        let library = solid_library(&[[255, 0, 0], [240, 0, 0]]);
        let mut session = MatchSession::for_library(&library);
        let red = color([255, 0, 0]);

        assert_eq!(match_tile(red, &mut session, &library).unwrap().id(), 0);
        let second = match_tile(red, &mut session, &library).unwrap();

        assert_eq!(second.id(), 1);
        let stats = session.stats();
        assert_eq!(stats.widened, 1);
        assert_eq!(stats.escalations, 0);
        assert_eq!(session.used_tiles(), &[0, 1]);
    }

    // Tests a used tile is reused once no unused tile is close enough
    // Verified by escalating instead of reusing
    #[test]
    fn test_fallback_reuses_used_tile() {
        let library = solid_library(&[[255, 0, 0]]);
        let mut session = MatchSession::for_library(&library);
        let red = color([255, 0, 0]);

        assert_eq!(match_tile(red, &mut session, &library).unwrap().id(), 0);
        assert_eq!(match_tile(red, &mut session, &library).unwrap().id(), 0);

        let stats = session.stats();
        assert_eq!(stats.reused, 1);
        assert_eq!(stats.escalations, 0);
        assert_eq!(session.used_tiles(), &[0]);
    }

    // Tests the threshold grows by two until a tile fits
    // Verified by growing the threshold by one
    #[test]
    fn test_escalation_counts_cycles() {
        // (245,0,0) is 3.74 from red: fits only once the threshold reaches 5
        let library = solid_library(&[[0, 0, 255], [245, 0, 0]]);
        let mut session = MatchSession::for_library(&library);

        let tile = match_tile(color([255, 0, 0]), &mut session, &library).unwrap();
        assert_eq!(tile.id(), 1);
        assert_eq!(session.stats().escalations, 2);
    }

    // Tests a one-tile library answers every target
    // Verified by returning None when the only tile is far away
    #[test]
    fn test_single_tile_library_always_matches() {
        let library = solid_library(&[[0, 0, 255]]);
        let mut session = MatchSession::for_library(&library);

        for rgb in [[255, 0, 0], [0, 255, 0], [0, 0, 0], [255, 255, 255]] {
            let tile = match_tile(color(rgb), &mut session, &library).unwrap();
            assert_eq!(tile.id(), 0);
        }
        assert_eq!(session.used_count(), 1);
    }

    // Tests distinct targets consume distinct tiles while unused ones remain
    // Verified by reusing the first placed tile eagerly
    #[test]
    fn test_distinct_targets_get_distinct_tiles() {
        let palette = [
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [0, 0, 0],
            [255, 255, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
        ];
        let library = solid_library(&palette);
        let mut session = MatchSession::for_library(&library);

        let ids: HashSet<usize> = palette
            .iter()
            .map(|&rgb| match_tile(color(rgb), &mut session, &library).unwrap().id())
            .collect();
        assert_eq!(ids.len(), palette.len());
    }

    // Tests a used tile is returned only when every unused tile is beyond the widened margin
    // Verified by skipping the widened pass
    #[test]
    fn test_reuse_only_when_unused_tiles_are_beyond_widened_margin() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors: Vec<[u8; 3]> = (0..12).map(|_| rng.random()).collect();
        let library = solid_library(&colors);
        let mut session = MatchSession::for_library(&library);

        for _ in 0..60 {
            let target = color(rng.random());
            let used_before: Vec<bool> = (0..library.len()).map(|id| session.is_used(id)).collect();
            let tile = match_tile(target, &mut session, &library).unwrap();

            if used_before[tile.id()] {
                let chosen = distance(target, tile.average_color());
                for candidate in library.iter().filter(|t| !used_before[t.id()]) {
                    assert!(distance(target, candidate.average_color()) > chosen + WIDENED_MARGIN);
                }
            }
        }
    }

    // Tests a ceiling below every distance gives up with None
    // Verified by looping without a ceiling check
    #[test]
    fn test_ceiling_stops_escalation() {
        let library = solid_library(&[[0, 0, 255]]);
        let mut session = MatchSession::for_library(&library);
        let matcher = TileMatcher {
            threshold_ceiling: 10.0,
            ..TileMatcher::default()
        };

        assert!(matcher.match_tile(color([255, 0, 0]), &mut session, &library).is_none());
        assert_eq!(session.used_count(), 0);
        assert_eq!(session.stats().escalations, 5);
    }

    // Tests the number of thresholds tried before giving up
    // Verified by stopping one step below the ceiling
    #[test]
    fn test_cycle_count() {
        assert_eq!(TileMatcher::default().cycle_count(), 200);

        let exact = TileMatcher {
            threshold_ceiling: 9.0,
            ..TileMatcher::default()
        };
        assert_eq!(exact.cycle_count(), 5);

        let below_start = TileMatcher {
            threshold_ceiling: 0.5,
            ..TileMatcher::default()
        };
        assert_eq!(below_start.cycle_count(), 0);
    }

    // Tests the default tolerances
    // Verified by changing the initial threshold
    #[test]
    fn test_default_tolerances() {
        let matcher = TileMatcher::default();
        assert_eq!(matcher.initial_threshold, 1.0);
        assert_eq!(matcher.threshold_step, 2.0);
        assert_eq!(matcher.widened_margin, 5.0);
        assert_eq!(matcher.threshold_ceiling, 400.0);
    }
}
