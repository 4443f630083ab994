//! Tests for marker footprints and orientation-aware scanning

#[cfg(test)]
mod tests {
    use crate::square_tiles;
    use jigsawtile::PuzzleError;
    use jigsawtile::algorithm::assembly::GridAssembler;
    use jigsawtile::algorithm::neighbors::NeighborGraph;
    use jigsawtile::analysis::patterns::{MarkerMatch, MarkerPattern, PatternScanner};
    use jigsawtile::analysis::stitching::{Image, stitch};
    use jigsawtile::spatial::grid::Orientation;
    use ndarray::Array2;

    fn image_from(rows: &[&str]) -> Image {
        let cols = rows.first().map_or(0, |row| row.len());
        Array2::from_shape_fn((rows.len(), cols), |(r, c)| {
            rows.get(r).and_then(|row| row.as_bytes().get(c)) == Some(&b'#')
        })
    }

    #[test]
    fn test_sea_monster_footprint() {
        let monster = MarkerPattern::sea_monster();
        assert_eq!(monster.dims(), (3, 20));
        assert_eq!(monster.len(), 15);
        assert!(!monster.is_empty());
        assert_eq!(monster.offsets().first(), Some(&(0, 18)));
    }

    // Tests footprint parsing with surrounding blank lines and ragged rows
    // Verified by keeping leading blank lines in from_text
    #[test]
    fn test_parse_trims_blank_lines() -> jigsawtile::Result<()> {
        let marker = MarkerPattern::parse("\n\n.#\n#..#\n\n")?;
        assert_eq!(marker.dims(), (2, 4));
        assert_eq!(marker.offsets(), &[(0, 1), (1, 0), (1, 3)]);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_empty_footprint() {
        assert!(matches!(
            MarkerPattern::parse("...\n. ."),
            Err(PuzzleError::InvalidParameter {
                parameter: "marker",
                ..
            })
        ));
        assert!(MarkerPattern::parse("").is_err());
    }

    // Tests that matches in a rotated view are covered at source positions
    // Verified by covering view coordinates instead of source coordinates
    #[test]
    fn test_scan_covers_source_positions() -> jigsawtile::Result<()> {
        let marker = MarkerPattern::parse("##")?;
        // Only a vertical pair exists, visible as a horizontal pair after one turn
        let image = image_from(&["#..", "#..", "..."]);
        let mut scanner = PatternScanner::new(&image, &marker);

        assert_eq!(scanner.scan_orientation(Orientation::IDENTITY), 0);
        assert_eq!(scanner.scan_orientation(Orientation::new(false, 1)), 1);
        assert_eq!(scanner.coverage().positions(), vec![(0, 0), (1, 0)]);
        assert_eq!(
            scanner.matches(),
            &[MarkerMatch {
                orientation: Orientation::new(false, 1),
                row: 2,
                col: 0,
            }]
        );
        assert_eq!(scanner.roughness(), 0);
        Ok(())
    }

    #[test]
    fn test_overlapping_matches_count_pixels_once() -> jigsawtile::Result<()> {
        let marker = MarkerPattern::parse("##")?;
        let image = image_from(&["###", "...", "..#"]);
        let mut scanner = PatternScanner::new(&image, &marker);

        // Two overlapping horizontal matches, seen from four orientations each
        assert_eq!(scanner.scan_all(), 8);
        assert_eq!(scanner.coverage().count(), 3);
        assert_eq!(scanner.roughness(), 1);

        let (coverage, matches) = scanner.finish();
        assert!(!coverage.is_covered(2, 2));
        assert_eq!(matches.len(), 8);
        Ok(())
    }

    // Tests that roughness never grows as more orientations are scanned
    // Verified by clearing coverage at the start of scan_orientation
    #[test]
    fn test_roughness_is_monotone() -> jigsawtile::Result<()> {
        let marker = MarkerPattern::parse("#.\n##")?;
        let image = image_from(&["##.#", "#..#", "..##", "#..."]);
        let mut scanner = PatternScanner::new(&image, &marker);

        let mut previous = scanner.roughness();
        assert_eq!(previous, 8);
        for orientation in Orientation::ALL {
            scanner.scan_orientation(orientation);
            let current = scanner.roughness();
            assert!(current <= previous, "{orientation:?}");
            previous = current;
        }
        Ok(())
    }

    #[test]
    fn test_marker_larger_than_image() -> jigsawtile::Result<()> {
        let marker = MarkerPattern::sea_monster();
        let image = image_from(&["##", "##"]);
        let mut scanner = PatternScanner::new(&image, &marker);
        assert_eq!(scanner.scan_all(), 0);
        assert_eq!(scanner.roughness(), 4);

        // The square picture is too small for any monster
        let tiles = square_tiles();
        let graph = NeighborGraph::build(&tiles)?;
        let stitched = stitch(&GridAssembler::new(&graph).assemble(tiles)?)?;
        let mut scanner = PatternScanner::new(&stitched, &marker);
        assert_eq!(scanner.scan_all(), 0);
        assert_eq!(scanner.roughness(), 16);
        Ok(())
    }

    #[test]
    fn test_identity_scan_finds_known_marker() {
        let marker = MarkerPattern::sea_monster();
        let rows = [
            "                  # ",
            "#    ##    ##    ###",
            " #  #  #  #  #  #   ",
        ];
        let image = image_from(&rows);
        let mut scanner = PatternScanner::new(&image, &marker);
        assert_eq!(scanner.scan_orientation(Orientation::IDENTITY), 1);
        assert_eq!(scanner.roughness(), 0);
    }
}
