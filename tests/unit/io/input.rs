//! Tests for tile and marker description parsing

#[cfg(test)]
mod tests {
    use crate::SQUARE;
    use jigsawtile::PuzzleError;
    use jigsawtile::io::input::{load_marker, load_tiles, parse_tiles};
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_parse_square() -> jigsawtile::Result<()> {
        let tiles = parse_tiles(SQUARE)?;
        assert_eq!(tiles.len(), 4);
        assert_eq!(tiles.tile_size(), 5);
        assert_eq!(tiles.ids().collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(
            tiles.get(5).map(ToString::to_string),
            Some(String::from("Tile 5:\n...##\n.#...\n..###\n.#.##\n##.##"))
        );
        Ok(())
    }

    // Tests headers split blocks even without blank lines and CRLF endings
    // Verified by only closing blocks on blank lines
    #[test]
    fn test_parse_tolerates_layout_noise() -> jigsawtile::Result<()> {
        let text = "\r\n\r\nTile 1:\r\n#..\r\n...\r\n..#\r\nTile 2:\r\n.#.\r\n#.#\r\n.#.\r\n\r\n\r\n";
        let tiles = parse_tiles(text)?;
        assert_eq!(tiles.ids().collect::<Vec<_>>(), vec![1, 2]);
        Ok(())
    }

    // Tests errors carry the line where the tile or row starts
    // Verified by reporting the line index without the one-based offset
    #[test]
    fn test_parse_errors_report_lines() {
        assert!(matches!(
            parse_tiles("#..\nTile 1:\n#..\n...\n..#"),
            Err(PuzzleError::InvalidTileData { line: 1, .. })
        ));
        assert!(matches!(
            parse_tiles("Tile 1:\n#..\n...\n..#\n\nTile x:\n#..\n...\n..#"),
            Err(PuzzleError::InvalidTileData { line: 6, .. })
        ));
        assert!(matches!(
            parse_tiles("Tile 1:\n#..\n.?.\n..#"),
            Err(PuzzleError::InvalidTileData { line: 1, .. })
        ));
        assert!(matches!(
            parse_tiles("Tile 1\n#..\n...\n..#"),
            Err(PuzzleError::InvalidTileData { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_rejects_duplicates_and_empty_input() {
        assert!(matches!(
            parse_tiles("Tile 1:\n#..\n...\n..#\n\nTile 1:\n.#.\n...\n..#"),
            Err(PuzzleError::InvalidTileData { .. })
        ));
        assert!(matches!(
            parse_tiles("\n\n"),
            Err(PuzzleError::InvalidTileData { .. })
        ));
    }

    #[test]
    fn test_load_tiles_attaches_path() -> jigsawtile::Result<()> {
        let dir = tempfile::tempdir()?;
        let good = dir.path().join("square.txt");
        fs::write(&good, SQUARE)?;
        assert_eq!(load_tiles(&good)?.len(), 4);

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "Tile 1:\n#.\n.#\n")?;
        let result = load_tiles(&bad);
        assert!(matches!(
            &result,
            Err(PuzzleError::InvalidTileData { path: Some(path), .. }) if path == &bad
        ));
        Ok(())
    }

    #[test]
    fn test_load_missing_files() {
        let missing = Path::new("no/such/tiles.txt");
        assert!(matches!(
            load_tiles(missing),
            Err(PuzzleError::FileSystem {
                operation: "read tiles",
                ..
            })
        ));
        assert!(matches!(
            load_marker(missing),
            Err(PuzzleError::FileSystem {
                operation: "read marker",
                ..
            })
        ));
    }

    #[test]
    fn test_load_marker() -> jigsawtile::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("marker.txt");
        fs::write(&path, "#.#\n.#.\n")?;
        let marker = load_marker(&path)?;
        assert_eq!(marker.dims(), (2, 3));
        assert_eq!(marker.len(), 3);
        Ok(())
    }
}
