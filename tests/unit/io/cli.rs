//! Tests for command-line parsing and the end-to-end processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{ImageFormat, Rgb, RgbImage};
    use log::LevelFilter;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tilemosaic::MosaicError;
    use tilemosaic::io::cli::{Cli, MosaicProcessor};
    use tilemosaic::io::configuration::{
        DEFAULT_OUTPUT_WIDTH, DEFAULT_RENDER_SIZE, DEFAULT_TILE_SIZE,
    };

    // Tests CLI parsing with only required arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "photo.png", "--tiles", "tiles"]);

        assert_eq!(cli.source, PathBuf::from("photo.png"));
        assert_eq!(cli.tiles, PathBuf::from("tiles"));
        assert_eq!(cli.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(cli.width, DEFAULT_OUTPUT_WIDTH);
        assert_eq!(cli.render_size, DEFAULT_RENDER_SIZE);
        assert!(cli.output.is_none());
        assert!(cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    // Tests CLI parsing with all available arguments
    // Verified by swapping the short flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program", "in.jpg", "-t", "lib", "-s", "8", "-w", "640", "-r", "12", "-o",
            "out.png", "-q",
        ]);

        assert_eq!(cli.tile_size, 8);
        assert_eq!(cli.width, 640);
        assert_eq!(cli.render_size, 12);
        assert_eq!(cli.output_path(), PathBuf::from("out.png"));
        assert!(!cli.should_show_progress());
        assert_eq!(cli.log_level(), LevelFilter::Warn);
    }

    // Tests quiet and verbose cannot be combined
    // Verified by removing the conflict
    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["program", "a.png", "-t", "lib", "-q", "-v"]);
        assert!(result.is_err());

        let verbose = Cli::parse_from(["program", "a.png", "-t", "lib", "-v"]);
        assert_eq!(verbose.log_level(), LevelFilter::Debug);
    }

    // Tests the default output sits next to the source with the mosaic suffix
    // Verified by writing into the working directory
    #[test]
    fn test_default_output_path() {
        let cli = Cli::parse_from(["program", "photos/beach.jpg", "-t", "lib"]);
        assert_eq!(cli.output_path(), PathBuf::from("photos/beach_mosaic.png"));
    }

    // Tests zero sizes are rejected before any file is read
    // Verified by skipping validation
    #[test]
    fn test_validate_rejects_zero_sizes() {
        for flag in ["-s", "-w", "-r"] {
            let cli = Cli::parse_from(["program", "missing.png", "-t", "lib", flag, "0"]);
            assert!(matches!(
                cli.validate(),
                Err(MosaicError::InvalidParameter { .. })
            ));
            assert!(matches!(
                MosaicProcessor::new(cli).process(),
                Err(MosaicError::InvalidParameter { .. })
            ));
        }
    }

    // Tests a full run writes a PNG of the rendered grid
    // Verified by skipping the export step
    #[test]
    fn test_process_writes_mosaic() {
        let dir = TempDir::new().unwrap();
        let tiles = dir.path().join("tiles");
        std::fs::create_dir(&tiles).unwrap();
        for (name, rgb) in [("a.jpg", [255, 0, 0]), ("b.jpg", [0, 0, 255])] {
            RgbImage::from_pixel(8, 8, Rgb(rgb))
                .save_with_format(tiles.join(name), ImageFormat::Jpeg)
                .unwrap();
        }
        let source = dir.path().join("source.png");
        RgbImage::from_fn(40, 20, |x, _| {
            if x < 20 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        })
        .save(&source)
        .unwrap();

        let output = dir.path().join("result.png");
        let cli = Cli::parse_from([
            "program".into(),
            source.into_os_string(),
            "-t".into(),
            tiles.into_os_string(),
            "-s".into(),
            "10".into(),
            "-w".into(),
            "40".into(),
            "-r".into(),
            "4".into(),
            "-o".into(),
            output.clone().into_os_string(),
            "-q".into(),
        ]);

        let written = MosaicProcessor::new(cli).process().unwrap();
        assert_eq!(written, output);

        let mosaic = image::open(&output).unwrap().to_rgb8();
        // 40x20 at tile size 10 is a 4x2 grid rendered at 4px per tile
        assert_eq!(mosaic.dimensions(), (16, 8));
        let left = mosaic.get_pixel(1, 1);
        let right = mosaic.get_pixel(14, 6);
        assert!(left[0] > 200 && left[2] < 60);
        assert!(right[2] > 200 && right[0] < 60);
    }
}
