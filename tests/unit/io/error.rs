//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use mapcarve::MapError;
    use mapcarve::io::error::invalid_parameter;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MapError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("fill_probability", &120, &"must be at most 100");

        let message = error.to_string();
        assert!(message.contains("fill_probability"));
        assert!(message.contains("120"));
        assert!(message.contains("must be at most 100"));
        assert!(error.source().is_none());
    }

    // Tests InvalidMapText error reports the line
    // Verified by omitting line number from message
    #[test]
    fn test_invalid_map_text_error() {
        let error = MapError::InvalidMapText {
            line: 3,
            reason: "expected 5 cells, found 4".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("line 3"));
        assert!(message.contains("found 4"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = MapError::ImageExport {
            path: PathBuf::from("/tmp/cave_1.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/tmp/cave_1.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversion from io::Error
    // Verified by dropping the original error
    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");

        let error = MapError::from(io_error);

        assert!(matches!(error, MapError::FileSystem { .. }));
        assert!(error.to_string().contains("pipe closed"));
    }
}
