/// Largest grid dimension; keeps every cell addressable with `i32` queries.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Errors from grid construction and world generation.
#[derive(Debug, thiserror::Error)]
pub enum WorldGenError {
    #[error("map size must be between 1 and {max}, got {0}", max = MAX_DIMENSION)]
    InvalidMapSize(u32),
    #[error("tile size must be positive, got {0}")]
    InvalidTileSize(u32),
    #[error("grid dimensions must be between 1 and {max}, got {width}x{height}", max = MAX_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("grid expects {expected} cells, got {actual}")]
    GridShape { expected: usize, actual: usize },
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_errors_name_the_limit() {
        let msg = WorldGenError::InvalidMapSize(0).to_string();
        assert_eq!(msg, format!("map size must be between 1 and {MAX_DIMENSION}, got 0"));

        let msg = WorldGenError::InvalidDimensions { width: 0, height: 3 }.to_string();
        assert!(msg.ends_with("got 0x3"));
        assert!(msg.contains(&MAX_DIMENSION.to_string()));
    }

    #[test]
    fn yaml_errors_convert() {
        let parse = serde_yaml::from_str::<u32>("[unclosed").unwrap_err();
        let err: WorldGenError = parse.into();
        assert!(matches!(err, WorldGenError::ConfigParse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }
}
