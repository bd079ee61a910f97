use crate::error::{ErrorKind, Result};

pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Limits applied while building a report tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomConfig {
    /// Maximum element nesting depth
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

/// Tracks nesting depth while building
#[derive(Debug, Default)]
pub struct BuildContext {
    current_depth: usize,
}

impl Default for DomConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl DomConfig {
    pub fn validate_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(ErrorKind::MaxSizeExceeded { max: self.max_size }.into());
        }
        Ok(())
    }
}

impl BuildContext {
    pub const fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn enter_nested(&mut self, config: &DomConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ErrorKind::MaxDepthExceeded {
                max: config.max_depth,
            }
            .into());
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub const fn depth(&self) -> usize {
        self.current_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit() {
        let config = DomConfig {
            max_depth: 2,
            ..DomConfig::default()
        };
        let mut context = BuildContext::new();
        assert!(context.enter_nested(&config).is_ok());
        assert!(context.enter_nested(&config).is_ok());
        let err = context.enter_nested(&config);
        assert!(matches!(
            err.as_ref().map_err(|e| e.kind()),
            Err(ErrorKind::MaxDepthExceeded { max: 2 })
        ));
    }

    #[test]
    fn test_exit_restores_depth() {
        let config = DomConfig::default();
        let mut context = BuildContext::new();
        assert!(context.enter_nested(&config).is_ok());
        context.exit_nested();
        context.exit_nested();
        assert_eq!(context.depth(), 0);
    }

    #[test]
    fn test_size_limit() {
        let config = DomConfig {
            max_size: 4,
            ..DomConfig::default()
        };
        assert!(config.validate_size(4).is_ok());
        assert!(config.validate_size(5).is_err());
    }
}
