use super::passes::PassKind;
use std::collections::HashMap;
use std::time::Duration;

/// Pacing of a pipeline run
///
/// Each pass sleeps before doing its work so an interactive progress display
/// has something to show. The pauses carry no meaning for the result and can
/// be switched off with [`PipelineConfig::instant`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub delays_enabled: bool,
    delay_overrides: HashMap<PassKind, Duration>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            delays_enabled: true,
            delay_overrides: HashMap::new(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// No artificial pauses at all
    pub fn instant() -> Self {
        Self::default().with_delays_enabled(false)
    }

    pub fn with_delays_enabled(mut self, enabled: bool) -> Self {
        self.delays_enabled = enabled;
        self
    }

    pub fn with_delay(mut self, kind: PassKind, delay: Duration) -> Self {
        self.delay_overrides.insert(kind, delay);
        self
    }

    /// Pause applied before `kind` runs
    pub fn delay_for(&self, kind: PassKind) -> Duration {
        if !self.delays_enabled {
            return Duration::ZERO;
        }
        self.delay_overrides
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.default_delay())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert!(config.delays_enabled);
        assert_eq!(
            config.delay_for(PassKind::RenameIdentifiers),
            Duration::from_millis(800)
        );
        assert_eq!(config.delay_for(PassKind::Mutate), Duration::from_millis(2000));
    }

    #[test]
    fn test_instant_zeroes_every_delay() {
        let config = PipelineConfig::instant().with_delay(PassKind::InjectJunk, Duration::from_secs(3));
        for kind in PassKind::ORDER {
            assert_eq!(config.delay_for(kind), Duration::ZERO);
        }
    }

    #[test]
    fn test_builder_pattern() {
        let config = PipelineConfig::new()
            .with_delay(PassKind::InjectCanary, Duration::from_millis(5))
            .with_delay(PassKind::GenerateArtifact, Duration::ZERO);

        assert_eq!(config.delay_for(PassKind::InjectCanary), Duration::from_millis(5));
        assert_eq!(config.delay_for(PassKind::GenerateArtifact), Duration::ZERO);
        assert_eq!(config.delay_for(PassKind::InjectJunk), Duration::from_millis(600));
    }
}
