//! Stay-length anomaly labels

use crate::types::{venue_rules, AnomalyKind, Severity};

/// Labels unusually long or short intended stays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnomalyClassifier {
    /// Stays of at least this many minutes are long
    long_stay_minutes: u32,
    /// Stays under this many minutes are short
    short_stay_minutes: u32,
}

impl AnomalyClassifier {
    /// Classifier with the venue thresholds (90 and 20 minutes)
    pub fn new() -> Self {
        Self::with_thresholds(venue_rules::LONG_STAY_MINUTES, venue_rules::SHORT_STAY_MINUTES)
    }

    /// Classifier with custom thresholds
    pub fn with_thresholds(long_stay_minutes: u32, short_stay_minutes: u32) -> Self {
        Self { long_stay_minutes, short_stay_minutes }
    }

    /// Label a stay of `duration_minutes`, if it is anomalous at all
    pub fn classify(&self, duration_minutes: u32) -> Option<(AnomalyKind, Severity)> {
        if duration_minutes >= self.long_stay_minutes {
            Some((AnomalyKind::LongStay, Severity::High))
        } else if duration_minutes < self.short_stay_minutes {
            Some((AnomalyKind::ShortStay, Severity::Medium))
        } else {
            None
        }
    }
}

impl Default for AnomalyClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Label a stay with the venue thresholds
pub fn classify_stay(duration_minutes: u32) -> Option<(AnomalyKind, Severity)> {
    AnomalyClassifier::new().classify(duration_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify_stay(19), Some((AnomalyKind::ShortStay, Severity::Medium)));
        assert_eq!(classify_stay(20), None);
        assert_eq!(classify_stay(89), None);
        assert_eq!(classify_stay(90), Some((AnomalyKind::LongStay, Severity::High)));
    }

    #[test]
    fn test_dine_in_extremes() {
        assert_eq!(classify_stay(15), Some((AnomalyKind::ShortStay, Severity::Medium)));
        assert_eq!(classify_stay(120), Some((AnomalyKind::LongStay, Severity::High)));
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = AnomalyClassifier::with_thresholds(60, 30);
        assert_eq!(classifier.classify(60).map(|(kind, _)| kind), Some(AnomalyKind::LongStay));
        assert_eq!(classifier.classify(29).map(|(kind, _)| kind), Some(AnomalyKind::ShortStay));
        assert_eq!(classifier.classify(45), None);
    }
}
