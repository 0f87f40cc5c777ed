use serde::{Deserialize, Serialize};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights of the composite score components. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keywords: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 0.60,
            experience: 0.25,
            education: 0.10,
            keywords: 0.05,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.education + self.keywords
    }
}

/// Scoring rubric: component weights, decision thresholds and result count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub shortlist_threshold: f64,
    pub review_threshold: f64,
    pub top_n: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            shortlist_threshold: 0.70,
            review_threshold: 0.40,
            top_n: 3,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        let weights = [
            ("skills", self.weights.skills),
            ("experience", self.weights.experience),
            ("education", self.weights.education),
            ("keywords", self.weights.keywords),
        ];
        if let Some((component, value)) = weights
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            return Err(ScoringConfigError::NegativeWeight {
                component,
                value: *value,
            });
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoringConfigError::WeightSum { sum });
        }

        for threshold in [self.shortlist_threshold, self.review_threshold] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ScoringConfigError::ThresholdOutOfRange { value: threshold });
            }
        }
        if self.review_threshold > self.shortlist_threshold {
            return Err(ScoringConfigError::ThresholdOrder {
                review: self.review_threshold,
                shortlist: self.shortlist_threshold,
            });
        }

        if self.top_n == 0 {
            return Err(ScoringConfigError::ZeroTopN);
        }

        Ok(())
    }
}

/// Invalid scoring rubric. Always fatal at startup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringConfigError {
    #[error("weight for {component} must be a non-negative number, got {value}")]
    NegativeWeight {
        component: &'static str,
        value: f64,
    },
    #[error("scoring weights must sum to 1.0, got {sum:.6}")]
    WeightSum { sum: f64 },
    #[error("decision threshold {value} must lie within [0, 1]")]
    ThresholdOutOfRange { value: f64 },
    #[error("review threshold {review} exceeds shortlist threshold {shortlist}")]
    ThresholdOrder { review: f64, shortlist: f64 },
    #[error("top_n must be at least 1")]
    ZeroTopN,
}
