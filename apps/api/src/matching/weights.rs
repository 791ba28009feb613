/// Relative weight of the skill and experience sub-scores.
///
/// Constructed only through `Default` or `from_skill_weight`, so the two
/// weights always sum to 1 and the overall score stays within the range of
/// its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    skill: f64,
    experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.7,
            experience: 0.3,
        }
    }
}

impl MatchWeights {
    /// Returns `None` unless `skill` is a finite value in [0, 1].
    pub fn from_skill_weight(skill: f64) -> Option<Self> {
        if !skill.is_finite() || !(0.0..=1.0).contains(&skill) {
            return None;
        }
        Some(Self {
            skill,
            experience: 1.0 - skill,
        })
    }

    pub fn skill(&self) -> f64 {
        self.skill
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    /// Weighted sum of the two percentages, unrounded.
    pub fn combine(&self, skill_match: f64, experience_match: f64) -> f64 {
        self.skill * skill_match + self.experience * experience_match
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
