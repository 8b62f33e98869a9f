use strum::EnumString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

/// Body metrics collected from the user. Weight, height and age are
/// expected to be positive; the prompt layer is responsible for
/// establishing that before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyMetrics {
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    gender: Gender,
    activity_level: ActivityLevel,
}

impl BodyMetrics {
    pub fn new(
        weight_kg: f64,
        height_cm: f64,
        age_years: i32,
        gender: Gender,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            gender,
            activity_level,
        }
    }
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
    pub fn age_years(&self) -> i32 {
        self.age_years
    }
    pub fn gender(&self) -> Gender {
        self.gender
    }
    pub fn activity_level(&self) -> ActivityLevel {
        self.activity_level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gender_case_insensitively() {
        let test_data = [
            ("male", Some(Gender::Male)),
            ("MALE", Some(Gender::Male)),
            ("Female", Some(Gender::Female)),
            ("fEmAlE", Some(Gender::Female)),
            ("other", None),
            ("", None),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                input.parse::<Gender>().ok(),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn parses_activity_level_case_insensitively() {
        let test_data = [
            ("sedentary", Some(ActivityLevel::Sedentary)),
            ("Light", Some(ActivityLevel::Light)),
            ("MODERATE", Some(ActivityLevel::Moderate)),
            ("Active", Some(ActivityLevel::Active)),
            ("veryactive", Some(ActivityLevel::VeryActive)),
            ("veryActive", Some(ActivityLevel::VeryActive)),
            ("crazy", None),
            ("very active", None),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(
                input.parse::<ActivityLevel>().ok(),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn multiplier_covers_all_levels() {
        let test_data = [
            (ActivityLevel::Sedentary, 1.2),
            (ActivityLevel::Light, 1.375),
            (ActivityLevel::Moderate, 1.55),
            (ActivityLevel::Active, 1.725),
            (ActivityLevel::VeryActive, 1.9),
        ];

        for (i, (level, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(level.multiplier(), expected, "Test case #{}", i);
        }
    }
}
