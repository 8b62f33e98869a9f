use fitcalc_model::metrics::{ActivityLevel, Gender};

/// Parse a user-supplied token as a finite number. The empty string is
/// rejected outright, as are "inf" and "NaN" which `f64` would otherwise
/// accept.
pub fn parse_number(input: &str) -> Option<f64> {
    if input.is_empty() {
        return None;
    }
    input.parse::<f64>().ok().filter(|value| value.is_finite())
}

pub fn is_valid_number(input: &str) -> bool {
    parse_number(input).is_some()
}

pub fn is_valid_gender(input: &str) -> bool {
    input.parse::<Gender>().is_ok()
}

pub fn is_valid_activity_level(input: &str) -> bool {
    input.parse::<ActivityLevel>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validates_numbers() {
        let test_data = [
            ("", false),
            ("abc", false),
            ("3.5", true),
            ("-2", true),
            ("0", true),
            ("1e3", true),
            ("inf", false),
            ("NaN", false),
            ("4kg", false),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(is_valid_number(input), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn validates_gender() {
        let test_data = [
            ("male", true),
            ("MALE", true),
            ("Female", true),
            ("other", false),
            ("", false),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(is_valid_gender(input), expected, "Test case #{}", i);
        }
    }

    #[test]
    fn validates_activity_level() {
        let test_data = [
            ("sedentary", true),
            ("Active", true),
            ("veryActive", true),
            ("crazy", false),
            ("", false),
        ];

        for (i, (input, expected)) in test_data.into_iter().enumerate() {
            assert_eq!(is_valid_activity_level(input), expected, "Test case #{}", i);
        }
    }
}
