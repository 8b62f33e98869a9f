use fitcalc_model::metrics::{ActivityLevel, BodyMetrics, Gender};
use fitcalc_model::operation::Operator;

use crate::{eval, fitness, validate};

const MENU_BANNER: &[&str] = &[
    "",
    "===== Calculator Menu =====",
    "1. Basic Arithmetic (+, -, *, /)",
    "2. Fitness Calorie Calculator",
    "3. Exit",
    "==========================",
    "",
];

/// One prompt of the interactive session. Chain states carry the fields
/// collected so far, so a transition never needs anything beyond the
/// current state and the line just read.
#[derive(Debug, Clone, PartialEq)]
pub enum State {
    Menu,
    AskOperator,
    AskOperands {
        operator: String,
    },
    AskWeight,
    AskHeight {
        weight_kg: f64,
    },
    AskAge {
        weight_kg: f64,
        height_cm: f64,
    },
    AskGender {
        weight_kg: f64,
        height_cm: f64,
        age_years: i32,
    },
    AskActivityLevel {
        weight_kg: f64,
        height_cm: f64,
        age_years: i32,
        gender: Gender,
    },
    Done,
}

impl State {
    /// Lines printed before the prompt itself. Only the menu has any.
    pub fn banner(&self) -> &'static [&'static str] {
        match self {
            State::Menu => MENU_BANNER,
            _ => &[],
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            State::Menu => "Choose an option (1, 2, or 3): ",
            State::AskOperator => "Enter operation (+, -, *, /): ",
            State::AskOperands { .. } => "Enter two numbers separated by space: ",
            State::AskWeight => "Enter weight (kg): ",
            State::AskHeight { .. } => "Enter height (cm): ",
            State::AskAge { .. } => "Enter age: ",
            State::AskGender { .. } => "Enter gender (male/female): ",
            State::AskActivityLevel { .. } => {
                "Enter activity level (sedentary/light/moderate/active/veryActive): "
            }
            State::Done => "",
        }
    }

    /// Consume one line of input and produce the next state along with the
    /// lines to print. A failed operand line restarts the arithmetic chain
    /// at the operator prompt; a failed fitness field restarts the whole
    /// fitness chain at the weight prompt.
    pub fn step(self, input: &str) -> (State, Vec<String>) {
        match self {
            State::Menu => match input {
                "1" => (State::AskOperator, vec![]),
                "2" => (State::AskWeight, vec![]),
                "3" => (
                    State::Done,
                    vec!["Thank you for using the Calculator App. Goodbye!".to_string()],
                ),
                _ => (
                    State::Menu,
                    vec!["Invalid choice. Please try again.".to_string()],
                ),
            },
            State::AskOperator => {
                if input.parse::<Operator>().is_ok() {
                    (
                        State::AskOperands {
                            operator: input.to_string(),
                        },
                        vec![],
                    )
                } else {
                    (
                        State::AskOperator,
                        vec!["Invalid operation. Please try again.".to_string()],
                    )
                }
            }
            State::AskOperands { operator } => {
                let tokens: Vec<&str> = input.split_whitespace().collect();
                let operands = match tokens.as_slice() {
                    [a, b] => validate::parse_number(a).zip(validate::parse_number(b)),
                    _ => None,
                };
                match operands {
                    Some((a, b)) => {
                        let message = match eval::evaluate(&operator, a, b) {
                            Ok(value) => format!("Result: {}", value),
                            Err(e) => format!("Result: {}", e),
                        };
                        (State::Menu, vec![message])
                    }
                    None => (
                        State::AskOperator,
                        vec!["Invalid input. Please enter valid numbers.".to_string()],
                    ),
                }
            }
            State::AskWeight => match validate::parse_number(input) {
                Some(weight_kg) => (State::AskHeight { weight_kg }, vec![]),
                None => (
                    State::AskWeight,
                    vec!["Invalid weight. Please enter a valid number.".to_string()],
                ),
            },
            State::AskHeight { weight_kg } => match validate::parse_number(input) {
                Some(height_cm) => (
                    State::AskAge {
                        weight_kg,
                        height_cm,
                    },
                    vec![],
                ),
                None => (
                    State::AskWeight,
                    vec!["Invalid height. Please enter a valid number.".to_string()],
                ),
            },
            State::AskAge {
                weight_kg,
                height_cm,
            } => match validate::parse_number(input) {
                // Fractional ages pass the numeric gate and truncate.
                Some(age) => (
                    State::AskGender {
                        weight_kg,
                        height_cm,
                        age_years: age as i32,
                    },
                    vec![],
                ),
                None => (
                    State::AskWeight,
                    vec!["Invalid age. Please enter a valid number.".to_string()],
                ),
            },
            State::AskGender {
                weight_kg,
                height_cm,
                age_years,
            } => match input.parse::<Gender>() {
                Ok(gender) => (
                    State::AskActivityLevel {
                        weight_kg,
                        height_cm,
                        age_years,
                        gender,
                    },
                    vec![],
                ),
                Err(_) => (
                    State::AskWeight,
                    vec!["Invalid gender. Please enter either male or female.".to_string()],
                ),
            },
            State::AskActivityLevel {
                weight_kg,
                height_cm,
                age_years,
                gender,
            } => match input.parse::<ActivityLevel>() {
                Ok(activity_level) => {
                    let metrics =
                        BodyMetrics::new(weight_kg, height_cm, age_years, gender, activity_level);
                    let calories = fitness::estimate_calories(&metrics);
                    (
                        State::Menu,
                        vec![format!("Estimated daily calorie needs: {}", calories)],
                    )
                }
                Err(_) => (
                    State::AskWeight,
                    vec!["Invalid activity level. Please choose from the given options.".to_string()],
                ),
            },
            State::Done => (State::Done, vec![]),
        }
    }
}
