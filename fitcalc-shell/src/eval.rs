use fitcalc_model::operation::{EvalError, Operator};

pub fn evaluate(operator: &str, a: f64, b: f64) -> Result<f64, EvalError> {
    match operator.parse::<Operator>()? {
        Operator::Add => Ok(a + b),
        Operator::Subtract => Ok(a - b),
        Operator::Multiply => Ok(a * b),
        Operator::Divide if b == 0.0 => Err(EvalError::DivisionByZero),
        Operator::Divide => Ok(a / b),
    }
}
