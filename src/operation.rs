// operation.rs

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div if rhs == 0.0 => Err(CalcError::DivisionByZero),
            Operator::Div => Ok(lhs / rhs),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Sub),
            "*" => Ok(Operator::Mul),
            "/" => Ok(Operator::Div),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operation {
    pub operator: Operator,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

impl Operation {
    // Only constructor: the result always matches the operands, and a
    // division with a zero divisor never produces a record.
    pub fn evaluate(operator: Operator, operand1: f64, operand2: f64) -> Result<Self, CalcError> {
        let result = operator.apply(operand1, operand2)?;
        Ok(Self {
            operator,
            operand1,
            operand2,
            result,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {} {:.2} = {:.2}",
            self.operand1, self.operator, self.operand2, self.result
        )
    }
}

pub fn parse_number(token: &str) -> Result<f64, CalcError> {
    let token = token.trim();
    token
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_each_operator() {
        assert_eq!(Operator::Add.apply(1.0, 2.0), Ok(3.0));
        assert_eq!(Operator::Sub.apply(1.0, 2.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Div.apply(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_division_by_zero_is_rejected() {
        assert_eq!(Operator::Div.apply(5.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(
            Operation::evaluate(Operator::Div, 5.0, 0.0),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_operator_token_parsing() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!(" / ".parse::<Operator>(), Ok(Operator::Div));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn test_display_uses_two_decimals() {
        let op = Operation::evaluate(Operator::Div, 6.0, 3.0).unwrap();
        assert_eq!(op.to_string(), "6.00 / 3.00 = 2.00");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 2.5 "), Ok(2.5));
        assert_eq!(parse_number("-4"), Ok(-4.0));
        assert_eq!(
            parse_number("abc"),
            Err(CalcError::InvalidNumber("abc".to_string()))
        );
    }
}
