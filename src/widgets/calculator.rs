//! Two-operand calculator.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' | 'x' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Outcome of the last operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcResult {
    Value(f64),
    /// Division by zero
    Error,
}

impl fmt::Display for CalcResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcResult::Value(v) => write!(f, "{}", v),
            CalcResult::Error => write!(f, "Err"),
        }
    }
}

/// Calculator state (rendering-agnostic)
#[derive(Debug, Clone)]
pub struct CalculatorState {
    pub a: String,
    pub b: String,
    pub focused: Operand,
    pub result: Option<CalcResult>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            a: String::new(),
            b: String::new(),
            focused: Operand::A,
            result: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operand(&self, which: Operand) -> &str {
        match which {
            Operand::A => &self.a,
            Operand::B => &self.b,
        }
    }

    pub fn set_operand(&mut self, which: Operand, text: &str) {
        match which {
            Operand::A => self.a = text.to_string(),
            Operand::B => self.b = text.to_string(),
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            Operand::A => Operand::B,
            Operand::B => Operand::A,
        };
    }

    /// Whether `c` can be typed into a field currently holding `current`.
    /// A minus sign is only a sign at the start of an empty field.
    pub fn accepts(current: &str, c: char) -> bool {
        c.is_ascii_digit() || (c == '.' && !current.contains('.')) || (c == '-' && current.is_empty())
    }

    /// Apply `op` to the operands; blank or unparsable operands count as zero
    pub fn compute(&mut self, op: Operator) -> CalcResult {
        let a = parse_operand(&self.a);
        let b = parse_operand(&self.b);
        let result = match op {
            Operator::Add => CalcResult::Value(a + b),
            Operator::Sub => CalcResult::Value(a - b),
            Operator::Mul => CalcResult::Value(a * b),
            Operator::Div if b == 0.0 => CalcResult::Error,
            Operator::Div => CalcResult::Value(a / b),
        };
        self.result = Some(result);
        result
    }
}

fn parse_operand(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calc(a: &str, b: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        state.set_operand(Operand::A, a);
        state.set_operand(Operand::B, b);
        state
    }

    #[test]
    fn test_operations() {
        let mut state = calc("6", "3");
        assert_eq!(state.compute(Operator::Add), CalcResult::Value(9.0));
        assert_eq!(state.compute(Operator::Sub), CalcResult::Value(3.0));
        assert_eq!(state.compute(Operator::Mul), CalcResult::Value(18.0));
        assert_eq!(state.compute(Operator::Div), CalcResult::Value(2.0));
        assert_eq!(state.result.map(|r| r.to_string()), Some("2".to_string()));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut state = calc("1", "0");
        assert_eq!(state.compute(Operator::Div), CalcResult::Error);
        assert_eq!(CalcResult::Error.to_string(), "Err");
    }

    #[test]
    fn test_blank_operands_are_zero() {
        let mut state = calc("", "2.5");
        assert_eq!(state.compute(Operator::Sub), CalcResult::Value(-2.5));
        assert_eq!(state.compute(Operator::Div), CalcResult::Value(0.0));
    }

    #[test]
    fn test_accepts() {
        assert!(CalculatorState::accepts("", '-'));
        assert!(!CalculatorState::accepts("1", '-'));
        assert!(CalculatorState::accepts("1", '.'));
        assert!(!CalculatorState::accepts("1.5", '.'));
        assert!(!CalculatorState::accepts("", 'a'));
    }

    #[test]
    fn test_operator_chars() {
        assert_eq!(Operator::from_char('x'), Some(Operator::Mul));
        assert_eq!(Operator::from_char('/').map(|o| o.symbol()), Some('/'));
        assert_eq!(Operator::from_char('%'), None);
    }
}
