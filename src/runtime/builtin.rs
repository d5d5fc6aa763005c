use crate::error::{ErrorKind, PResult};

pub type BinaryFn = fn(f64, f64) -> PResult<f64>;

#[derive(Debug, Clone, Copy)]
pub struct Operator {
    pub name: &'static str,
    pub func: BinaryFn,
}

impl Operator {
    pub const ARITY: usize = 2;

    pub fn apply(&self, args: &[f64]) -> PResult<f64> {
        match *args {
            [lhs, rhs] => (self.func)(lhs, rhs),
            _ => Err(ErrorKind::ArityMismatch {
                name: self.name.to_string(),
                expected: Self::ARITY,
                found: args.len(),
            }),
        }
    }
}

/// The closed set of functions a formula may call.
pub static OPERATORS: [Operator; 4] = [
    Operator {
        name: "Add",
        func: native::add,
    },
    Operator {
        name: "Subtract",
        func: native::subtract,
    },
    Operator {
        name: "Multiply",
        func: native::multiply,
    },
    Operator {
        name: "Divide",
        func: native::divide,
    },
];

pub fn lookup(name: &str) -> PResult<&'static Operator> {
    OPERATORS
        .iter()
        .find(|op| op.name == name)
        .ok_or_else(|| ErrorKind::UnknownFunction(name.to_string()))
}

pub(super) mod native {
    use crate::error::{ErrorKind, PResult};

    pub fn add(a: f64, b: f64) -> PResult<f64> {
        Ok(a + b)
    }

    pub fn subtract(a: f64, b: f64) -> PResult<f64> {
        Ok(a - b)
    }

    pub fn multiply(a: f64, b: f64) -> PResult<f64> {
        Ok(a * b)
    }

    pub fn divide(a: f64, b: f64) -> PResult<f64> {
        if b == 0.0 {
            return Err(ErrorKind::DivisionByZero);
        }
        Ok(a / b)
    }
}

#[cfg(test)]
mod test {
    use super::lookup;
    use crate::error::ErrorKind;

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(lookup("Add").is_ok());
        assert_eq!(
            lookup("add").unwrap_err(),
            ErrorKind::UnknownFunction("add".into())
        );
    }

    #[test]
    fn apply_operators() {
        assert_eq!(lookup("Add").unwrap().apply(&[3.0, 2.0]).unwrap(), 5.0);
        assert_eq!(lookup("Subtract").unwrap().apply(&[3.0, 5.0]).unwrap(), -2.0);
        assert_eq!(lookup("Multiply").unwrap().apply(&[3.0, 2.0]).unwrap(), 6.0);
        assert_eq!(lookup("Divide").unwrap().apply(&[1.0, 4.0]).unwrap(), 0.25);
    }

    #[test]
    fn divide_by_zero() {
        let err = lookup("Divide").unwrap().apply(&[1.0, 0.0]).unwrap_err();
        assert_eq!(err, ErrorKind::DivisionByZero);
    }

    #[test]
    fn arity_is_checked() {
        let err = lookup("Add").unwrap().apply(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ErrorKind::ArityMismatch {
                name: "Add".into(),
                expected: 2,
                found: 3
            }
        );
    }
}
