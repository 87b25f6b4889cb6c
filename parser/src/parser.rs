use common::error::NumericError;

peg::parser!(
    pub grammar parser() for str {
        rule DIGITS()   = ['0'..='9']+
        rule SIGN()     = ['+' | '-']
        rule EXPONENT() = ['e' | 'E'] SIGN()? DIGITS()

        rule MANTISSA()
        = DIGITS() ("." ['0'..='9']*)?
        / "." DIGITS()

        rule SPECIAL()
        = w:$(['a'..='z' | 'A'..='Z']+) {?
            if ["inf", "infinity", "nan"].iter().any(|s| w.eq_ignore_ascii_case(s)) {
                Ok(())
            } else {
                Err("inf or nan")
            }
        }

        pub rule int() -> Result<i64, NumericError>
        = quiet!{ i:$("-"? DIGITS()) { i.parse().map_err(|_| NumericError::Range) } }
        / expected!("integer")

        // a finite literal that rounds to infinity is out of range
        pub rule float() -> Result<f64, NumericError>
        = quiet!{ f:$(SIGN()? MANTISSA() EXPONENT()?) {
            match f.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(NumericError::Range),
            }
        } }
        / quiet!{ f:$(SIGN()? SPECIAL()) { f.parse().map_err(|_| NumericError::Syntax) } }
        / expected!("float")
    }
);
