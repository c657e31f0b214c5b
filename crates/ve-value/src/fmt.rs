//! Text rendering: `[value+/-stat_error+/-syst_error]`.
//!
//! The formatter's precision and `+` flag apply to each of the three
//! numbers; width, fill and alignment apply to the bracketed string as a
//! whole. [`LowerExp`] and [`UpperExp`] switch the numbers to scientific
//! notation. Padding always uses the fill character; the `0` flag is
//! ignored, since zeros in front of the bracket would read as digits.
//!
//! ```
//! use ve_value::ValueError;
//!
//! let z = ValueError::new(1234.5, 0.5, 2.0);
//! assert_eq!(format!("{z}"), "[1234.5+/-0.5+/-2]");
//! assert_eq!(format!("{z:.1}"), "[1234.5+/-0.5+/-2.0]");
//! assert_eq!(format!("{z:.2e}"), "[1.23e3+/-5.00e-1+/-2.00e0]");
//! assert_eq!(format!("{z:>22}"), "    [1234.5+/-0.5+/-2]");
//! ```

use crate::real::Real;
use crate::value::ValueError;
use std::fmt::{self, Display, Formatter, LowerExp, UpperExp};

#[derive(Clone, Copy)]
enum Notation {
    Plain,
    LowerExp,
    UpperExp,
}

fn number<T: Real>(x: T, notation: Notation, f: &Formatter<'_>) -> String {
    let mut s = match (notation, f.precision()) {
        (Notation::Plain, Some(p)) => format!("{x:.p$}"),
        (Notation::Plain, None) => format!("{x}"),
        (Notation::LowerExp, Some(p)) => format!("{x:.p$e}"),
        (Notation::LowerExp, None) => format!("{x:e}"),
        (Notation::UpperExp, Some(p)) => format!("{x:.p$E}"),
        (Notation::UpperExp, None) => format!("{x:E}"),
    };
    // NaN is unordered against zero and gets no sign.
    if f.sign_plus() && !s.starts_with('-') && x.partial_cmp(&T::zero()).is_some() {
        s.insert(0, '+');
    }
    s
}

fn render<T: Real>(z: &ValueError<T>, notation: Notation, f: &mut Formatter<'_>) -> fmt::Result {
    let body = format!(
        "[{}+/-{}+/-{}]",
        number(z.value(), notation, f),
        number(z.stat_error(), notation, f),
        number(z.syst_error(), notation, f),
    );

    let len = body.chars().count();
    let padding = match f.width() {
        Some(width) if width > len => width - len,
        _ => return f.write_str(&body),
    };
    // Right-aligned by default, like the numbers inside.
    let (pre, post) = match f.align() {
        Some(fmt::Alignment::Left) => (0, padding),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Right) | None => (padding, 0),
    };
    let fill = f.fill();
    for _ in 0..pre {
        write!(f, "{fill}")?;
    }
    f.write_str(&body)?;
    for _ in 0..post {
        write!(f, "{fill}")?;
    }
    Ok(())
}

impl<T: Real> Display for ValueError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(self, Notation::Plain, f)
    }
}

impl<T: Real> LowerExp for ValueError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(self, Notation::LowerExp, f)
    }
}

impl<T: Real> UpperExp for ValueError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        render(self, Notation::UpperExp, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_default() {
        let z = ValueError::new(2.0, 0.5, 0.25);
        assert_eq!(z.to_string(), "[2+/-0.5+/-0.25]");
        assert_eq!(ValueError::exact(-3.0).to_string(), "[-3+/-0+/-0]");
    }

    #[test]
    fn test_display_precision_applies_to_all_numbers() {
        let z = ValueError::new(6.0, 0.3, 0.0);
        assert_eq!(format!("{z:.3}"), "[6.000+/-0.300+/-0.000]");
        assert_eq!(format!("{z:.0}"), "[6+/-0+/-0]");
    }

    #[test]
    fn test_display_sign_plus() {
        let z = ValueError::new(-1.5, 0.5, 0.0);
        assert_eq!(format!("{z:+}"), "[-1.5+/-+0.5+/-+0]");
    }

    #[test]
    fn test_scientific() {
        let z = ValueError::new(1500.0, 25.0, 0.0);
        assert_eq!(format!("{z:e}"), "[1.5e3+/-2.5e1+/-0e0]");
        assert_eq!(format!("{z:.1E}"), "[1.5E3+/-2.5E1+/-0.0E0]");
    }

    #[test]
    fn test_width_pads_whole_string() {
        let z = ValueError::new(1.0, 0.5, 0.5);
        assert_eq!(format!("{z:<16}|"), "[1+/-0.5+/-0.5] |");
        assert_eq!(format!("{z:*^18}"), "*[1+/-0.5+/-0.5]**");
        assert_eq!(format!("{z:4}"), "[1+/-0.5+/-0.5]");
    }

    #[test]
    fn test_zero_flag_pads_with_fill() {
        let z = ValueError::new(1.0, 0.5, 0.5);
        assert_eq!(format!("{z:020}"), "     [1+/-0.5+/-0.5]");
        assert_eq!(format!("{z:<020}|"), "[1+/-0.5+/-0.5]     |");
    }

    #[test]
    fn test_display_f32() {
        let z = ValueError::new(0.5_f32, 0.25, 0.125);
        assert_eq!(format!("{z}"), "[0.5+/-0.25+/-0.125]");
    }

    #[test]
    fn test_display_nan() {
        let z = ValueError::with_stat(-1.0_f64, 0.1).ln();
        assert_eq!(format!("{z:+.1}"), "[NaN+/-+0.1+/-+0.0]");
    }
}
