//! printf-style template parsing and rendering for doubles
//!
//! Semantics follow C `printf` for floating-point conversions:
//!
//! - default precision is 6
//! - `e`/`E` exponents render with an explicit sign and at least two digits
//! - `g`/`G` pick fixed or scientific notation by the exponent rule and trim
//!   trailing fractional zeros
//! - non-finite values render as `nan`/`inf` (upper-case variants for
//!   `F`/`E`/`G`) and are space-padded, never zero-padded

// =================================================================================================
// Parsed template
// =================================================================================================

/// A parsed per-value format template.
///
/// Holds the literal text around at most one conversion directive. Templates
/// without any recognizable directive render verbatim for every value.
#[derive(Clone, Debug)]
pub struct ValueFormat {
    prefix: String,
    directive: Option<Directive>,
    suffix: String,
}

impl ValueFormat {
    /// Parse a template. Never fails: unrecognizable `%` sequences are kept
    /// as literal text.
    pub fn parse(template: &str) -> Self {
        let chars: Vec<char> = template.chars().collect();

        let mut prefix = String::new();
        let mut directive: Option<Directive> = None;
        let mut suffix = String::new();

        let mut i = 0;
        while i < chars.len() {
            let literal = if directive.is_none() {
                &mut prefix
            } else {
                &mut suffix
            };

            if chars[i] != '%' {
                literal.push(chars[i]);
                i += 1;
                continue;
            }

            if chars.get(i + 1) == Some(&'%') {
                literal.push('%');
                i += 2;
                continue;
            }

            if directive.is_none() {
                if let Some((parsed, consumed)) = Directive::parse(&chars[i..]) {
                    directive = Some(parsed);
                    i += consumed;
                    continue;
                }
            }

            literal.push('%');
            i += 1;
        }

        Self {
            prefix,
            directive,
            suffix,
        }
    }

    /// Render one value through the template.
    pub fn apply(&self, value: f64) -> String {
        match &self.directive {
            Some(directive) => {
                format!("{}{}{}", self.prefix, directive.render(value), self.suffix)
            }
            None => format!("{}{}", self.prefix, self.suffix),
        }
    }

    /// Whether the template carries a conversion directive at all.
    pub fn has_directive(&self) -> bool {
        self.directive.is_some()
    }
}

// =================================================================================================
// Conversion directive
// =================================================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SignMode {
    /// Sign only on negative values (default).
    NegativeOnly,
    /// `+` flag: explicit sign on non-negative values.
    Always,
    /// ` ` flag: leading space on non-negative values.
    Space,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Conversion {
    Fixed { uppercase: bool },
    Scientific { uppercase: bool },
    General { uppercase: bool },
}

impl Conversion {
    fn uppercase(self) -> bool {
        match self {
            Conversion::Fixed { uppercase }
            | Conversion::Scientific { uppercase }
            | Conversion::General { uppercase } => uppercase,
        }
    }
}

#[derive(Clone, Debug)]
struct Directive {
    left_justify: bool,
    zero_pad: bool,
    sign: SignMode,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
}

impl Directive {
    /// Parse a directive from `chars`, which starts at a `%` that is not a
    /// `%%` escape. Returns the directive and the number of characters
    /// consumed, or `None` if the sequence is not a double conversion.
    fn parse(chars: &[char]) -> Option<(Self, usize)> {
        let mut i = 1;

        let mut left_justify = false;
        let mut zero_pad = false;
        let mut sign = SignMode::NegativeOnly;

        while let Some(&c) = chars.get(i) {
            match c {
                '-' => left_justify = true,
                '0' => zero_pad = true,
                '+' => sign = SignMode::Always,
                // '+' wins over ' ' regardless of flag order, as in printf
                ' ' => {
                    if sign == SignMode::NegativeOnly {
                        sign = SignMode::Space;
                    }
                }
                _ => break,
            }
            i += 1;
        }

        let mut width = 0usize;
        while let Some(d) = chars.get(i).and_then(|c| c.to_digit(10)) {
            width = width * 10 + d as usize;
            i += 1;
        }

        let mut precision = None;
        if chars.get(i) == Some(&'.') {
            i += 1;
            // a bare "." means precision 0
            let mut p = 0usize;
            while let Some(d) = chars.get(i).and_then(|c| c.to_digit(10)) {
                p = p * 10 + d as usize;
                i += 1;
            }
            precision = Some(p);
        }

        let conversion = match chars.get(i) {
            Some('f') => Conversion::Fixed { uppercase: false },
            Some('F') => Conversion::Fixed { uppercase: true },
            Some('e') => Conversion::Scientific { uppercase: false },
            Some('E') => Conversion::Scientific { uppercase: true },
            Some('g') => Conversion::General { uppercase: false },
            Some('G') => Conversion::General { uppercase: true },
            _ => return None,
        };
        i += 1;

        Some((
            Self {
                left_justify,
                zero_pad,
                sign,
                width,
                precision,
                conversion,
            },
            i,
        ))
    }

    fn render(&self, value: f64) -> String {
        let finite = value.is_finite();
        let body = if finite {
            self.render_finite(value)
        } else {
            self.render_nonfinite(value)
        };
        let body = self.apply_sign(body);
        self.pad(body, finite)
    }

    fn render_finite(&self, value: f64) -> String {
        let precision = self.precision.unwrap_or(6);
        match self.conversion {
            Conversion::Fixed { .. } => format!("{:.*}", precision, value),
            Conversion::Scientific { uppercase } => scientific(value, precision, uppercase),
            Conversion::General { uppercase } => general(value, precision, uppercase),
        }
    }

    fn render_nonfinite(&self, value: f64) -> String {
        let base = if value.is_nan() {
            "nan"
        } else if value.is_sign_positive() {
            "inf"
        } else {
            "-inf"
        };

        if self.conversion.uppercase() {
            base.to_uppercase()
        } else {
            base.to_string()
        }
    }

    fn apply_sign(&self, body: String) -> String {
        if body.starts_with('-') {
            return body;
        }
        match self.sign {
            SignMode::NegativeOnly => body,
            SignMode::Always => format!("+{}", body),
            SignMode::Space => format!(" {}", body),
        }
    }

    fn pad(&self, body: String, finite: bool) -> String {
        let len = body.chars().count();
        if len >= self.width {
            return body;
        }
        let fill = self.width - len;

        if self.left_justify {
            return format!("{}{}", body, " ".repeat(fill));
        }

        // zero-padding applies to numbers only; inf/nan are space-padded
        if self.zero_pad && finite {
            let zeros = "0".repeat(fill);
            return match body.chars().next() {
                Some(sign @ ('+' | '-' | ' ')) => {
                    format!("{}{}{}", sign, zeros, &body[sign.len_utf8()..])
                }
                _ => format!("{}{}", zeros, body),
            };
        }

        format!("{}{}", " ".repeat(fill), body)
    }
}

// =================================================================================================
// Conversion helpers
// =================================================================================================

/// `%e` rendering: mantissa with `precision` fractional digits, exponent with
/// explicit sign and at least two digits.
fn scientific(value: f64, precision: usize, uppercase: bool) -> String {
    let rendered = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = rendered.split_once('e') else {
        return rendered;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let marker = if uppercase { 'E' } else { 'e' };
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}{}{:02}", mantissa, marker, sign, exponent.abs())
}

/// `%g` rendering: fixed notation when the decimal exponent of the rounded
/// value lies in `[-4, precision)`, scientific otherwise; trailing fractional
/// zeros are trimmed either way.
fn general(value: f64, precision: usize, uppercase: bool) -> String {
    let significant = precision.max(1);

    // exponent of the value after rounding to `significant` digits
    let rounded = format!("{:.*e}", significant - 1, value);
    let exponent: i32 = rounded
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent >= -4 && exponent < significant as i32 {
        let fractional = (significant as i32 - 1 - exponent).max(0) as usize;
        trim_fractional_zeros(format!("{:.*}", fractional, value))
    } else {
        let rendered = scientific(value, significant - 1, uppercase);
        let marker = if uppercase { 'E' } else { 'e' };
        match rendered.split_once(marker) {
            Some((mantissa, exponent)) => format!(
                "{}{}{}",
                trim_fractional_zeros(mantissa.to_string()),
                marker,
                exponent
            ),
            None => rendered,
        }
    }
}

fn trim_fractional_zeros(rendered: String) -> String {
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

// =================================================================================================
// Tests
// =================================================================================================
