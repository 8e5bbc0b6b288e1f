//! Forgiving numeric field parsing shared by the `.obj` and `.mtl` parsers.
//!
//! Malformed numbers never abort a load: they become `0` and leave a [`Warning`].

use log::warn;
use quickobj_format::{Vec2, Vec3};

use crate::error::Warning;

pub(crate) fn report(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{}", warning);
    warnings.push(warning);
}

/// Absent tokens are `0.0` without a warning; tokens that fail to parse warn.
pub(crate) fn float(token: Option<&str>, line: usize, warnings: &mut Vec<Warning>) -> f32 {
    match token {
        None => 0.0,
        Some(token) => token.parse().unwrap_or_else(|_| {
            report(
                warnings,
                Warning::MalformedNumericField {
                    line,
                    token: token.into(),
                },
            );
            0.0
        }),
    }
}

pub(crate) fn int(token: Option<&str>, line: usize, warnings: &mut Vec<Warning>) -> i32 {
    match token {
        None => 0,
        Some(token) => token.parse().unwrap_or_else(|_| {
            report(
                warnings,
                Warning::MalformedNumericField {
                    line,
                    token: token.into(),
                },
            );
            0
        }),
    }
}

pub(crate) fn vec3<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
    warnings: &mut Vec<Warning>,
) -> Vec3 {
    let x = float(fields.next(), line, warnings);
    let y = float(fields.next(), line, warnings);
    let z = float(fields.next(), line, warnings);
    Vec3::new(x, y, z)
}

pub(crate) fn vec2<'a>(
    mut fields: impl Iterator<Item = &'a str>,
    line: usize,
    warnings: &mut Vec<Warning>,
) -> Vec2 {
    let u = float(fields.next(), line, warnings);
    let v = float(fields.next(), line, warnings);
    Vec2::new(u, v)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_float_defaults() {
        let mut warnings = Vec::new();

        assert_eq!(float(Some("-1.5e1"), 1, &mut warnings), -15.0);
        assert_eq!(float(None, 1, &mut warnings), 0.0);
        assert!(warnings.is_empty());

        assert_eq!(float(Some("1.0abc"), 7, &mut warnings), 0.0);
        assert_eq!(
            warnings,
            vec![Warning::MalformedNumericField {
                line: 7,
                token: "1.0abc".into()
            }]
        );
    }

    #[test]
    fn test_vec3_missing_components() {
        let mut warnings = Vec::new();
        let v = vec3("1 x".split(' '), 2, &mut warnings);

        assert_eq!(v, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_int() {
        let mut warnings = Vec::new();

        assert_eq!(int(Some("2"), 1, &mut warnings), 2);
        assert_eq!(int(Some("2.0"), 1, &mut warnings), 0);
        assert_eq!(warnings.len(), 1);
    }
}
