use crate::error::{FaceRefError, Pool};

/// One `p`, `p/t`, `p//n` or `p/t/n` entry of an `f` line, still 1-based and signed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FaceRef {
    pub(crate) position: i64,
    pub(crate) texcoord: Option<i64>,
    pub(crate) normal: Option<i64>,
}

impl FaceRef {
    pub(crate) fn parse(token: &str) -> Result<Self, FaceRefError> {
        let mut parts = token.split('/');

        let position = match parts.next() {
            Some(p) if !p.is_empty() => parse_index(p)?,
            _ => return Err(FaceRefError::MissingPosition),
        };
        let texcoord = parse_optional(parts.next())?;
        let normal = parse_optional(parts.next())?;

        if parts.next().is_some() {
            return Err(FaceRefError::TooManyComponents);
        }

        Ok(Self {
            position,
            texcoord,
            normal,
        })
    }
}

fn parse_index(value: &str) -> Result<i64, FaceRefError> {
    match value.parse::<i64>() {
        Ok(0) => Err(FaceRefError::ZeroIndex),
        Ok(index) => Ok(index),
        Err(_) => Err(FaceRefError::InvalidIndex(value.into())),
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<i64>, FaceRefError> {
    match value {
        Some(v) if !v.is_empty() => parse_index(v).map(Some),
        _ => Ok(None),
    }
}

/// Maps a 1-based index, or a negative one counting back from the end, onto a slot of a
/// pool currently holding `len` elements.
pub(crate) fn resolve(index: i64, len: usize, pool: Pool) -> Result<usize, FaceRefError> {
    let slot = if index > 0 {
        index - 1
    } else {
        len as i64 + index
    };

    if slot < 0 || slot as usize >= len {
        return Err(FaceRefError::OutOfRange { pool, index, len });
    }

    Ok(slot as usize)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_face_ref() -> Result<(), FaceRefError> {
        assert_eq!(
            FaceRef::parse("1")?,
            FaceRef {
                position: 1,
                ..FaceRef::default()
            }
        );
        assert_eq!(
            FaceRef::parse("1/3")?,
            FaceRef {
                position: 1,
                texcoord: Some(3),
                ..FaceRef::default()
            }
        );
        assert_eq!(
            FaceRef::parse("1//3")?,
            FaceRef {
                position: 1,
                normal: Some(3),
                ..FaceRef::default()
            }
        );
        assert_eq!(
            FaceRef::parse("-1/-2/-3")?,
            FaceRef {
                position: -1,
                texcoord: Some(-2),
                normal: Some(-3),
            }
        );

        Ok(())
    }

    #[test]
    fn test_parse_face_ref_errors() {
        assert_eq!(FaceRef::parse("/1/1"), Err(FaceRefError::MissingPosition));
        assert_eq!(FaceRef::parse("0"), Err(FaceRefError::ZeroIndex));
        assert_eq!(
            FaceRef::parse("1/a"),
            Err(FaceRefError::InvalidIndex("a".into()))
        );
        assert_eq!(
            FaceRef::parse("1/2/3/4"),
            Err(FaceRefError::TooManyComponents)
        );
    }

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(1, 5, Pool::Position), Ok(0));
        assert_eq!(resolve(5, 5, Pool::Position), Ok(4));
        assert_eq!(resolve(-1, 5, Pool::Position), Ok(4));
        assert_eq!(resolve(-5, 5, Pool::Position), Ok(0));
        assert_eq!(
            resolve(6, 5, Pool::Normal),
            Err(FaceRefError::OutOfRange {
                pool: Pool::Normal,
                index: 6,
                len: 5
            })
        );
        assert_eq!(
            resolve(-1, 0, Pool::Texcoord),
            Err(FaceRefError::OutOfRange {
                pool: Pool::Texcoord,
                index: -1,
                len: 0
            })
        );
    }
}
