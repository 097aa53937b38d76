//! Decoding of the translation part of a computed transform.
//!
//! Hosts report the resolved transform, which is either absent, `none`, a
//! 2D `matrix(a, b, c, d, e, f)` or a 3D `matrix3d(...)` with 16
//! components. Anything else (authored shorthand, percentages) cannot be
//! resolved to pixels here and decodes to a zero offset.

use resizable_core::math::IVec3;

/// Shape of a resolved transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixKind {
    /// `matrix(...)`, 6 components.
    Affine2d,
    /// `matrix3d(...)`, 16 components.
    Matrix3d,
}

impl MatrixKind {
    /// Number of components in the function arguments.
    pub fn component_count(&self) -> usize {
        match self {
            MatrixKind::Affine2d => 6,
            MatrixKind::Matrix3d => 16,
        }
    }

    /// Indices of the x, y and z translation components.
    fn translation_indices(&self) -> [Option<usize>; 3] {
        match self {
            MatrixKind::Affine2d => [Some(4), Some(5), None],
            MatrixKind::Matrix3d => [Some(12), Some(13), Some(14)],
        }
    }
}

/// Reasons a transform string could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Not a `matrix(...)` or `matrix3d(...)` function.
    NotAMatrix,
    /// The function had the wrong number of components.
    ComponentCount { kind: MatrixKind, found: usize },
    /// A component was not a number.
    InvalidComponent(String),
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeError::NotAMatrix => write!(f, "Transform is not a resolved matrix"),
            DecodeError::ComponentCount { kind, found } => write!(
                f,
                "Expected {} matrix components, found {}",
                kind.component_count(),
                found
            ),
            DecodeError::InvalidComponent(raw) => {
                write!(f, "Matrix component is not a number: {:?}", raw)
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Split `matrix(...)`/`matrix3d(...)` into its kind and argument list.
fn split_matrix(transform: &str) -> Result<(MatrixKind, &str), DecodeError> {
    let transform = transform.trim();
    let (kind, rest) = if let Some(rest) = transform.strip_prefix("matrix3d") {
        (MatrixKind::Matrix3d, rest)
    } else if let Some(rest) = transform.strip_prefix("matrix") {
        (MatrixKind::Affine2d, rest)
    } else {
        return Err(DecodeError::NotAMatrix);
    };

    let args = rest
        .trim_start()
        .strip_prefix('(')
        .and_then(|args| args.strip_suffix(')'))
        .ok_or(DecodeError::NotAMatrix)?;
    Ok((kind, args))
}

/// Parse one component, truncating toward zero.
fn parse_component(raw: &str) -> Result<i32, DecodeError> {
    let raw = raw.trim();
    let value: f64 = raw
        .parse()
        .map_err(|_| DecodeError::InvalidComponent(raw.to_string()))?;
    if !value.is_finite() {
        return Err(DecodeError::InvalidComponent(raw.to_string()));
    }
    // `as` saturates at the i32 range.
    Ok(value.trunc() as i32)
}

/// Decode the translation of a resolved transform, reporting why it failed.
///
/// `none` and the empty string decode to zero successfully.
pub fn try_decode_translation(transform: &str) -> Result<IVec3, DecodeError> {
    let trimmed = transform.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return Ok(IVec3::ZERO);
    }

    let (kind, args) = split_matrix(trimmed)?;
    let components: Vec<&str> = args.split(',').collect();
    if components.len() != kind.component_count() {
        return Err(DecodeError::ComponentCount {
            kind,
            found: components.len(),
        });
    }

    let mut translation = [0i32; 3];
    for (axis, index) in kind.translation_indices().into_iter().enumerate() {
        if let Some(index) = index {
            translation[axis] = parse_component(components[index])?;
        }
    }
    Ok(IVec3::from_array(translation))
}

/// Decode the translation of a computed transform.
///
/// Never fails: an absent transform is the identity, and a transform that
/// cannot be decoded degrades to a zero offset.
///
/// # Example
///
/// ```
/// use resizable::transform::decode_translation;
/// use resizable_core::math::IVec3;
///
/// assert_eq!(decode_translation(Some("matrix(1, 0, 0, 1, 30, 12.9)")), IVec3::new(30, 12, 0));
/// assert_eq!(decode_translation(Some("translate(50%, 0)")), IVec3::ZERO);
/// assert_eq!(decode_translation(None), IVec3::ZERO);
/// ```
pub fn decode_translation(transform: Option<&str>) -> IVec3 {
    let Some(transform) = transform else {
        return IVec3::ZERO;
    };

    match try_decode_translation(transform) {
        Ok(offset) => offset,
        Err(DecodeError::NotAMatrix) => {
            tracing::debug!("Transform {:?} is not resolved, using zero offset", transform);
            IVec3::ZERO
        }
        Err(err) => {
            tracing::warn!("Failed to decode transform {:?}: {}", transform, err);
            IVec3::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2d_matrix() {
        assert_eq!(
            decode_translation(Some("matrix(1, 0, 0, 1, 25, -40)")),
            IVec3::new(25, -40, 0)
        );
    }

    #[test]
    fn test_3d_matrix() {
        let transform = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 7, 8, 9, 1)";
        assert_eq!(decode_translation(Some(transform)), IVec3::new(7, 8, 9));
    }

    #[test]
    fn test_truncates_toward_zero() {
        assert_eq!(
            decode_translation(Some("matrix(1, 0, 0, 1, 10.9, -3.7)")),
            IVec3::new(10, -3, 0)
        );
    }

    #[test]
    fn test_identity_forms() {
        assert_eq!(decode_translation(None), IVec3::ZERO);
        assert_eq!(decode_translation(Some("none")), IVec3::ZERO);
        assert_eq!(decode_translation(Some("")), IVec3::ZERO);
    }

    #[test]
    fn test_unresolved_transform_is_zero() {
        assert_eq!(
            try_decode_translation("translate(-50%, 10px)"),
            Err(DecodeError::NotAMatrix)
        );
        assert_eq!(decode_translation(Some("translate(-50%, 10px)")), IVec3::ZERO);
        assert_eq!(decode_translation(Some("matrix(1, 0")), IVec3::ZERO);
    }

    #[test]
    fn test_wrong_component_count() {
        assert_eq!(
            try_decode_translation("matrix(1, 0, 0, 1, 5)"),
            Err(DecodeError::ComponentCount {
                kind: MatrixKind::Affine2d,
                found: 5
            })
        );
    }

    #[test]
    fn test_invalid_component() {
        assert!(matches!(
            try_decode_translation("matrix(1, 0, 0, 1, 5px, 0)"),
            Err(DecodeError::InvalidComponent(_))
        ));
        assert_eq!(decode_translation(Some("matrix(1, 0, 0, 1, NaN, 0)")), IVec3::ZERO);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(
            decode_translation(Some("matrix(1, 0, 0, 1, 1e2, 0)")),
            IVec3::new(100, 0, 0)
        );
    }
}
