//! Decoding of the access spec token (`public`, `protected-f`, `+f`, ...).

use atfml_core::{AccessChange, AccessTransform, ModifierChange};

use crate::error::SpecError;

/// Suffix letter marking a `final` modifier change.
const FINAL_SUFFIX: char = 'f';

/// Shortest spec the format accepts. Rules out the bare `+f` / `-f` forms.
const MIN_SPEC_LEN: usize = 3;

/// Decode an access spec into a transform.
///
/// ```text
/// spec       := visibility [ ('+' | '-') 'f' ]
/// visibility := "public" | "protected" | "default" | "private" | ""
/// ```
///
/// ```
/// use atfml_core::{AccessChange, AccessTransform, ModifierChange};
/// use atfml_reader::parse_access_transform;
///
/// assert_eq!(
///     parse_access_transform("protected-f"),
///     Ok(AccessTransform::new(AccessChange::Protected, ModifierChange::Remove))
/// );
/// assert!(parse_access_transform("-f").is_err());
/// ```
pub fn parse_access_transform(spec: &str) -> Result<AccessTransform, SpecError> {
    if spec.chars().count() < MIN_SPEC_LEN {
        return Err(SpecError::InvalidAccessSpec(spec.to_owned()));
    }

    let (visibility, final_change) = match spec.strip_suffix(FINAL_SUFFIX) {
        Some(rest) => {
            // Guarded by MIN_SPEC_LEN: at least two chars precede the suffix.
            let mut chars = rest.chars();
            let sign = chars.next_back().unwrap_or_default();
            (chars.as_str(), parse_final_sign(spec, sign)?)
        }
        None => (spec, ModifierChange::None),
    };

    let access = AccessChange::from_keyword(visibility)
        .ok_or_else(|| SpecError::UnknownVisibility(visibility.to_owned()))?;
    Ok(AccessTransform::new(access, final_change))
}

fn parse_final_sign(spec: &str, sign: char) -> Result<ModifierChange, SpecError> {
    match sign {
        '-' => Ok(ModifierChange::Remove),
        '+' => Ok(ModifierChange::Add),
        _ => Err(SpecError::InvalidFinalSign {
            spec: spec.to_owned(),
            sign,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(
        access: AccessChange,
        final_change: ModifierChange,
    ) -> Result<AccessTransform, SpecError> {
        Ok(AccessTransform::new(access, final_change))
    }

    #[test]
    fn plain_keywords() {
        use AccessChange::*;
        assert_eq!(parse_access_transform("public"), ok(Public, ModifierChange::None));
        assert_eq!(parse_access_transform("protected"), ok(Protected, ModifierChange::None));
        assert_eq!(parse_access_transform("default"), ok(PackagePrivate, ModifierChange::None));
        assert_eq!(parse_access_transform("private"), ok(Private, ModifierChange::None));
    }

    #[test]
    fn final_suffix() {
        assert_eq!(
            parse_access_transform("public-f"),
            ok(AccessChange::Public, ModifierChange::Remove)
        );
        assert_eq!(
            parse_access_transform("private+f"),
            ok(AccessChange::Private, ModifierChange::Add)
        );
        assert_eq!(
            parse_access_transform("default-f"),
            ok(AccessChange::PackagePrivate, ModifierChange::Remove)
        );
    }

    #[test]
    fn too_short() {
        for spec in ["", "f", "-f", "+f"] {
            assert_eq!(
                parse_access_transform(spec),
                Err(SpecError::InvalidAccessSpec(spec.to_owned())),
                "{spec:?}"
            );
        }
    }

    #[test]
    fn three_chars_reach_keyword_check() {
        assert_eq!(
            parse_access_transform("x-f"),
            Err(SpecError::UnknownVisibility("x".to_owned()))
        );
        assert_eq!(
            parse_access_transform("pub"),
            Err(SpecError::UnknownVisibility("pub".to_owned()))
        );
    }

    #[test]
    fn bad_sign() {
        assert_eq!(
            parse_access_transform("public*f"),
            Err(SpecError::InvalidFinalSign {
                spec: "public*f".to_owned(),
                sign: '*',
            })
        );
    }

    #[test]
    fn unknown_keyword() {
        assert_eq!(
            parse_access_transform("publik"),
            Err(SpecError::UnknownVisibility("publik".to_owned()))
        );
        // Case matters.
        assert_eq!(
            parse_access_transform("Public"),
            Err(SpecError::UnknownVisibility("Public".to_owned()))
        );
    }
}
