use gpui::{AbsoluteLength, DefiniteLength, Pixels, SharedString, px, rems};
use serde::{Deserialize, Deserializer, de::Error};
use smallvec::{Array, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Unit {
    Px,
    Rem,
    Percent,
}

/// A length as written in theme files: a bare number of pixels or a
/// number with a `px`, `rem` or `%` suffix.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawLength {
    Number(f32),
    Text(String),
}

impl RawLength {
    fn parse(&self) -> Option<(f32, Unit)> {
        let text = match self {
            RawLength::Number(value) => return Some((*value, Unit::Px)),
            RawLength::Text(text) => text.trim(),
        };

        [("px", Unit::Px), ("rem", Unit::Rem), ("%", Unit::Percent)]
            .into_iter()
            .find_map(|(suffix, unit)| {
                let value = text.strip_suffix(suffix)?.trim().parse().ok()?;
                Some((value, unit))
            })
    }
}

fn de_length<'de, D>(deserializer: D, accepts: &[Unit]) -> Result<(f32, Unit), D::Error>
where
    D: Deserializer<'de>,
{
    RawLength::deserialize(deserializer)?
        .parse()
        .filter(|(_, unit)| accepts.contains(unit))
        .ok_or_else(|| D::Error::custom(format!("expected a length in one of {accepts:?}")))
}

pub fn de_pixels<'de, D>(deserializer: D) -> Result<Pixels, D::Error>
where
    D: Deserializer<'de>,
{
    let (value, _) = de_length(deserializer, &[Unit::Px])?;
    Ok(px(value))
}

pub fn de_abs_length<'de, D>(deserializer: D) -> Result<AbsoluteLength, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match de_length(deserializer, &[Unit::Px, Unit::Rem])? {
        (value, Unit::Rem) => AbsoluteLength::Rems(rems(value)),
        (value, _) => AbsoluteLength::Pixels(px(value)),
    })
}

pub fn de_def_length<'de, D>(deserializer: D) -> Result<DefiniteLength, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match de_length(deserializer, &[Unit::Px, Unit::Rem, Unit::Percent])? {
            (value, Unit::Percent) => DefiniteLength::Fraction(value / 100.),
            (value, Unit::Rem) => DefiniteLength::Absolute(AbsoluteLength::Rems(rems(value))),
            (value, Unit::Px) => DefiniteLength::Absolute(AbsoluteLength::Pixels(px(value))),
        },
    )
}

/// Any list that must hold at least one entry.
pub fn de_non_empty<'de, D, A>(deserializer: D) -> Result<SmallVec<A>, D::Error>
where
    D: Deserializer<'de>,
    A: Array,
    A::Item: Deserialize<'de>,
{
    let items = SmallVec::<A>::deserialize(deserializer)?;

    if items.is_empty() {
        return Err(D::Error::custom("expected at least one entry"));
    }

    Ok(items)
}

/// A font family list, also accepting a single family name.
pub fn de_font_family<'de, D>(deserializer: D) -> Result<SmallVec<[SharedString; 1]>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Family {
        Single(SharedString),
        Fallbacks(SmallVec<[SharedString; 1]>),
    }

    match Family::deserialize(deserializer)? {
        Family::Single(name) => Ok(SmallVec::from_buf([name])),
        Family::Fallbacks(names) if names.is_empty() => {
            Err(D::Error::custom("font family list can't be empty"))
        }
        Family::Fallbacks(names) => Ok(names),
    }
}
