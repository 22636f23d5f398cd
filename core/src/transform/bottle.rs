use serde::Serialize;
use std::fmt;

/// Canonical bottle categories, in the order they are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BottleType {
    Brown,
    BrownContaminated,
    BrownContaminatedComposite,
    BrownComposite,
    Green,
    GreenContaminated,
    GreenContaminatedComposite,
    GreenComposite,
    White,
    WhiteContaminated,
    WhiteContaminatedComposite,
    WhiteComposite,
    Glass,
    GlassContaminated,
    GlassContaminatedComposite,
    GlassComposite,
}

impl BottleType {
    pub const ORDER: [BottleType; 16] = [
        BottleType::Brown,
        BottleType::BrownContaminated,
        BottleType::BrownContaminatedComposite,
        BottleType::BrownComposite,
        BottleType::Green,
        BottleType::GreenContaminated,
        BottleType::GreenContaminatedComposite,
        BottleType::GreenComposite,
        BottleType::White,
        BottleType::WhiteContaminated,
        BottleType::WhiteContaminatedComposite,
        BottleType::WhiteComposite,
        BottleType::Glass,
        BottleType::GlassContaminated,
        BottleType::GlassContaminatedComposite,
        BottleType::GlassComposite,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BottleType::Brown => "갈색병",
            BottleType::BrownContaminated => "갈색병(오염)",
            BottleType::BrownContaminatedComposite => "갈색병(오염+복합)",
            BottleType::BrownComposite => "갈색병(복합)",
            BottleType::Green => "초록병",
            BottleType::GreenContaminated => "초록병(오염)",
            BottleType::GreenContaminatedComposite => "초록병(오염+복합)",
            BottleType::GreenComposite => "초록병(복합)",
            BottleType::White => "흰색병",
            BottleType::WhiteContaminated => "흰색병(오염)",
            BottleType::WhiteContaminatedComposite => "흰색병(오염+복합)",
            BottleType::WhiteComposite => "흰색병(복합)",
            BottleType::Glass => "유리병",
            BottleType::GlassContaminated => "유리병(오염)",
            BottleType::GlassContaminatedComposite => "유리병(오염+복합)",
            BottleType::GlassComposite => "유리병(복합)",
        }
    }
}

impl fmt::Display for BottleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Resolves a raw detector label to its bucket.
///
/// The base label is the raw value with its first `_` removed, cut at the
/// first `+`. The first category whose label contains the base wins.
pub fn bucket_bottle_type(raw: Option<&str>) -> Option<BottleType> {
    let raw = raw.filter(|value| !value.is_empty())?;
    let stripped = raw.replacen('_', "", 1);
    let base = stripped.split('+').next().unwrap_or_default();
    BottleType::ORDER
        .into_iter()
        .find(|bottle| bottle.label().contains(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_labels_resolve_to_first_match() {
        assert_eq!(bucket_bottle_type(Some("갈색병")), Some(BottleType::Brown));
        assert_eq!(bucket_bottle_type(Some("초록병")), Some(BottleType::Green));
        assert_eq!(bucket_bottle_type(Some("흰색병")), Some(BottleType::White));
        assert_eq!(bucket_bottle_type(Some("유리병")), Some(BottleType::Glass));
    }

    #[test]
    fn suffix_after_plus_is_ignored() {
        assert_eq!(
            bucket_bottle_type(Some("초록병(오염+복합)")),
            Some(BottleType::GreenContaminated)
        );
        assert_eq!(
            bucket_bottle_type(Some("흰색병+복합")),
            Some(BottleType::White)
        );
    }

    #[test]
    fn only_first_underscore_is_removed() {
        assert_eq!(
            bucket_bottle_type(Some("갈색_병(복합)")),
            Some(BottleType::BrownComposite)
        );
        assert_eq!(bucket_bottle_type(Some("갈_색_병")), None);
    }

    #[test]
    fn unmatched_or_missing_labels_have_no_bucket() {
        assert_eq!(bucket_bottle_type(Some("plastic")), None);
        assert_eq!(bucket_bottle_type(Some("")), None);
        assert_eq!(bucket_bottle_type(None), None);
    }

    #[test]
    fn every_category_resolves_to_itself_or_an_earlier_bucket() {
        for (index, bottle) in BottleType::ORDER.into_iter().enumerate() {
            let resolved = bucket_bottle_type(Some(bottle.label())).unwrap();
            let resolved_index = BottleType::ORDER
                .iter()
                .position(|candidate| *candidate == resolved)
                .unwrap();
            assert!(resolved_index <= index);
        }
    }
}
