use super::*;
use std::collections::HashSet;
use std::str::FromStr;

fn all_subsets() -> impl Iterator<Item = PreserveAttributes> {
    (0..=PreserveAttributes::ALL.bits()).map(PreserveAttributes::from_bits)
}

#[test]
fn bit_constants_match_declaration_order() {
    assert_eq!(PreserveAttributes::REPLICATION.bits(), 1);
    assert_eq!(PreserveAttributes::BLOCK_SIZE.bits(), 1 << 1);
    assert_eq!(PreserveAttributes::OWNER.bits(), 1 << 2);
    assert_eq!(PreserveAttributes::GROUP.bits(), 1 << 3);
    assert_eq!(PreserveAttributes::PERMISSION.bits(), 1 << 4);
    assert_eq!(PreserveAttributes::ALL.bits(), 0x1f);

    for (index, attribute) in PreserveAttribute::ALL.into_iter().enumerate() {
        assert_eq!(attribute.ordinal() as usize, index);
        assert_eq!(attribute.as_flag().bits(), 1 << index);
    }
}

#[test]
fn tokens_are_distinct_and_resolve_back() {
    let tokens: HashSet<char> = PreserveAttribute::ALL.iter().map(|a| a.token()).collect();
    assert_eq!(tokens.len(), PreserveAttribute::ALL.len());

    for attribute in PreserveAttribute::ALL {
        assert_eq!(PreserveAttribute::from_token(attribute.token()), Some(attribute));
    }
    assert_eq!(PreserveAttribute::from_token('R'), None);
    assert_eq!(PreserveAttribute::from_token('x'), None);
}

#[test]
fn names_render_through_display() {
    assert_eq!(PreserveAttribute::BlockSize.to_string(), "block-size");
    assert_eq!(PreserveAttribute::Permission.name(), "permission");
}

#[test]
fn round_trip_holds_for_every_defined_mask() {
    for attributes in all_subsets() {
        let mnemonic = attributes.to_mnemonic_string();
        assert_eq!(PreserveAttributes::from_mnemonic(&mnemonic), attributes);
    }
}

#[test]
fn empty_and_absent_input_preserve_nothing() {
    for attributes in [
        PreserveAttributes::from_mnemonic(""),
        PreserveAttributes::from_optional_mnemonic(None),
        PreserveAttributes::from_optional_mnemonic(Some("")),
    ] {
        assert_eq!(attributes, PreserveAttributes::EMPTY);
        for attribute in PreserveAttribute::ALL {
            assert!(!attributes.preserve(attribute));
        }
    }
}

#[test]
fn unknown_characters_are_ignored() {
    let attributes = PreserveAttributes::from_mnemonic("xyz");
    assert!(attributes.is_empty());
    assert_eq!(attributes.to_mnemonic_string(), "");

    assert_eq!(
        PreserveAttributes::from_mnemonic("R-U-G"),
        PreserveAttributes::EMPTY,
        "tokens are case-sensitive"
    );
    assert_eq!(
        PreserveAttributes::from_mnemonic("--perms=p, owner=u"),
        PreserveAttributes::from_mnemonic("rup")
    );
}

#[test]
fn repeated_tokens_have_no_additional_effect() {
    assert_eq!(
        PreserveAttributes::from_mnemonic("rrrr"),
        PreserveAttributes::from_mnemonic("r")
    );
    assert_eq!(PreserveAttributes::from_mnemonic("rrrr").bits(), 1);
}

#[test]
fn owner_and_permission_mnemonic() {
    let attributes = PreserveAttributes::from_mnemonic("up");

    assert!(attributes.preserve(PreserveAttribute::Owner));
    assert!(attributes.preserve(PreserveAttribute::Permission));
    assert!(!attributes.preserve(PreserveAttribute::Replication));
    assert!(!attributes.preserve(PreserveAttribute::BlockSize));
    assert!(!attributes.preserve(PreserveAttribute::Group));
    assert_eq!(attributes.to_mnemonic_string(), "up");
}

#[test]
fn rendering_follows_declaration_order() {
    assert_eq!(PreserveAttributes::from_mnemonic("gpr").to_mnemonic_string(), "rgp");
    assert_eq!(PreserveAttributes::from_mnemonic("pgubr").to_mnemonic_string(), "rbugp");
    assert_eq!(PreserveAttributes::ALL.to_string(), "rbugp");
}

#[test]
fn equality_follows_the_mask() {
    assert_eq!(
        PreserveAttributes::from_bits(0b10100),
        PreserveAttributes::from_mnemonic("pu")
    );
    assert_ne!(
        PreserveAttributes::from_bits(0b00100),
        PreserveAttributes::from_bits(0b10100)
    );
    assert_eq!(PreserveAttributes::from(4u32), PreserveAttributes::OWNER);
    assert_eq!(u32::from(PreserveAttributes::GROUP), 8);
}

#[test]
fn raw_mask_is_stored_verbatim() {
    let attributes = PreserveAttributes::from_bits(0x1 | (1 << 9));

    assert_eq!(attributes.bits(), 0x201);
    assert_eq!(attributes.unknown_bits(), 1 << 9);
    assert!(attributes.preserve(PreserveAttribute::Replication));
    assert_eq!(attributes.to_mnemonic_string(), "r");
    assert_eq!(attributes.iter().count(), 1);
    assert_ne!(attributes, PreserveAttributes::REPLICATION);
}

#[test]
fn iter_yields_attributes_in_declaration_order() {
    let attributes = PreserveAttributes::from_mnemonic("pbg");

    let collected: Vec<_> = attributes.iter().collect();
    assert_eq!(
        collected,
        vec![
            PreserveAttribute::BlockSize,
            PreserveAttribute::Group,
            PreserveAttribute::Permission,
        ]
    );

    let mut iter = attributes.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next_back(), Some(PreserveAttribute::Permission));
    assert_eq!(iter.next(), Some(PreserveAttribute::BlockSize));
    assert_eq!(iter.size_hint(), (1, Some(1)));
    assert_eq!(iter.next(), Some(PreserveAttribute::Group));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn iter_skips_undefined_bits_from_both_ends() {
    let attributes = PreserveAttributes::from_bits(0xffff_ff00 | 0b0_1001);

    assert_eq!(attributes.iter().len(), 2);
    let reversed: Vec<_> = attributes.iter().rev().collect();
    assert_eq!(
        reversed,
        vec![PreserveAttribute::Group, PreserveAttribute::Replication]
    );
    assert_eq!(PreserveAttributes::EMPTY.iter().next_back(), None);
}

#[test]
fn collect_and_extend_build_sets() {
    let mut attributes: PreserveAttributes = [PreserveAttribute::Group, PreserveAttribute::Owner]
        .into_iter()
        .collect();
    assert_eq!(attributes.to_mnemonic_string(), "ug");

    attributes.extend([PreserveAttribute::Replication]);
    assert_eq!(attributes.to_mnemonic_string(), "rug");
    assert_eq!(attributes.into_iter().len(), 3);
}

#[test]
fn combinators_return_new_values() {
    let base = PreserveAttributes::OWNER;
    let extended = base.with(PreserveAttribute::Group);

    assert_eq!(base, PreserveAttributes::OWNER);
    assert_eq!(extended.to_mnemonic_string(), "ug");
    assert_eq!(extended.without(PreserveAttribute::Owner), PreserveAttributes::GROUP);
    assert!(extended.contains(base));
    assert!(!base.contains(extended));
    assert_eq!(
        extended.intersection(PreserveAttributes::GROUP | PreserveAttributes::PERMISSION),
        PreserveAttributes::GROUP
    );
    assert_eq!(extended.difference(base), PreserveAttributes::GROUP);
}

#[test]
fn bitwise_operators_behave_like_bitfields() {
    let mut attributes = PreserveAttributes::REPLICATION;
    attributes |= PreserveAttributes::BLOCK_SIZE;
    assert!(attributes.contains(PreserveAttributes::BLOCK_SIZE));

    attributes &= PreserveAttributes::BLOCK_SIZE;
    assert_eq!(attributes, PreserveAttributes::BLOCK_SIZE);

    attributes ^= PreserveAttributes::BLOCK_SIZE;
    assert!(attributes.is_empty());

    assert_eq!(
        PreserveAttributes::EMPTY | PreserveAttribute::Permission,
        PreserveAttributes::PERMISSION
    );
    assert_eq!(
        !PreserveAttributes::from_mnemonic("ug"),
        PreserveAttributes::from_mnemonic("rbp")
    );
    assert_eq!(!PreserveAttributes::ALL, PreserveAttributes::EMPTY);
}

#[test]
fn from_str_never_fails() {
    let parsed = PreserveAttributes::from_str("u?g!").expect("parsing is infallible");
    assert_eq!(parsed, PreserveAttributes::OWNER | PreserveAttributes::GROUP);

    let parsed: PreserveAttributes = "".parse().expect("parsing is infallible");
    assert!(parsed.is_empty());
}

#[test]
fn debug_reports_bits_and_mnemonic() {
    let rendered = format!("{:?}", PreserveAttributes::from_mnemonic("up"));
    assert_eq!(rendered, r#"PreserveAttributes { bits: 0x14, mnemonic: "up" }"#);
}

#[test]
fn serde_uses_mnemonic_strings() {
    let attributes = PreserveAttributes::from_mnemonic("gpr");
    let json = serde_json::to_string(&attributes).expect("serializes");
    assert_eq!(json, r#""rgp""#);

    let decoded: PreserveAttributes = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(decoded, attributes);
}

#[test]
fn serde_deserialization_is_permissive() {
    let decoded: PreserveAttributes = serde_json::from_str(r#""u x u""#).expect("deserializes");
    assert_eq!(decoded, PreserveAttributes::OWNER);

    let decoded: PreserveAttributes = serde_json::from_str("null").expect("null is empty");
    assert!(decoded.is_empty());
}

#[test]
fn values_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync + Copy>() {}
    assert_send_sync::<PreserveAttributes>();
    assert_send_sync::<PreserveAttribute>();
}
