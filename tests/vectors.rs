//! Known-answer vectors: chain prefixes sharing one payload, plus the BIP-173
//! valid/invalid bech32 strings.

use bech32lite::{decode, encode, DecodeError};

const PAYLOAD: [u8; 32] = [
    4, 11, 3, 15, 19, 28, 18, 31, 18, 3, 21, 21, 11, 30, 22, 14, 10, 12, 23, 25, 20, 26, 26, 25,
    24, 18, 2, 7, 27, 11, 19, 7,
];

const PREFIXED: [(&str, &str); 4] = [
    ("cosmos", "cosmos1ytr0nujljr44t7kw2vhe566ecjz8mtn8n2v7xy"),
    ("osmo", "osmo1ytr0nujljr44t7kw2vhe566ecjz8mtn8m3lwsk"),
    ("bitsong", "bitsong1ytr0nujljr44t7kw2vhe566ecjz8mtn8lr7kyt"),
    ("akash", "akash1ytr0nujljr44t7kw2vhe566ecjz8mtn873pel7"),
];

#[test]
fn test_encode_prefixes() {
    for (hrp, expected) in PREFIXED {
        assert_eq!(encode(hrp, &PAYLOAD).unwrap(), expected, "hrp {hrp}");
    }
}

#[test]
fn test_decode_prefixes() {
    for (hrp, encoded) in PREFIXED {
        let (got_hrp, data) = decode(encoded).unwrap();
        assert_eq!(got_hrp, hrp);
        assert_eq!(data, PAYLOAD);
    }
}

#[test]
fn test_bip173_valid() {
    let valid = [
        "A12UEL5L",
        "a12uel5l",
        "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
        "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
        "11qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8247j",
        "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
        "?1ezyfcl",
    ];
    for s in valid {
        let (hrp, data) = decode(s).unwrap_or_else(|e| panic!("{s}: {e}"));
        // re-encoding reproduces the lowercase form
        assert_eq!(encode(&hrp, &data).unwrap(), s.to_ascii_lowercase());
    }
}

#[test]
fn test_bip173_abcdef_payload() {
    let (hrp, data) = decode("abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw").unwrap();
    assert_eq!(hrp, "abcdef");
    assert_eq!(data, (0u8..32).collect::<Vec<_>>());
}

#[test]
fn test_bip173_invalid() {
    let cases: [(&str, DecodeError); 10] = [
        ("\u{20}1nwldj5", DecodeError::OutOfRangeCharacter { position: 0, byte: 0x20 }),
        ("\u{7f}1axkwrx", DecodeError::OutOfRangeCharacter { position: 0, byte: 0x7f }),
        (
            "an84characterslonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1569pvx",
            DecodeError::TooLong { len: 91 },
        ),
        ("pzry9x0s0muk", DecodeError::MissingSeparator),
        ("1pzry9x0s0muk", DecodeError::EmptyHrp),
        ("x1b4n0q5v", DecodeError::InvalidChecksum),
        ("li1dgmt3", DecodeError::ChecksumTooShort { len: 5 }),
        ("de1lg7wt\u{ff}", DecodeError::OutOfRangeCharacter { position: 8, byte: 0xc3 }),
        ("A1G7SGD8", DecodeError::InvalidChecksum),
        ("10a06t8", DecodeError::TooShort { len: 7 }),
    ];
    for (s, expected) in cases {
        assert_eq!(decode(s), Err(expected), "input {s:?}");
    }
}

#[test]
fn test_bip173_empty_hrp_with_checksum() {
    assert_eq!(decode("1qzzfhee"), Err(DecodeError::EmptyHrp));
}
