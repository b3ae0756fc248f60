//! Assembling scripts and reading them back

use proptest::prelude::*;

use bitcrust_coreio::script::opcode::{self, *};
use bitcrust_coreio::script::{assemble, scriptnum, AssembleError, Instruction, Reader};


/// Reads back the number a single word assembled to
fn read_number(script: &[u8]) -> Option<i64> {
    match Reader::new(script).collect::<Result<Vec<_>, _>>().ok()?.as_slice() {
        [Instruction::Op(OP_1NEGATE)] => Some(-1),
        [Instruction::Op(op)] if *op >= OP_1 && *op <= OP_16 => Some((*op - OP_1 + 1) as i64),
        [Instruction::Push(data)] => scriptnum::deserialize(data),
        _ => None
    }
}


proptest! {

    #[test]
    fn prop_quoted_string_is_pushed(s in "[a-zA-Z0-9_.:-]{0,300}") {
        let script = assemble(&format!("'{}'", s)).unwrap();

        prop_assert_eq!(Reader::pushes(&script).unwrap(), vec![s.as_bytes()]);
    }

    #[test]
    fn prop_hex_is_inserted(bytes in prop::collection::vec(any::<u8>(), 1..200)) {
        let script = assemble(&format!("0x{}", hex::encode(&bytes))).unwrap();

        prop_assert_eq!(script, bytes);
    }

    #[test]
    fn prop_number_roundtrip(n in any::<i64>()) {
        let script = assemble(&n.to_string()).unwrap();

        prop_assert_eq!(read_number(&script), Some(n));
    }

    #[test]
    fn prop_immediate_push_reads_back(bytes in prop::collection::vec(any::<u8>(), 1..=75)) {
        let text = format!("0x{:02x} 0x{}", bytes.len(), hex::encode(&bytes));
        let script = assemble(&text).unwrap();

        prop_assert_eq!(Reader::pushes(&script).unwrap(), vec![&bytes[..]]);
    }

    #[test]
    fn prop_pushdata1_reads_back(bytes in prop::collection::vec(any::<u8>(), 1..=255)) {
        let text = format!("PUSHDATA1 0x{:02x} 0x{}", bytes.len(), hex::encode(&bytes));
        let script = assemble(&text).unwrap();

        prop_assert_eq!(Reader::pushes(&script).unwrap(), vec![&bytes[..]]);
    }

    #[test]
    fn prop_pushdata2_reads_back(bytes in prop::collection::vec(any::<u8>(), 1..=600)) {
        let len = bytes.len() as u16;
        let text = format!("OP_PUSHDATA2 0x{} 0x{}", hex::encode(len.to_le_bytes()), hex::encode(&bytes));
        let script = assemble(&text).unwrap();

        prop_assert_eq!(Reader::pushes(&script).unwrap(), vec![&bytes[..]]);
    }

    #[test]
    fn prop_pushdata1_checks_payload(len in 1usize..=255, short in 1usize..=255) {
        prop_assume!(short < len);

        let payload = hex::encode(vec![0xab; short]);
        let text = format!("OP_PUSHDATA1 0x{:02x} 0x{}", len, payload);

        prop_assert_eq!(assemble(&text),
                        Err(AssembleError::WrongPushSize { expected: len, pushed: short }));
    }

    #[test]
    fn prop_separators_are_interchangeable(sep in "[ \t\n]{1,4}") {
        let text = ["DUP", "HASH160", "0x14", "0x0000000000000000000000000000000000000000",
                    "EQUALVERIFY", "CHECKSIG"].join(sep.as_str());

        prop_assert_eq!(assemble(&text).unwrap(),
                        assemble("DUP HASH160 0x14 0x0000000000000000000000000000000000000000 EQUALVERIFY CHECKSIG").unwrap());
    }
}


#[test]
fn test_every_alias_matches_its_name() {
    for op in OP_PUSHDATA1..FIRST_UNDEFINED_OP_VALUE {
        let name = opcode::name(op);
        if name == UNKNOWN_NAME {
            continue;
        }
        let alias = name.strip_prefix("OP_").unwrap_or(name);

        assert_eq!(assemble(name).unwrap(), vec![op], "{}", name);
        assert_eq!(assemble(alias).unwrap(), assemble(name).unwrap(), "{}", alias);
    }
}

#[test]
fn test_p2pkh() {
    let script = assemble("DUP HASH160 0x14 0x89abcdefabbaabbaabbaabbaabbaabbaabbaabba EQUALVERIFY CHECKSIG").unwrap();

    assert_eq!(hex::encode(&script), "76a91489abcdefabbaabbaabbaabbaabbaabbaabbaabba88ac");
    assert_eq!(Reader::pushes(&script).unwrap().len(), 1);
}

#[test]
fn test_long_quoted_string_uses_pushdata() {
    let s = "x".repeat(300);
    let script = assemble(&format!("'{}'", s)).unwrap();

    assert_eq!(&script[..3], &[OP_PUSHDATA2, 0x2c, 0x01]);
    assert_eq!(script.len(), 303);
}

#[test]
fn test_unknown_word_reports_script() {
    let err = assemble("1 2 ADD BOGUS").unwrap_err();

    assert_eq!(err, AssembleError::Unparsable { script: "1 2 ADD BOGUS".to_owned() });
    // case sensitive
    assert!(assemble("op_add").is_err());
}

#[test]
fn test_pending_push_at_end_is_accepted() {
    // the final push is left unchecked when the script ends
    assert_eq!(assemble("0x05").unwrap(), vec![0x05]);
    assert_eq!(assemble("PUSHDATA2").unwrap(), vec![OP_PUSHDATA2]);
}
