//! Decoding transactions, blocks and hashes from hex

use serde_json::json;

use bitcrust_coreio::{
    decode_hex_block, decode_hex_tx, parse_hash_str, parse_hash_value, parse_hex_value,
    DecodeError, Hash,
};


// block 170: the first transaction between two people
const TX_170: &str = "0100000001c997a5e56e104102fa209c6a852dd90660a20b2d9c352423ed\
    ce25857fcd3704000000004847304402204e45e16932b8af514961a1d3a1\
    a25fdf3f4f7732e9d624c6c61548ab5fb8cd410220181522ec8eca07de48\
    60a4acdd12909d831cc56cbbac4622082221a8768d1d0901ffffffff0200\
    ca9a3b00000000434104ae1a62fe09c5f51b13905f07f06b99a2f7159b22\
    25f374cd378d71302fa28414e7aab37397f554a7df5f142c21c1b7303b8a\
    0626f1baded5c72a704f7e6cd84cac00286bee0000000043410411db93e1\
    dcdb8a016b49840f8c53bc1eb68a382e97b1482ecad7b148a6909a5cb2e0\
    eaddfb84ccf9744464f82e160bfa9b8b64f9d4c03f999b8643f656b412a3\
    ac00000000";

const TX_170_ID: &str = "f4184fc596403b9d638783cf57adfe4c75c605f6356fbc91338530e9831e9e16";


#[test]
fn test_decode_tx_170() {
    let tx = decode_hex_tx(TX_170).unwrap();

    assert_eq!(tx.txid().unwrap().to_string(), TX_170_ID);
    assert_eq!(hex::encode(tx.to_bytes().unwrap()), TX_170);
}

#[test]
fn test_decode_tx_uppercase() {
    let tx = decode_hex_tx(&TX_170.to_uppercase()).unwrap();

    assert_eq!(tx.txid().unwrap().to_string(), TX_170_ID);
}

#[test]
fn test_decode_tx_rejects() {
    let trailing = format!("{}ab", TX_170);
    assert!(match decode_hex_tx(&trailing) { Err(DecodeError::TrailingData { remaining: 1 }) => true, _ => false });

    let truncated = &TX_170[..TX_170.len() - 2];
    assert!(match decode_hex_tx(truncated) { Err(DecodeError::Malformed(_)) => true, _ => false });

    let spaced = format!("{} ", TX_170);
    assert!(match decode_hex_tx(&spaced) { Err(DecodeError::NotHex) => true, _ => false });
}

#[test]
fn test_tx_is_not_a_block() {
    assert!(decode_hex_block(TX_170).is_err());
}

#[test]
fn test_parse_txid() {
    let hash = parse_hash_str(TX_170_ID, "txid").unwrap();
    assert_eq!(hash, decode_hex_tx(TX_170).unwrap().txid().unwrap());

    assert_eq!(parse_hash_value(&json!(TX_170_ID), "txid").unwrap(), hash);
}

#[test]
fn test_parse_errors_name_the_field() {
    let err = parse_hash_value(&json!({ "txid": TX_170_ID }), "txid").unwrap_err();
    assert_eq!(err.to_string(), "txid must be hexadecimal string (not '')");

    let err = parse_hash_str("xyz", "blockhash").unwrap_err();
    assert_eq!(err.to_string(), "blockhash must be hexadecimal string (not 'xyz')");

    let err = parse_hex_value(&json!(["00"]), "hexstring").unwrap_err();
    assert_eq!(err.to_string(), "hexstring must be hexadecimal string (not '')");
}

#[test]
fn test_hash_display_matches_input() {
    let h: Hash = parse_hash_str(TX_170_ID, "txid").unwrap();
    assert_eq!(format!("{}", h), TX_170_ID);
}
