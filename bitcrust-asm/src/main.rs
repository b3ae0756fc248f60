use std::io::{self, Read};
use std::process;

use clap::ArgMatches;
use log::{debug, error, info};
use serde_json::json;

use bitcrust_coreio::{assemble, decode_hex_block, decode_hex_tx, parse_hash_str};

mod config;

use crate::config::{Config, OutputFormat};


fn main() {
    let matches = Config::matches().get_matches();

    let config = match Config::from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = simple_logger::init_with_level(config.log_level) {
        eprintln!("Couldn't initialize logger: {}", e);
    }
    debug!("{:?}", config);

    let result = match matches.subcommand() {
        ("assemble", Some(m))     => cmd_assemble(&config, m),
        ("decode-tx", Some(m))    => cmd_decode_tx(&config, m),
        ("decode-block", Some(m)) => cmd_decode_block(&config, m),
        ("hash", Some(m))         => cmd_hash(&config, m),
        _ => Err("No subcommand was used".to_owned()),
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}


fn cmd_assemble(config: &Config, matches: &ArgMatches) -> Result<String, String> {
    let text = match matches.values_of("script") {
        Some(words) => words.collect::<Vec<_>>().join(" "),
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s).map_err(|e| e.to_string())?;
            s
        }
    };

    let script = assemble(&text).map_err(|e| e.to_string())?;
    info!("assembled {} bytes", script.len());

    Ok(match config.output {
        OutputFormat::Hex  => hex::encode(&script),
        OutputFormat::Json => json!({ "asm": text.trim(), "hex": hex::encode(&script) }).to_string(),
    })
}

fn cmd_decode_tx(config: &Config, matches: &ArgMatches) -> Result<String, String> {
    let input = matches.value_of("hex").unwrap_or("");

    let tx = decode_hex_tx(input).map_err(|e| format!("TX decode failed: {}", e))?;
    let txid = tx.txid().map_err(|e| e.to_string())?;

    Ok(match config.output {
        OutputFormat::Hex  => txid.to_string(),
        OutputFormat::Json => json!({
            "txid":     txid.to_string(),
            "version":  tx.version,
            "coinbase": tx.is_coinbase(),
            "vin":      tx.txs_in.iter().map(|i| json!({
                "txid":      i.prev_tx_out.to_string(),
                "vout":      i.prev_tx_out_idx,
                "scriptSig": hex::encode(&i.script),
                "sequence":  i.sequence,
            })).collect::<Vec<_>>(),
            "vout":     tx.txs_out.iter().map(|o| json!({
                "value":        o.value,
                "scriptPubKey": hex::encode(&o.pk_script),
            })).collect::<Vec<_>>(),
            "locktime": tx.lock_time,
        }).to_string(),
    })
}

fn cmd_decode_block(config: &Config, matches: &ArgMatches) -> Result<String, String> {
    let input = matches.value_of("hex").unwrap_or("");

    let block = decode_hex_block(input).map_err(|e| format!("Block decode failed: {}", e))?;
    let hash = block.hash().map_err(|e| e.to_string())?;
    let valid = block.has_valid_merkle_root().map_err(|e| e.to_string())?;

    if !valid {
        info!("block {} has an incorrect merkle root", hash);
    }

    Ok(match config.output {
        OutputFormat::Hex  => hash.to_string(),
        OutputFormat::Json => {
            let txids = block.txs.iter()
                .map(|tx| tx.txid().map(|h| h.to_string()))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.to_string())?;

            json!({
                "hash":              hash.to_string(),
                "version":           block.header.version,
                "previousblockhash": block.header.prev_hash.to_string(),
                "merkleroot":        block.header.merkle_root.to_string(),
                "merklerootvalid":   valid,
                "time":              block.header.time,
                "bits":              format!("{:08x}", block.header.bits),
                "nonce":             block.header.nonce,
                "tx":                txids,
            }).to_string()
        }
    })
}

fn cmd_hash(config: &Config, matches: &ArgMatches) -> Result<String, String> {
    let input = matches.value_of("hex").unwrap_or("");
    let name = matches.value_of("name").unwrap_or("hash");

    let hash = parse_hash_str(input, name).map_err(|e| e.to_string())?;

    Ok(match config.output {
        OutputFormat::Hex  => hash.to_string(),
        OutputFormat::Json => json!({ "name": name, "hash": hash.to_string() }).to_string(),
    })
}
