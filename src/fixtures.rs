//! Hand-assembled EVM bytecode standing in for compiled contracts in tests.

use alloy::primitives::{Address, B256, Bytes, b256, bytes};
use rand::prelude::*;

use crate::artifact::Artifact;

/// `keccak256("Transfer(address,address,uint256)")`
pub const TRANSFER_TOPIC: B256 =
    b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef");

/// Init code that installs a single `STOP` as runtime code.
pub const STOP_INIT: Bytes = bytes!("6001600c60003960016000f300");

/// Init code whose runtime answers every call with the word `18`.
///
/// Runtime: `PUSH1 18 PUSH1 0 MSTORE PUSH1 32 PUSH1 0 RETURN`.
pub const CONSTANT_INIT: Bytes = bytes!("600a600c600039600a6000f3601260005260206000f3");

/// Runtime part of [`CONSTANT_INIT`].
pub const CONSTANT_RUNTIME: Bytes = bytes!("601260005260206000f3");

/// Init code that reverts, so no contract is created.
///
/// `PUSH1 0 PUSH1 0 REVERT`
pub const REVERT_INIT: Bytes = bytes!("60006000fd");

/// Init code whose runtime answers every call with the word held in slot 0, then stores the
/// caller there. Views see zero until the first mined call, and the caller afterwards.
///
/// Runtime: `PUSH1 0 SLOAD PUSH1 0 MSTORE CALLER PUSH1 0 SSTORE PUSH1 32 PUSH1 0 RETURN`.
pub const RECORDER_INIT: Bytes =
    bytes!("600f600c600039600f6000f3" "6000546000523360005560206000f3");

/// Init code whose runtime answers every call with the three words `7, 11, 13`.
pub const TRIPLE_INIT: Bytes =
    bytes!("6014600c60003960146000f3" "6007600052600b602052600d60405260606000f3");

/// Words returned by [`TRIPLE_INIT`], in order.
pub const TRIPLE: [u64; 3] = [7, 11, 13];

/// Init code whose runtime emits `Transfer(msg.sender, address(0), 42)` on every call.
pub const TRANSFER_EMITTER_INIT: Bytes = bytes!(
    "602f600c600039602f6000f3"
    "602a6000526000337f"
    "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
    "60206000a300"
);

/// Amount carried by every event of [`TRANSFER_EMITTER_INIT`].
pub const EMITTED_VALUE: u64 = 42;

fn artifact(name: &str, abi: &str, bytecode: &Bytes) -> Artifact {
    let json = format!(r#"{{"contractName":"{name}","abi":{abi},"bytecode":"{bytecode}"}}"#);
    Artifact::from_json(&json).expect("fixture artifact")
}

/// A contract with no constructor.
pub fn stop_artifact() -> Artifact {
    artifact("Stop", "[]", &STOP_INIT)
}

/// Constant-answer contract deployed through a `(string,string,uint256)` constructor.
pub fn token_artifact() -> Artifact {
    artifact(
        "Token",
        r#"[{"type":"constructor","stateMutability":"nonpayable","inputs":[
            {"name":"name","type":"string","internalType":"string"},
            {"name":"symbol","type":"string","internalType":"string"},
            {"name":"initialSupply","type":"uint256","internalType":"uint256"}]}]"#,
        &CONSTANT_INIT,
    )
}

/// Constant-answer contract deployed through an `(address,address)` constructor.
pub fn pair_constructor_artifact(name: &str) -> Artifact {
    artifact(
        name,
        r#"[{"type":"constructor","stateMutability":"nonpayable","inputs":[
            {"name":"a","type":"address","internalType":"address"},
            {"name":"b","type":"address","internalType":"address"}]}]"#,
        &CONSTANT_INIT,
    )
}

/// Event-emitting contract with no constructor.
pub fn emitter_artifact() -> Artifact {
    artifact("Emitter", "[]", &TRANSFER_EMITTER_INIT)
}

pub fn random_address() -> Address {
    Address::from(rand::rng().random::<[u8; 20]>())
}

/// Constant-answer contract with no constructor.
pub fn constant_artifact() -> Artifact {
    artifact("Constant", "[]", &CONSTANT_INIT)
}

pub fn recorder_artifact() -> Artifact {
    artifact("Recorder", "[]", &RECORDER_INIT)
}

pub fn triple_artifact() -> Artifact {
    artifact("Triple", "[]", &TRIPLE_INIT)
}
