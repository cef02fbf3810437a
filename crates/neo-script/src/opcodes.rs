//! NeoVM opcode constants.
//!
//! Only the opcodes the SDK emits or needs to name in ASM dumps are listed
//! individually; everything else renders as `UNKNOWN_0x..`.

// Constants
pub const PUSH0: u8 = 0x00;
pub const PUSHF: u8 = PUSH0;
pub const PUSHBYTES1: u8 = 0x01;
pub const PUSHBYTES20: u8 = 0x14;
pub const PUSHBYTES33: u8 = 0x21;
pub const PUSHBYTES64: u8 = 0x40;
pub const PUSHBYTES75: u8 = 0x4b;
pub const PUSHDATA1: u8 = 0x4c;
pub const PUSHDATA2: u8 = 0x4d;
pub const PUSHDATA4: u8 = 0x4e;
pub const PUSHM1: u8 = 0x4f;
pub const PUSH1: u8 = 0x51;
pub const PUSHT: u8 = PUSH1;
pub const PUSH2: u8 = 0x52;
pub const PUSH3: u8 = 0x53;
pub const PUSH4: u8 = 0x54;
pub const PUSH5: u8 = 0x55;
pub const PUSH6: u8 = 0x56;
pub const PUSH7: u8 = 0x57;
pub const PUSH8: u8 = 0x58;
pub const PUSH9: u8 = 0x59;
pub const PUSH10: u8 = 0x5a;
pub const PUSH11: u8 = 0x5b;
pub const PUSH12: u8 = 0x5c;
pub const PUSH13: u8 = 0x5d;
pub const PUSH14: u8 = 0x5e;
pub const PUSH15: u8 = 0x5f;
pub const PUSH16: u8 = 0x60;

// Flow control
pub const NOP: u8 = 0x61;
pub const JMP: u8 = 0x62;
pub const JMPIF: u8 = 0x63;
pub const JMPIFNOT: u8 = 0x64;
pub const CALL: u8 = 0x65;
pub const RET: u8 = 0x66;
pub const APPCALL: u8 = 0x67;
pub const SYSCALL: u8 = 0x68;
pub const TAILCALL: u8 = 0x69;

// Stack
pub const DUPFROMALTSTACK: u8 = 0x6a;
pub const TOALTSTACK: u8 = 0x6b;
pub const FROMALTSTACK: u8 = 0x6c;
pub const DROP: u8 = 0x75;
pub const DUP: u8 = 0x76;
pub const SWAP: u8 = 0x7c;

// Comparison
pub const EQUAL: u8 = 0x87;

// Crypto
pub const SHA1: u8 = 0xa7;
pub const SHA256: u8 = 0xa8;
pub const HASH160: u8 = 0xa9;
pub const HASH256: u8 = 0xaa;
pub const CHECKSIG: u8 = 0xac;
pub const VERIFY: u8 = 0xad;
pub const CHECKMULTISIG: u8 = 0xae;

// Array
pub const ARRAYSIZE: u8 = 0xc0;
pub const PACK: u8 = 0xc1;
pub const UNPACK: u8 = 0xc2;
pub const PICKITEM: u8 = 0xc3;
pub const SETITEM: u8 = 0xc4;
pub const NEWARRAY: u8 = 0xc5;
pub const NEWSTRUCT: u8 = 0xc6;

// Exceptions
pub const THROW: u8 = 0xf0;
pub const THROWIFNOT: u8 = 0xf1;

/// Return the mnemonic for an opcode.
///
/// Direct pushes (`0x01..=0x4b`) render as `PUSHBYTES<n>`.
pub fn opcode_to_string(op: u8) -> String {
    let name = match op {
        PUSH0 => "PUSH0",
        PUSHBYTES1..=PUSHBYTES75 => return format!("PUSHBYTES{}", op),
        PUSHDATA1 => "PUSHDATA1",
        PUSHDATA2 => "PUSHDATA2",
        PUSHDATA4 => "PUSHDATA4",
        PUSHM1 => "PUSHM1",
        PUSH1..=PUSH16 => return format!("PUSH{}", op - PUSH1 + 1),
        NOP => "NOP",
        JMP => "JMP",
        JMPIF => "JMPIF",
        JMPIFNOT => "JMPIFNOT",
        CALL => "CALL",
        RET => "RET",
        APPCALL => "APPCALL",
        SYSCALL => "SYSCALL",
        TAILCALL => "TAILCALL",
        DUPFROMALTSTACK => "DUPFROMALTSTACK",
        TOALTSTACK => "TOALTSTACK",
        FROMALTSTACK => "FROMALTSTACK",
        DROP => "DROP",
        DUP => "DUP",
        SWAP => "SWAP",
        EQUAL => "EQUAL",
        SHA1 => "SHA1",
        SHA256 => "SHA256",
        HASH160 => "HASH160",
        HASH256 => "HASH256",
        CHECKSIG => "CHECKSIG",
        VERIFY => "VERIFY",
        CHECKMULTISIG => "CHECKMULTISIG",
        ARRAYSIZE => "ARRAYSIZE",
        PACK => "PACK",
        UNPACK => "UNPACK",
        PICKITEM => "PICKITEM",
        SETITEM => "SETITEM",
        NEWARRAY => "NEWARRAY",
        NEWSTRUCT => "NEWSTRUCT",
        THROW => "THROW",
        THROWIFNOT => "THROWIFNOT",
        _ => return format!("UNKNOWN_0x{:02x}", op),
    };
    name.to_string()
}

/// Look up an opcode by mnemonic. Push-data opcodes are not returned;
/// data is written as hex in ASM.
pub fn string_to_opcode(name: &str) -> Option<u8> {
    let op = match name {
        "PUSH0" => PUSH0,
        "PUSHM1" => PUSHM1,
        "NOP" => NOP,
        "RET" => RET,
        "APPCALL" => APPCALL,
        "SYSCALL" => SYSCALL,
        "TAILCALL" => TAILCALL,
        "DUP" => DUP,
        "DROP" => DROP,
        "SWAP" => SWAP,
        "EQUAL" => EQUAL,
        "CHECKSIG" => CHECKSIG,
        "VERIFY" => VERIFY,
        "CHECKMULTISIG" => CHECKMULTISIG,
        "PACK" => PACK,
        "UNPACK" => UNPACK,
        "THROW" => THROW,
        "THROWIFNOT" => THROWIFNOT,
        _ => {
            let n: u8 = name.strip_prefix("PUSH")?.parse().ok()?;
            if (1..=16).contains(&n) {
                PUSH1 + n - 1
            } else {
                return None;
            }
        }
    };
    Some(op)
}
