/// NEO SDK - Scripts, script hashes and addresses.
///
/// Provides the NeoVM `Script` type and builder, opcode definitions,
/// script chunk parsing, `ScriptHash`, and Base58Check `Address` handling.

pub mod script;
pub mod opcodes;
pub mod chunk;
pub mod address;

mod error;
pub use error::ScriptError;
pub use script::Script;
pub use address::{Address, ScriptHash};
pub use chunk::ScriptChunk;
