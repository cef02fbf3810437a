//! Well-known global asset ids.

use neo_primitives::chainhash::Hash;

/// The NEO governing token, `c56f33fc…7c9b` in display order.
pub const NEO_ASSET_ID: Hash = Hash::new([
    0x9b, 0x7c, 0xff, 0xda, 0xa6, 0x74, 0xbe, 0xae,
    0x0f, 0x93, 0x0e, 0xbe, 0x60, 0x85, 0xaf, 0x90,
    0x93, 0xe5, 0xfe, 0x56, 0xb3, 0x4a, 0x5c, 0x22,
    0x0c, 0xcd, 0xcf, 0x6e, 0xfc, 0x33, 0x6f, 0xc5,
]);

/// The GAS utility token, `602c7971…2de7` in display order.
pub const GAS_ASSET_ID: Hash = Hash::new([
    0xe7, 0x2d, 0x28, 0x69, 0x79, 0xee, 0x6c, 0xb1,
    0xb7, 0xe6, 0x5d, 0xfd, 0xdf, 0xb2, 0xe3, 0x84,
    0x10, 0x0b, 0x8d, 0x14, 0x8e, 0x77, 0x58, 0xde,
    0x42, 0xe4, 0x16, 0x8b, 0x71, 0x79, 0x2c, 0x60,
]);
