//! Published curve constants.
//!
//! The generator strings use the raw text form (see [`crate::text`]) with
//! hexadecimal coordinates and are part of the public contract: they must parse
//! to exactly [`G1::generator`] and [`G2::generator`].

use crate::group::{Point, G1, G2};
use num_bigint::BigUint;
use std::sync::OnceLock;

/// The order `r` of G1, G2, and GT (and the modulus of the scalar field).
pub const ORDER: &str = "0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

/// The modulus `p` of the base field.
pub const FIELD_MODULUS: &str = "0x1a0111ea397fe69a4b1ba7b6434bacd764774b84f38512bf6730d2a0f6b0f6241eabfffeb153ffffb9feffffffffaaab";

/// The canonical generator of G1.
pub const G1_GENERATOR: &str = "1 0x17f1d3a73197d7942695638c4fa9ac0fc3688c4f9774b905a14e3a3f171bac586c55e83ff97a1aeffb3af00adb22c6bb 0x08b3f481e3aaa0f1a09e30ed741d8ae4fcf5e095d5d00af600db18cb2c04b3edd03cc744a2888ae40caa232946c5e7e1";

/// The canonical generator of G2 (coordinates written as `c0 c1`).
pub const G2_GENERATOR: &str = "1 0x24aa2b2f08f0a91260805272dc51051c6e47ad4fa403b02b4510b647ae3d1770bac0326a805bbefd48056c8c121bdb8 0x13e02b6052719f607dacd3a088274f65596bd0d09920b61ab5da61bbdc7f5049334cf11213945d57e5ac7d055d042b7e 0x0ce5d527727d6e118cc9cdc6da2e351aadfd9baa8cbdd3a76d429a695160d12c923ac9cc3baca289e193548608b82801 0x0606c4a02ea734cc32acd2b02bc28b99cb3e287e85a763af267492ab572e99ab3f370d275cec1da1aaa9075ff05f79be";

static ORDER_VALUE: OnceLock<BigUint> = OnceLock::new();

/// Returns the group order `r`.
pub fn order() -> &'static BigUint {
    ORDER_VALUE.get_or_init(|| {
        // Little-endian 32-bit digits of ORDER
        BigUint::from_slice(&[
            0x0000_0001,
            0xffff_ffff,
            0xfffe_5bfe,
            0x53bd_a402,
            0x09a1_d805,
            0x3339_d808,
            0x299d_7d48,
            0x73ed_a753,
        ])
    })
}

/// Returns the canonical generator of G1.
pub fn g1() -> G1 {
    G1::generator()
}

/// Returns the canonical generator of G2.
pub fn g2() -> G2 {
    G2::generator()
}
