use crate::{
    group::{Additive, G1, G2, GT},
    Error,
};
use blst::{blst_final_exp, blst_fp12, blst_fp12_mul, blst_miller_loop};

/// Computes the pairing `e(G1, G2) -> GT`.
///
/// Returns [`GT::one`] if either input is the identity.
pub fn pairing(p: &G1, q: &G2) -> GT {
    if p.is_zero() || q.is_zero() {
        return GT::one();
    }

    // Reference: https://github.com/MystenLabs/fastcrypto/blob/bd4999bd3e901eab34ae3dd96dbe38b86ac646a7/fastcrypto/src/groups/bls12381.rs#L223-L234
    let pa = p.as_blst_p1_affine();
    let qa = q.as_blst_p2_affine();
    let mut ml = blst_fp12::default();
    let mut res = blst_fp12::default();
    unsafe {
        blst_miller_loop(&mut ml, &qa, &pa);
        blst_final_exp(&mut res, &ml);
    }
    GT::from_blst_fp12(res)
}

/// Computes the product of pairings `\prod e(g1_i, g2_i) -> GT`.
///
/// Returns [`GT::one`] for empty input and [`Error::LengthMismatch`] if the slices
/// differ in length.
pub fn multi_pairing(g1: &[G1], g2: &[G2]) -> Result<GT, Error> {
    if g1.len() != g2.len() {
        return Err(Error::LengthMismatch {
            g1: g1.len(),
            g2: g2.len(),
        });
    }

    // We can accumulate the miller loops and then do one final exponentiation.
    let mut acc: Option<blst_fp12> = None;
    for (p1, p2) in g1.iter().zip(g2.iter()) {
        // Pairs with an identity contribute nothing
        if p1.is_zero() || p2.is_zero() {
            continue;
        }
        let p1_affine = p1.as_blst_p1_affine();
        let p2_affine = p2.as_blst_p2_affine();

        let mut ml = blst_fp12::default();
        unsafe { blst_miller_loop(&mut ml, &p2_affine, &p1_affine) };

        acc = Some(match acc {
            None => ml,
            Some(prev) => {
                let mut next = blst_fp12::default();
                unsafe { blst_fp12_mul(&mut next, &prev, &ml) };
                next
            }
        });
    }

    let Some(acc) = acc else {
        return Ok(GT::one());
    };
    let mut result = blst_fp12::default();
    unsafe { blst_final_exp(&mut result, &acc) };
    Ok(GT::from_blst_fp12(result))
}
