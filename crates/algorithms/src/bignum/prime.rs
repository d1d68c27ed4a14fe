//! Probabilistic primality testing

use super::{BigNum, MontgomeryCtx};

/// Primes below 1000, used for trial division
const SMALL_PRIMES: [u64; 168] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43,
    47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97, 101, 103, 107,
    109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263,
    269, 271, 277, 281, 283, 293, 307, 311, 313, 317, 331, 337, 347, 349,
    353, 359, 367, 373, 379, 383, 389, 397, 401, 409, 419, 421, 431, 433,
    439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509, 521,
    523, 541, 547, 557, 563, 569, 571, 577, 587, 593, 599, 601, 607, 613,
    617, 619, 631, 641, 643, 647, 653, 659, 661, 673, 677, 683, 691, 701,
    709, 719, 727, 733, 739, 743, 751, 757, 761, 769, 773, 787, 797, 809,
    811, 821, 823, 827, 829, 839, 853, 857, 859, 863, 877, 881, 883, 887,
    907, 911, 919, 929, 937, 941, 947, 953, 967, 971, 977, 983, 991, 997,
];

/// Miller-Rabin witnesses
const MR_BASES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

impl BigNum {
    /// Trial division by the primes below 1000 followed by Miller-Rabin
    /// rounds with the first thirteen prime bases
    ///
    /// Deterministic for values below 3.3 * 10^24; the error probability
    /// for larger values is at most 4^-13.
    pub fn is_probable_prime(&self) -> bool {
        if self.limbs().len() <= 1 && self.low_u64() < 1000 {
            return SMALL_PRIMES.contains(&self.low_u64());
        }
        for &p in SMALL_PRIMES.iter() {
            if self.div_rem_limb(p).1 == 0 {
                return false;
            }
        }

        let n_minus_1 = self.sub(&BigNum::one());
        let s = n_minus_1.trailing_zeros();
        let d = n_minus_1.shr(s);
        let ctx = match MontgomeryCtx::new(self) {
            Ok(ctx) => ctx,
            Err(_) => return false,
        };

        'witness: for &a in MR_BASES.iter() {
            let mut x = ctx.exp(&BigNum::from_u64(a), &d);
            if x.is_one() || x == n_minus_1 {
                continue;
            }
            for _ in 1..s {
                x = x.mul(&x).div_rem_nonzero(self).1;
                if x == n_minus_1 {
                    continue 'witness;
                }
                if x.is_one() {
                    return false;
                }
            }
            return false;
        }
        true
    }
}
