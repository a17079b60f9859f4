//! Blue Midnight Wish 512 (second-round tweak)

const BLOCK_LEN: usize = 128;

/// Initial chaining value: bytes 0x80..=0xff read as big-endian words.
const IV: [u64; 16] = [
    0x8081828384858687, 0x88898A8B8C8D8E8F, 0x9091929394959697, 0x98999A9B9C9D9E9F,
    0xA0A1A2A3A4A5A6A7, 0xA8A9AAABACADAEAF, 0xB0B1B2B3B4B5B6B7, 0xB8B9BABBBCBDBEBF,
    0xC0C1C2C3C4C5C6C7, 0xC8C9CACBCCCDCECF, 0xD0D1D2D3D4D5D6D7, 0xD8D9DADBDCDDDEDF,
    0xE0E1E2E3E4E5E6E7, 0xE8E9EAEBECEDEEEF, 0xF0F1F2F3F4F5F6F7, 0xF8F9FAFBFCFDFEFF,
];

/// Signed index lists for the sixteen `W` words of f0.
const W_TERMS: [[(usize, bool); 5]; 16] = [
    [(5, true), (7, false), (10, true), (13, true), (14, true)],
    [(6, true), (8, false), (11, true), (14, true), (15, false)],
    [(0, true), (7, true), (9, true), (12, false), (15, true)],
    [(0, true), (1, false), (8, true), (10, false), (13, true)],
    [(1, true), (2, true), (9, true), (11, false), (14, false)],
    [(3, true), (2, false), (10, true), (12, false), (15, true)],
    [(4, true), (0, false), (3, false), (11, false), (13, true)],
    [(1, true), (4, false), (5, false), (12, false), (14, false)],
    [(2, true), (5, false), (6, false), (13, true), (15, false)],
    [(0, true), (3, false), (6, true), (7, false), (14, true)],
    [(8, true), (1, false), (4, false), (7, false), (15, true)],
    [(8, true), (0, false), (2, false), (5, false), (9, true)],
    [(1, true), (3, true), (6, false), (9, false), (10, true)],
    [(2, true), (4, true), (7, true), (10, true), (11, true)],
    [(3, true), (5, false), (8, true), (11, false), (12, false)],
    [(12, true), (4, false), (6, false), (9, false), (13, true)],
];

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let a = j - 16;
    let m0 = m[a % 16].rotate_left((a % 16) as u32 + 1);
    let m3 = m[(a + 3) % 16].rotate_left(((a + 3) % 16) as u32 + 1);
    let m10 = m[(a + 10) % 16].rotate_left(((a + 10) % 16) as u32 + 1);
    let k = (j as u64).wrapping_mul(0x0555555555555555);
    m0.wrapping_add(m3).wrapping_sub(m10).wrapping_add(k) ^ h[(a + 7) % 16]
}

fn compress(h: &[u64; 16], m: &[u64; 16]) -> [u64; 16] {
    let mut x = [0u64; 16];
    for i in 0..16 {
        x[i] = m[i] ^ h[i];
    }

    let mut q = [0u64; 32];
    for i in 0..16 {
        let w = W_TERMS[i].iter().fold(0u64, |acc, &(idx, add)| {
            if add {
                acc.wrapping_add(x[idx])
            } else {
                acc.wrapping_sub(x[idx])
            }
        });
        let s = match i % 5 {
            0 => s0(w),
            1 => s1(w),
            2 => s2(w),
            3 => s3(w),
            _ => s4(w),
        };
        q[i] = s.wrapping_add(h[(i + 1) % 16]);
    }

    for j in 16..18 {
        let mut t = 0u64;
        for k in 0..16 {
            let v = q[j - 16 + k];
            let s = match k % 4 {
                0 => s1(v),
                1 => s2(v),
                2 => s3(v),
                _ => s0(v),
            };
            t = t.wrapping_add(s);
        }
        q[j] = t.wrapping_add(add_element(m, h, j));
    }

    for j in 18..32 {
        let t = q[j - 16]
            .wrapping_add(q[j - 15].rotate_left(5))
            .wrapping_add(q[j - 14])
            .wrapping_add(q[j - 13].rotate_left(11))
            .wrapping_add(q[j - 12])
            .wrapping_add(q[j - 11].rotate_left(27))
            .wrapping_add(q[j - 10])
            .wrapping_add(q[j - 9].rotate_left(32))
            .wrapping_add(q[j - 8])
            .wrapping_add(q[j - 7].rotate_left(37))
            .wrapping_add(q[j - 6])
            .wrapping_add(q[j - 5].rotate_left(43))
            .wrapping_add(q[j - 4])
            .wrapping_add(q[j - 3].rotate_left(53))
            .wrapping_add(s4(q[j - 2]))
            .wrapping_add(s5(q[j - 1]));
        q[j] = t.wrapping_add(add_element(m, h, j));
    }

    let xl = q[16..24].iter().fold(0u64, |acc, v| acc ^ v);
    let xh = q[24..32].iter().fold(xl, |acc, v| acc ^ v);

    let mut n = [0u64; 16];
    n[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    n[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    n[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    n[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    n[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    n[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    n[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    n[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    n[8] = n[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    n[9] = n[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    n[10] = n[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    n[11] = n[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    n[12] = n[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    n[13] = n[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    n[14] = n[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    n[15] = n[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    n
}

fn load_block(block: &[u8]) -> [u64; 16] {
    let mut m = [0u64; 16];
    for (i, word) in m.iter_mut().enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&block[i * 8..i * 8 + 8]);
        *word = u64::from_le_bytes(bytes);
    }
    m
}

/// BMW-512 digest of `data`
pub fn bmw512(data: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let mut chunks = data.chunks_exact(BLOCK_LEN);
    for chunk in chunks.by_ref() {
        h = compress(&h, &load_block(chunk));
    }

    let rest = chunks.remainder();
    let mut block = [0u8; BLOCK_LEN];
    block[..rest.len()].copy_from_slice(rest);
    block[rest.len()] = 0x80;
    if rest.len() >= BLOCK_LEN - 8 {
        h = compress(&h, &load_block(&block));
        block = [0u8; BLOCK_LEN];
    }
    block[BLOCK_LEN - 8..].copy_from_slice(&bit_len.to_le_bytes());
    h = compress(&h, &load_block(&block));

    let mut finalization = [0u64; 16];
    for (i, word) in finalization.iter_mut().enumerate() {
        *word = 0xaaaaaaaaaaaaaaa0 + i as u64;
    }
    let h = compress(&finalization, &h);

    let mut out = [0u8; 64];
    for (i, word) in h[8..].iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af\
             7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
    }

    #[test]
    fn test_digest_sized_input() {
        let data: Vec<u8> = (0u8..64).collect();
        assert_eq!(
            hex::encode(bmw512(&data)),
            "824168671c2e3f35ebba82b63b9e6c42b8411cdcda1041264bb5f50abd507d18\
             27edcfff050f6c8675cb8ccba8699c843dcf5fb81ccadab1deef0d9cf4770257"
        );
    }
}
