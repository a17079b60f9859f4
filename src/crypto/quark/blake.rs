//! BLAKE-512 (final-round SHA-3 submission, 16 rounds)

const IV: [u64; 8] = [
    0x6A09E667F3BCC908, 0xBB67AE8584CAA73B, 0x3C6EF372FE94F82B, 0xA54FF53A5F1D36F1,
    0x510E527FADE682D1, 0x9B05688C2B3E6C1F, 0x1F83D9ABFB41BD6B, 0x5BE0CD19137E2179,
];

/// Leading digits of pi
const C: [u64; 16] = [
    0x243F6A8885A308D3, 0x13198A2E03707344, 0xA4093822299F31D0, 0x082EFA98EC4E6C89,
    0x452821E638D01377, 0xBE5466CF34E90C6C, 0xC0AC29B7C97C50DD, 0x3F84D5B5B5470917,
    0x9216D5D98979FB1B, 0xD1310BA698DFB5AC, 0x2FFD72DBD01ADFB7, 0xB8E1AFED6A267E96,
    0xBA7C9045F12C7F99, 0x24A19947B3916CF7, 0x0801F2E2858EFC16, 0x636920D871574E69,
];

const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

const ROUNDS: usize = 16;
const BLOCK_LEN: usize = 128;

/// Compress one block. `counter` is the number of message bits covered so
/// far including this block, or zero for a block holding padding only.
fn compress(h: &mut [u64; 8], block: &[u8; BLOCK_LEN], counter: u64) {
    let mut m = [0u64; 16];
    for (i, word) in m.iter_mut().enumerate() {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&block[i * 8..i * 8 + 8]);
        *word = u64::from_be_bytes(bytes);
    }

    let mut v = [0u64; 16];
    v[..8].copy_from_slice(h);
    v[8..12].copy_from_slice(&C[..4]);
    v[12] = counter ^ C[4];
    v[13] = counter ^ C[5];
    v[14] = C[6];
    v[15] = C[7];

    for round in 0..ROUNDS {
        let s = &SIGMA[round % 10];
        g(&mut v, &m, s, 0, 4, 8, 12, 0);
        g(&mut v, &m, s, 1, 5, 9, 13, 1);
        g(&mut v, &m, s, 2, 6, 10, 14, 2);
        g(&mut v, &m, s, 3, 7, 11, 15, 3);
        g(&mut v, &m, s, 0, 5, 10, 15, 4);
        g(&mut v, &m, s, 1, 6, 11, 12, 5);
        g(&mut v, &m, s, 2, 7, 8, 13, 6);
        g(&mut v, &m, s, 3, 4, 9, 14, 7);
    }

    for i in 0..8 {
        h[i] ^= v[i] ^ v[i + 8];
    }
}

#[allow(clippy::too_many_arguments)]
#[inline(always)]
fn g(v: &mut [u64; 16], m: &[u64; 16], s: &[usize; 16], a: usize, b: usize, c: usize, d: usize, i: usize) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[s[2 * i]] ^ C[s[2 * i + 1]]);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(25);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(m[s[2 * i + 1]] ^ C[s[2 * i]]);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(11);
}

/// BLAKE-512 digest of `data`
pub fn blake512(data: &[u8]) -> [u8; 64] {
    let mut h = IV;
    let bit_len = (data.len() as u64).wrapping_mul(8);

    let mut chunks = data.chunks_exact(BLOCK_LEN);
    let mut processed: u64 = 0;
    for chunk in chunks.by_ref() {
        processed += (BLOCK_LEN * 8) as u64;
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        compress(&mut h, &block, processed);
    }

    let rest = chunks.remainder();
    let mut block = [0u8; BLOCK_LEN];
    block[..rest.len()].copy_from_slice(rest);
    block[rest.len()] = 0x80;

    // The trailing 0x01 marker and 128-bit length take the last 17 bytes.
    if rest.len() <= 111 {
        block[111] |= 0x01;
        block[112..120].copy_from_slice(&0u64.to_be_bytes());
        block[120..].copy_from_slice(&bit_len.to_be_bytes());
        let counter = if rest.is_empty() { 0 } else { bit_len };
        compress(&mut h, &block, counter);
    } else {
        compress(&mut h, &block, bit_len);
        let mut tail = [0u8; BLOCK_LEN];
        tail[111] = 0x01;
        tail[120..].copy_from_slice(&bit_len.to_be_bytes());
        compress(&mut h, &tail, 0);
    }

    let mut out = [0u8; 64];
    for (i, word) in h.iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&word.to_be_bytes());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b\
             628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
    }

    #[test]
    fn test_header_sized_input() {
        let data: Vec<u8> = (0u8..80).collect();
        assert_eq!(
            hex::encode(blake512(&data)),
            "dbc2a88576bdc79a75daad04c14262237cba3eed3421381c5ae269e8f2ac537d\
             dc87a7bef5267469daea8a63e35437a0f30ce92cea8e25dc67b9848be1276536"
        );
    }
}
