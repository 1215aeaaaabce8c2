//! 邀请码生成
//!
//! 字母表剔除了易混淆字符（I/O/0/1）。唯一性不在这里保证，
//! 由 classes 表的唯一索引保证，冲突时存储层重新生成。

use rand::Rng;

pub const INVITE_CODE_LENGTH: usize = 8;

const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub fn generate_invite_code() -> String {
    generate_random_code(INVITE_CODE_LENGTH)
}

pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_ALPHABET.len());
            CODE_ALPHABET[idx] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length() {
        assert_eq!(generate_invite_code().len(), INVITE_CODE_LENGTH);
        assert_eq!(generate_random_code(6).len(), 6);
    }

    #[test]
    fn test_code_alphabet() {
        // 不应包含易混淆字符
        for _ in 0..100 {
            let code = generate_invite_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_alphanumeric() && !"IO01".contains(c)),
                "unexpected character in invite code: {code}"
            );
        }
    }

    #[test]
    fn test_codes_vary() {
        // 碰撞概率 32^-8，两次生成相同视为生成器坏掉
        let a = generate_invite_code();
        let b = generate_invite_code();
        assert_ne!(a, b);
    }
}
