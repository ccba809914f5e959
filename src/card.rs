//! OVチップカード番号

use std::fmt;
use std::str::FromStr;

use crate::error::ScraperError;

/// 発行者プレフィックス
pub const ISSUER_PREFIX: &str = "3528";

const CARD_DIGITS: usize = 16;
const GROUP_LEN: usize = 4;

/// 検証済みのカード番号
///
/// 数字以外の文字を取り除いた16桁で、先頭4桁が [`ISSUER_PREFIX`] のもの。
/// 生成後は変更できない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvChipCard {
    first_part: String,
    second_part: String,
    third_part: String,
    fourth_part: String,
    number: String,
}

impl OvChipCard {
    pub fn new(raw: &str) -> Result<Self, ScraperError> {
        let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

        if digits.len() != CARD_DIGITS {
            return Err(ScraperError::CardNumberLength(digits));
        }
        if !digits.starts_with(ISSUER_PREFIX) {
            return Err(ScraperError::CardNumberPrefix(digits));
        }

        // ASCII数字のみなのでバイト境界で分割できる
        let group = |i: usize| digits[i * GROUP_LEN..(i + 1) * GROUP_LEN].to_string();
        let (first_part, second_part, third_part, fourth_part) =
            (group(0), group(1), group(2), group(3));
        let number = [&first_part, &second_part, &third_part, &fourth_part]
            .map(String::as_str)
            .join("-");

        Ok(Self {
            first_part,
            second_part,
            third_part,
            fourth_part,
            number,
        })
    }

    pub fn first_part(&self) -> &str {
        &self.first_part
    }

    pub fn second_part(&self) -> &str {
        &self.second_part
    }

    pub fn third_part(&self) -> &str {
        &self.third_part
    }

    pub fn fourth_part(&self) -> &str {
        &self.fourth_part
    }

    /// ダッシュ区切りの番号 (AAAA-BBBB-CCCC-DDDD)
    pub fn number(&self) -> &str {
        &self.number
    }

    /// 4桁ずつのグループ（先頭から順）
    pub fn parts(&self) -> [&str; 4] {
        [
            &self.first_part,
            &self.second_part,
            &self.third_part,
            &self.fourth_part,
        ]
    }
}

impl fmt::Display for OvChipCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl FromStr for OvChipCard {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for OvChipCard {
    type Error = ScraperError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
