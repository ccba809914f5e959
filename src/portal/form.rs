//! フォームの解析と送信データ

use scraper::{Html, Selector};
use serde::Serialize;

use crate::card::OvChipCard;
use crate::error::ScraperError;

use super::types::Step;

/// 同意フラグ（常に1を送信）
const OPT_IN: u8 = 1;

/// `name` が `field` と完全一致する `<input>` の `value` を取り出す
///
/// フィールドが存在しない、または `value` 属性がない場合はエラー。
/// 空のトークンを送信しないようにするため。
pub fn extract_token(html: &str, step: Step, field: &str) -> Result<String, ScraperError> {
    let document = Html::parse_document(html);
    let input_sel = Selector::parse("input").expect("input selector is valid");

    document
        .select(&input_sel)
        .find(|input| input.value().attr("name") == Some(field))
        .and_then(|input| input.value().attr("value"))
        .map(str::to_string)
        .ok_or_else(|| ScraperError::TokenNotFound {
            step,
            field: field.to_string(),
        })
}

/// カード情報フォーム
#[derive(Debug, Serialize)]
pub struct CardInformationForm<'a> {
    #[serde(rename = "tls_card_information[_token]")]
    pub token: &'a str,
    #[serde(rename = "tls_card_information[engravedId][0]")]
    pub engraved_id_0: &'a str,
    #[serde(rename = "tls_card_information[engravedId][1]")]
    pub engraved_id_1: &'a str,
    #[serde(rename = "tls_card_information[engravedId][2]")]
    pub engraved_id_2: &'a str,
    #[serde(rename = "tls_card_information[engravedId][3]")]
    pub engraved_id_3: &'a str,
    #[serde(rename = "tls_card_information[expirationDate]")]
    pub expiration_date: &'a str,
    #[serde(rename = "tls_card_information[optIn]")]
    pub opt_in: u8,
}

impl<'a> CardInformationForm<'a> {
    pub fn new(token: &'a str, card: &'a OvChipCard, valid_until: &'a str) -> Self {
        let [first, second, third, fourth] = card.parts();
        Self {
            token,
            engraved_id_0: first,
            engraved_id_1: second,
            engraved_id_2: third,
            engraved_id_3: fourth,
            expiration_date: valid_until,
            opt_in: OPT_IN,
        }
    }
}

/// 個人情報フォーム
#[derive(Debug, Serialize)]
pub struct PersonInformationForm<'a> {
    #[serde(rename = "tls_person_information[_token]")]
    pub token: &'a str,
    #[serde(rename = "tls_person_information[holderBirthDate]")]
    pub holder_birth_date: &'a str,
}

impl<'a> PersonInformationForm<'a> {
    pub fn new(token: &'a str, birth_date: &'a str) -> Self {
        Self {
            token,
            holder_birth_date: birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::types::{CARD_TOKEN_FIELD, PERSON_TOKEN_FIELD};

    const CARD_PAGE: &str = r#"
        <html><body>
          <form name="tls_card_information" method="post">
            <input type="text" name="tls_card_information[engravedId][0]">
            <input type="hidden" id="tls_card_information__token"
                   name="tls_card_information[_token]" value="T1">
          </form>
        </body></html>
    "#;

    #[test]
    fn test_extract_token() {
        let token = extract_token(CARD_PAGE, Step::CardInformation, CARD_TOKEN_FIELD).unwrap();
        assert_eq!(token, "T1");
    }

    #[test]
    fn test_extract_token_requires_exact_name() {
        let html = r#"<input name="tls_card_information[_token]x" value="wrong">
                      <input name="tls_person_information[_token]" value="T2">"#;
        let err = extract_token(html, Step::CardInformation, CARD_TOKEN_FIELD).unwrap_err();
        assert!(matches!(
            err,
            ScraperError::TokenNotFound { step: Step::CardInformation, ref field } if field == CARD_TOKEN_FIELD
        ));

        let token = extract_token(html, Step::PersonInformation, PERSON_TOKEN_FIELD).unwrap();
        assert_eq!(token, "T2");
    }

    #[test]
    fn test_extract_token_without_value() {
        let html = r#"<input type="hidden" name="tls_person_information[_token]">"#;
        let result = extract_token(html, Step::PersonInformation, PERSON_TOKEN_FIELD);
        assert!(matches!(result, Err(ScraperError::TokenNotFound { .. })));
    }

    #[test]
    fn test_extract_token_ignores_non_input_elements() {
        let html = r#"<textarea name="tls_card_information[_token]">T1</textarea>"#;
        assert!(extract_token(html, Step::CardInformation, CARD_TOKEN_FIELD).is_err());
    }

    #[test]
    fn test_card_information_form_encoding() {
        let card = OvChipCard::new("3528123456789012").unwrap();
        let form = CardInformationForm::new("T1", &card, "31-12-2030");
        let body = serde_urlencoded::to_string(&form).unwrap();

        assert_eq!(
            body,
            "tls_card_information%5B_token%5D=T1\
             &tls_card_information%5BengravedId%5D%5B0%5D=3528\
             &tls_card_information%5BengravedId%5D%5B1%5D=1234\
             &tls_card_information%5BengravedId%5D%5B2%5D=5678\
             &tls_card_information%5BengravedId%5D%5B3%5D=9012\
             &tls_card_information%5BexpirationDate%5D=31-12-2030\
             &tls_card_information%5BoptIn%5D=1"
        );
    }

    #[test]
    fn test_person_information_form_encoding() {
        let form = PersonInformationForm::new("T2", "01-01-1990");
        let body = serde_urlencoded::to_string(&form).unwrap();

        assert_eq!(
            body,
            "tls_person_information%5B_token%5D=T2\
             &tls_person_information%5BholderBirthDate%5D=01-01-1990"
        );
    }
}
