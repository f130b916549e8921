use crate::config::validate_country_code;
use crate::error::Result;

/// 정규화된 번호의 최소 길이 (이 값 이하면 무효)
const MIN_NUMBER_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
}

/// 스프레드시트 한 행에서 얻은 연락처
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRecord {
    /// 셀 원본 값
    pub raw: String,
    /// 국가 코드가 붙은 번호
    pub phone: String,
    pub validity: Validity,
}

impl ContactRecord {
    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

pub struct RowValidator {
    country_code: String,
}

impl RowValidator {
    pub fn new(country_code: impl Into<String>) -> Result<Self> {
        let country_code = country_code.into();
        validate_country_code(&country_code)?;
        Ok(Self { country_code })
    }

    /// `+`로 시작하지 않으면 기본 국가 코드를 붙입니다.
    pub fn normalize(&self, raw: &str) -> String {
        let trimmed = raw.trim();
        if trimmed.starts_with('+') {
            trimmed.to_string()
        } else {
            format!("{}{}", self.country_code, trimmed)
        }
    }

    /// 길이 > 10 이고 `+` 뒤가 모두 숫자인 경우만 유효
    pub fn is_valid_number(phone: &str) -> bool {
        let Some(digits) = phone.strip_prefix('+') else {
            return false;
        };

        phone.chars().count() > MIN_NUMBER_LENGTH
            && !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit())
    }

    pub fn validate(&self, raw: &str) -> ContactRecord {
        let phone = self.normalize(raw);
        let validity = if Self::is_valid_number(&phone) {
            Validity::Valid
        } else {
            Validity::Invalid
        };

        ContactRecord {
            raw: raw.to_string(),
            phone,
            validity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> RowValidator {
        RowValidator::new("+91").unwrap()
    }

    #[test]
    fn test_prefixed_number_is_identity() {
        let v = validator();
        assert_eq!(v.normalize("+1234567891"), "+1234567891");
        assert_eq!(v.normalize("  +447700900123 "), "+447700900123");
    }

    #[test]
    fn test_unprefixed_number_gets_country_code() {
        let v = validator();
        assert_eq!(v.normalize("9876543210"), "+919876543210");
        assert_eq!(v.normalize(" 9876543210\t"), "+919876543210");
    }

    #[test]
    fn test_validity_rules() {
        let v = validator();

        let record = v.validate("9876543210");
        assert!(record.is_valid());
        assert_eq!(record.phone, "+919876543210");

        // 길이 10 이하
        assert!(!v.validate("+123456789").is_valid());
        assert!(!v.validate("12345").is_valid());

        // 숫자가 아닌 문자 포함
        assert!(!v.validate("abc").is_valid());
        assert!(!v.validate("98765-43210").is_valid());
        assert!(!v.validate("+1 234 567 891").is_valid());
    }

    #[test]
    fn test_length_boundary() {
        // "+" 포함 정확히 10자 → 무효, 11자 → 유효
        assert!(!RowValidator::is_valid_number("+123456789"));
        assert!(RowValidator::is_valid_number("+1234567890"));
    }

    #[test]
    fn test_invalid_record_keeps_raw_value() {
        let record = validator().validate("abc");
        assert_eq!(record.raw, "abc");
        assert_eq!(record.phone, "+91abc");
        assert_eq!(record.validity, Validity::Invalid);
    }

    #[test]
    fn test_rejects_bad_country_code() {
        assert!(RowValidator::new("91").is_err());
    }
}
