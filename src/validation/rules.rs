//! Per-field validation rules
//!
//! Each field maps to an ordered list of checks. The first failing check
//! provides the field's single error message.

use super::{FieldId, ValidationProfile};
use crate::error::FieldValidationError;
use crate::state::FormValues;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-ZÀ-ÿ\s']+$").expect("name pattern compiles"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// HTML `type=email` address grammar: dot-atom local part, hostname labels
static EMAIL_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email address pattern compiles")
});

static PASSWORD_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9@$!%*#?&]{8,}$").expect("password pattern compiles"));

static ACCENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[çáàãâéêíóôõúü]").expect("accent pattern compiles"));

/// Symbols a password may (and must) draw from
const PASSWORD_SYMBOLS: &str = "@$!%*#?&";
const PASSWORD_MIN_CHARS: usize = 8;

/// A single check and the message reported when it fails
struct Rule {
    check: fn(&str) -> bool,
    message: &'static str,
}

const STRICT_NAME: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe seu nome completo",
    },
    Rule {
        check: is_name,
        message: "Nome deve conter apenas letras",
    },
];

const LENIENT_NAME: &[Rule] = &[Rule {
    check: is_present,
    message: "Informe seu nome completo",
}];

const STRICT_POSTAL_CODE: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o CEP",
    },
    Rule {
        check: |v| digit_count(v) == 8,
        message: "CEP inválido",
    },
];

const LENIENT_POSTAL_CODE: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o CEP",
    },
    Rule {
        check: |v| char_count(v) == 9,
        message: "CEP inválido",
    },
];

const STRICT_TAX_ID: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o CPF",
    },
    Rule {
        check: |v| digit_count(v) == 11,
        message: "CPF inválido",
    },
];

const LENIENT_TAX_ID: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o CPF",
    },
    Rule {
        check: |v| char_count(v) == 14,
        message: "CPF inválido",
    },
];

const STRICT_PHONE: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o telefone",
    },
    Rule {
        check: |v| (10..=11).contains(&digit_count(v)),
        message: "Telefone inválido",
    },
];

const LENIENT_PHONE: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o telefone",
    },
    Rule {
        check: |v| char_count(v) >= 14,
        message: "Telefone inválido",
    },
];

const EMAIL: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe o e-mail",
    },
    Rule {
        check: |v| EMAIL_ADDRESS_REGEX.is_match(v),
        message: "E-mail inválido",
    },
    Rule {
        check: |v| EMAIL_REGEX.is_match(v),
        message: "E-mail inválido",
    },
];

const PASSWORD: &[Rule] = &[
    Rule {
        check: is_present,
        message: "Informe a senha",
    },
    Rule {
        check: |v| char_count(v) >= PASSWORD_MIN_CHARS,
        message: "A senha deve ter no mínimo 8 caracteres",
    },
    Rule {
        check: is_strong_password,
        message: "A senha deve conter letra minúscula, maiúscula, número e caractere especial. Sem acentos ou ç.",
    },
    Rule {
        check: |v| !ACCENT_REGEX.is_match(v),
        message: "A senha não pode conter acentos ou \"ç\"",
    },
];

fn rule_table(profile: ValidationProfile, field: FieldId) -> &'static [Rule] {
    use ValidationProfile::{Lenient, Strict};

    match (profile, field) {
        (Strict, FieldId::Name) => STRICT_NAME,
        (Lenient, FieldId::Name) => LENIENT_NAME,
        (Strict, FieldId::PostalCode) => STRICT_POSTAL_CODE,
        (Lenient, FieldId::PostalCode) => LENIENT_POSTAL_CODE,
        (Strict, FieldId::TaxId) => STRICT_TAX_ID,
        (Lenient, FieldId::TaxId) => LENIENT_TAX_ID,
        (Strict, FieldId::Phone) => STRICT_PHONE,
        (Lenient, FieldId::Phone) => LENIENT_PHONE,
        (_, FieldId::Email) => EMAIL,
        (_, FieldId::Password) => PASSWORD,
    }
}

fn is_present(value: &str) -> bool {
    !value.is_empty()
}

fn is_name(value: &str) -> bool {
    NAME_REGEX.is_match(value)
}

fn is_strong_password(value: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(value)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

fn char_count(value: &str) -> usize {
    value.chars().count()
}

fn digit_count(value: &str) -> usize {
    digits_only(value).len()
}

/// Strip everything except ASCII digits (mask separators, spaces, letters)
fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Validate one field's raw value under `profile`
pub fn validate_field(
    profile: ValidationProfile,
    field: FieldId,
    value: &str,
) -> Result<(), FieldValidationError> {
    match rule_table(profile, field)
        .iter()
        .find(|rule| !(rule.check)(value))
    {
        Some(rule) => Err(FieldValidationError::new(field, rule.message)),
        None => Ok(()),
    }
}

/// Validate every field, returning the failures in field order
pub fn validate_all(profile: ValidationProfile, values: &FormValues) -> Vec<FieldValidationError> {
    FieldId::ALL
        .into_iter()
        .filter_map(|field| validate_field(profile, field, values.get(field)).err())
        .collect()
}

/// True iff every field passes its rule
pub fn is_valid(profile: ValidationProfile, values: &FormValues) -> bool {
    FieldId::ALL
        .into_iter()
        .all(|field| validate_field(profile, field, values.get(field)).is_ok())
}
