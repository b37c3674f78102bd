//! Form field identifiers

use super::InputMask;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of the registration form, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    PostalCode,
    TaxId,
    Phone,
    Email,
    Password,
}

impl FieldId {
    pub const ALL: [FieldId; 6] = [
        FieldId::Name,
        FieldId::PostalCode,
        FieldId::TaxId,
        FieldId::Phone,
        FieldId::Email,
        FieldId::Password,
    ];

    /// Stable key used in payloads and logs
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PostalCode => "postalCode",
            Self::TaxId => "taxId",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome Completo",
            Self::PostalCode => "CEP",
            Self::TaxId => "CPF",
            Self::Phone => "Telefone celular (com DDD)",
            Self::Email => "E-mail",
            Self::Password => "Senha",
        }
    }

    /// Input mask applied while typing, if any
    pub fn mask(self) -> Option<InputMask> {
        match self {
            Self::PostalCode => Some(InputMask::PostalCode),
            Self::TaxId => Some(InputMask::TaxId),
            Self::Phone => Some(InputMask::CellPhone),
            Self::Name | Self::Email | Self::Password => None,
        }
    }

    /// Whether the value must be obscured on screen
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }

    /// Position in [`FieldId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
