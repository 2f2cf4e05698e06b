//! Calculation input models.
//!
//! The upstream wire contract delivers one shared record of optional,
//! schedule-specific fields; the field names of that contract are preserved
//! through serde renames. Numeric fields may arrive as JSON numbers or as
//! locale-formatted strings and are normalised at the parsing boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A wire value that may be a native number or a locale-formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A native JSON number.
    Number(f64),
    /// A string, possibly locale-formatted ("1.234,56").
    Text(String),
}

/// Position selector within a tier's rate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierIntensity {
    /// The minimum rate of the range.
    Min,
    /// The midpoint of the range.
    Mid,
    /// The maximum rate of the range.
    Max,
}

impl TierIntensity {
    /// Parses a wire selector; anything other than `min`/`max` is the
    /// midpoint.
    pub fn parse(selector: &str) -> Self {
        match selector {
            "min" => Self::Min,
            "max" => Self::Max,
            _ => Self::Mid,
        }
    }

    /// Resolves the selected rate within a `[min_rate, max_rate]` range.
    pub fn rate_within(self, min_rate: Decimal, max_rate: Decimal) -> Decimal {
        match self {
            Self::Min => min_rate,
            Self::Max => max_rate,
            Self::Mid => (min_rate + max_rate) / Decimal::TWO,
        }
    }
}

/// Role held within a supervisory board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupervisoryRole {
    /// Ordinary board member.
    #[default]
    Member,
    /// Board president (+50% disclosure).
    President,
    /// Sole auditor (+100% disclosure).
    SoleAuditor,
}

impl SupervisoryRole {
    /// Parses a wire role tag; unknown tags are ordinary members.
    pub fn parse(tag: &str) -> Self {
        match tag {
            "presidente" => Self::President,
            "sindaco_unico" => Self::SoleAuditor,
            _ => Self::Member,
        }
    }
}

/// A fixed-fee item of the tax return checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxReturnItem {
    /// Personal income return, no VAT number.
    IndividualNoVat,
    /// Personal income return with VAT number.
    IndividualVat,
    /// Partnership income return.
    Partnership,
    /// Corporation income return.
    Corporation,
    /// IRAP return.
    Irap,
    /// VAT return.
    Vat,
    /// Withholding agent return.
    WithholdingAgent,
    /// Inheritance declaration.
    Inheritance,
    /// Other filings and declarations.
    Other,
    /// Electronic filing, per item.
    ElectronicFiling,
}

impl TaxReturnItem {
    /// Resolves a checklist item id; unknown ids are skipped by callers.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "pf_no_piva" => Some(Self::IndividualNoVat),
            "pf_piva" => Some(Self::IndividualVat),
            "soc_persone" => Some(Self::Partnership),
            "soc_capitali" => Some(Self::Corporation),
            "irap" => Some(Self::Irap),
            "iva" => Some(Self::Vat),
            "sostituti" => Some(Self::WithholdingAgent),
            "successione" => Some(Self::Inheritance),
            "altre" => Some(Self::Other),
            "invio" => Some(Self::ElectronicFiling),
            _ => None,
        }
    }

    /// The label rendered in the document.
    pub fn label(self) -> &'static str {
        match self {
            Self::IndividualNoVat => "Redditi Persone Fisiche (no P.IVA)",
            Self::IndividualVat => "Redditi Persone Fisiche con P.IVA",
            Self::Partnership => "Redditi Società di Persone",
            Self::Corporation => "Redditi Società di Capitali",
            Self::Irap => "Dichiarazione IRAP",
            Self::Vat => "Dichiarazione IVA",
            Self::WithholdingAgent => "Sostituti d'Imposta",
            Self::Inheritance => "Dichiarazione di Successione",
            Self::Other => "Altre comunicazioni/dichiarazioni",
            Self::ElectronicFiling => "Invio Telematico (per singola voce)",
        }
    }

    /// The flat statutory fee for this item.
    pub fn fee(self) -> Decimal {
        let amount = match self {
            Self::IndividualNoVat => 150,
            Self::IndividualVat => 450,
            Self::Partnership => 550,
            Self::Corporation => 650,
            Self::Irap => 200,
            Self::Vat => 250,
            Self::WithholdingAgent => 150,
            Self::Inheritance => 350,
            Self::Other => 100,
            Self::ElectronicFiling => 20,
        };
        Decimal::from(amount)
    }
}

/// The named bag of optional calculation inputs shared by all schedules.
///
/// Wire field names follow the upstream contract; every field is optional
/// and irrelevant fields are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Free-text practice name.
    #[serde(default, rename = "nome_pratica", skip_serializing_if = "Option::is_none")]
    pub practice_name: Option<String>,
    /// Free-text client or company name.
    #[serde(default, rename = "cliente_nome", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Primary reference value.
    #[serde(default, rename = "valore", skip_serializing_if = "Option::is_none")]
    pub primary_value: Option<RawValue>,
    /// Secondary reference value.
    #[serde(default, rename = "valore2", skip_serializing_if = "Option::is_none")]
    pub secondary_value: Option<RawValue>,
    /// Tertiary reference value.
    #[serde(default, rename = "valore3", skip_serializing_if = "Option::is_none")]
    pub tertiary_value: Option<RawValue>,
    /// Custom rate for the first tier.
    #[serde(
        default,
        rename = "aliquota_scaglione_1",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier_rate_1: Option<RawValue>,
    /// Custom rate for the second tier.
    #[serde(
        default,
        rename = "aliquota_scaglione_2",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier_rate_2: Option<RawValue>,
    /// Intensity selector for the first tier (`min`/`mid`/`max`).
    #[serde(
        default,
        rename = "intensity_scaglione_1",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier_intensity_1: Option<String>,
    /// Intensity selector for the second tier.
    #[serde(
        default,
        rename = "intensity_scaglione_2",
        skip_serializing_if = "Option::is_none"
    )]
    pub tier_intensity_2: Option<String>,
    /// Custom consulting rate (1%–5% range).
    #[serde(
        default,
        rename = "aliquota_consulenza",
        skip_serializing_if = "Option::is_none"
    )]
    pub consulting_rate: Option<RawValue>,
    /// Percentage position within the range (0 = minimum, 100 = maximum).
    #[serde(default, rename = "percentuale", skip_serializing_if = "Option::is_none")]
    pub percentage: Option<RawValue>,
    /// The fee actually agreed with the client.
    #[serde(
        default,
        rename = "corrispettivoPattuito",
        skip_serializing_if = "Option::is_none"
    )]
    pub agreed_fee: Option<RawValue>,
    /// Selected fixed-fee checklist item ids.
    #[serde(
        default,
        rename = "dichiarazioniMulti",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tax_return_items: Vec<String>,
    /// Supervisory board role tag.
    #[serde(default, rename = "ruoloSindaco", skip_serializing_if = "Option::is_none")]
    pub supervisory_role: Option<String>,
    /// Negative-outcome flag for insolvency assistance.
    #[serde(default, rename = "esitoNegativo")]
    pub negative_outcome: bool,
    /// Reduction flag for administration-only or liquidation companies.
    #[serde(default, rename = "riduzioneComma2")]
    pub management_reduction: bool,
    /// Document subtype tag, used only to disambiguate normative text.
    #[serde(default, rename = "documentType", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
}

impl CalculationInput {
    /// The first-tier intensity selector, ignoring empty strings.
    pub fn intensity_1(&self) -> Option<&str> {
        self.tier_intensity_1.as_deref().filter(|s| !s.is_empty())
    }

    /// The second-tier intensity selector, ignoring empty strings.
    pub fn intensity_2(&self) -> Option<&str> {
        self.tier_intensity_2.as_deref().filter(|s| !s.is_empty())
    }

    /// The resolved supervisory role; absent tags are ordinary members.
    pub fn role(&self) -> SupervisoryRole {
        self.supervisory_role
            .as_deref()
            .map(SupervisoryRole::parse)
            .unwrap_or_default()
    }
}
