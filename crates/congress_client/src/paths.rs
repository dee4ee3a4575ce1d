//! Enumerations that appear as path segments.
//!
//! Each renders in lowercase, the form the API expects in URLs, and parses
//! case-insensitively so values taken from response bodies (`"HR"`,
//! `"Senate"`) convert back.

use serde::{Deserialize, Serialize};

/// Kind of bill or resolution.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum BillType {
    /// House bill
    Hr,
    /// House joint resolution
    Hjres,
    /// House concurrent resolution
    Hconres,
    /// House simple resolution
    Hres,
    /// Senate bill
    S,
    /// Senate joint resolution
    Sjres,
    /// Senate concurrent resolution
    Sconres,
    /// Senate simple resolution
    Sres,
}

/// Kind of amendment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum AmendmentType {
    /// House amendment
    Hamdt,
    /// Senate amendment
    Samdt,
    /// Senate unprinted amendment (97th and 98th Congresses)
    Suamdt,
}

/// Chamber of Congress.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Chamber {
    /// House of Representatives
    House,
    /// Senate
    Senate,
    /// Joint committees
    Joint,
    /// Items not tied to a chamber
    NoChamber,
}

/// Public or private law.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum LawType {
    /// Public law
    #[strum(serialize = "pub")]
    #[serde(rename = "pub")]
    Public,
    /// Private law
    #[strum(serialize = "priv")]
    #[serde(rename = "priv")]
    Private,
}

/// Kind of committee report.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommitteeReportType {
    /// House report
    Hrpt,
    /// Senate report
    Srpt,
    /// Executive report
    Erpt,
}

/// Kind of communication received by the House or the Senate.
///
/// The House uses `Ec`, `Pm`, `Pt` and `Ml`; the Senate uses `Ec`, `Pm` and `Pom`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum CommunicationType {
    /// Executive communication
    Ec,
    /// Presidential message
    Pm,
    /// Petition
    Pt,
    /// Memorial
    Ml,
    /// Petition or memorial
    Pom,
}
