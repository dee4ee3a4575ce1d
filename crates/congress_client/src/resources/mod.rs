//! Thin clients that map arguments onto API paths.
//!
//! Each wraps a clone of the shared [`ApiClient`](crate::ApiClient), so they
//! all draw on the same rate limiter.

mod amendment;
mod bill;
mod bound_congressional_record;
mod committee;
mod committee_meeting;
mod committee_print;
mod committee_report;
mod congress;
mod congressional_record;
mod crs_report;
mod daily_congressional_record;
mod hearing;
mod house_communication;
mod house_requirement;
mod house_vote;
mod member;
mod nomination;
mod senate_communication;
mod summaries;
mod treaty;

pub use amendment::AmendmentClient;
pub use bill::BillClient;
pub use bound_congressional_record::BoundCongressionalRecordClient;
pub use committee::CommitteeClient;
pub use committee_meeting::CommitteeMeetingClient;
pub use committee_print::CommitteePrintClient;
pub use committee_report::CommitteeReportClient;
pub use congress::CongressClient;
pub use congressional_record::CongressionalRecordClient;
pub use crs_report::CrsReportClient;
pub use daily_congressional_record::DailyCongressionalRecordClient;
pub use hearing::HearingClient;
pub use house_communication::HouseCommunicationClient;
pub use house_requirement::HouseRequirementClient;
pub use house_vote::HouseVoteClient;
pub use member::MemberClient;
pub use nomination::NominationClient;
pub use senate_communication::SenateCommunicationClient;
pub use summaries::SummariesClient;
pub use treaty::TreatyClient;
