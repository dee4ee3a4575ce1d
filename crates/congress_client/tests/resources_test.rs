//! Resource clients map their arguments onto the documented paths.

use congress_client::{
    AmendmentType, BillType, Chamber, ClientOptions, CommitteeReportType, CommunicationType,
    CongressGovClient, LawType,
};
use congress_core::QueryParams;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, CongressGovClient) {
    let server = MockServer::start().await;
    let options = ClientOptions::builder()
        .api_key("test-api-key")
        .base_url(format!("{}/v3", server.uri()))
        .rate_limiting(false)
        .build()
        .unwrap();
    let congress = CongressGovClient::from_options(options).unwrap();
    (server, congress)
}

async fn expect_path(server: &MockServer, expected: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/v3{expected}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"path": expected})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_bill_paths() {
    let (server, congress) = setup().await;
    let bills = congress.bill();
    let p = QueryParams::new();

    for expected in [
        "/bill",
        "/bill/117",
        "/bill/117/hr",
        "/bill/117/hr/3076",
        "/bill/117/hr/3076/actions",
        "/bill/117/hr/3076/amendments",
        "/bill/117/hr/3076/committees",
        "/bill/117/hr/3076/cosponsors",
        "/bill/117/hr/3076/relatedbills",
        "/bill/117/hr/3076/subjects",
        "/bill/117/hr/3076/summaries",
        "/bill/117/hr/3076/text",
        "/bill/117/hr/3076/titles",
        "/law/117",
        "/law/117/pub",
        "/law/117/priv/108",
    ] {
        expect_path(&server, expected).await;
    }

    bills.get_bills(&p).await.unwrap();
    bills.get_bills_by_congress(117, &p).await.unwrap();
    bills.get_bills_by_congress_and_type(117, BillType::Hr, &p).await.unwrap();
    bills.get_bill(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_actions(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_amendments(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_committees(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_cosponsors(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_related_bills(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_subjects(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_summaries(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_text(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_bill_titles(117, BillType::Hr, 3076, &p).await.unwrap();
    bills.get_laws(117, &p).await.unwrap();
    bills.get_laws_by_type(117, LawType::Public, &p).await.unwrap();
    let law = bills.get_law(117, LawType::Private, 108, &p).await.unwrap();

    assert_eq!(law.body["path"], "/law/117/priv/108");
}

#[tokio::test]
async fn test_amendment_paths() {
    let (server, congress) = setup().await;
    let amendments = congress.amendment();
    let p = QueryParams::new();

    for expected in [
        "/amendment",
        "/amendment/117",
        "/amendment/117/samdt",
        "/amendment/117/samdt/2137",
        "/amendment/117/samdt/2137/actions",
        "/amendment/117/samdt/2137/cosponsors",
        "/amendment/117/samdt/2137/amendments",
        "/amendment/117/samdt/2137/text",
    ] {
        expect_path(&server, expected).await;
    }

    let t = AmendmentType::Samdt;
    amendments.get_amendments(&p).await.unwrap();
    amendments.get_amendments_by_congress(117, &p).await.unwrap();
    amendments.get_amendments_by_congress_and_type(117, t, &p).await.unwrap();
    amendments.get_amendment(117, t, 2137, &p).await.unwrap();
    amendments.get_amendment_actions(117, t, 2137, &p).await.unwrap();
    amendments.get_amendment_cosponsors(117, t, 2137, &p).await.unwrap();
    amendments.get_amendment_amendments(117, t, 2137, &p).await.unwrap();
    amendments.get_amendment_text(117, t, 2137, &p).await.unwrap();
}

#[tokio::test]
async fn test_committee_and_congress_paths() {
    let (server, congress) = setup().await;
    let committees = congress.committee();
    let p = QueryParams::new();

    for expected in [
        "/committee",
        "/committee/house",
        "/committee/117",
        "/committee/117/senate",
        "/committee/house/hspw00",
        "/committee/house/hspw00/bills",
        "/committee/house/hspw00/reports",
        "/committee/senate/ssju00/nominations",
        "/committee/house/hspw00/house-communication",
        "/committee/senate/ssju00/senate-communication",
        "/congress",
        "/congress/117",
        "/congress/current",
    ] {
        expect_path(&server, expected).await;
    }

    committees.get_committees(&p).await.unwrap();
    committees.get_committees_by_chamber(Chamber::House, &p).await.unwrap();
    committees.get_committees_by_congress(117, &p).await.unwrap();
    committees
        .get_committees_by_congress_and_chamber(117, Chamber::Senate, &p)
        .await
        .unwrap();
    committees.get_committee(Chamber::House, "hspw00", &p).await.unwrap();
    committees.get_committee_bills(Chamber::House, "hspw00", &p).await.unwrap();
    committees.get_committee_reports(Chamber::House, "hspw00", &p).await.unwrap();
    committees
        .get_committee_nominations(Chamber::Senate, "ssju00", &p)
        .await
        .unwrap();
    committees
        .get_committee_house_communications(Chamber::House, "hspw00", &p)
        .await
        .unwrap();
    committees
        .get_committee_senate_communications(Chamber::Senate, "ssju00", &p)
        .await
        .unwrap();

    let congresses = congress.congress();
    congresses.get_congresses(&p).await.unwrap();
    congresses.get_congress(117, &p).await.unwrap();
    congresses.get_current_congress(&p).await.unwrap();
}

#[tokio::test]
async fn test_member_paths() {
    let (server, congress) = setup().await;
    let members = congress.member();
    let p = QueryParams::new();

    for expected in [
        "/member",
        "/member/L000174",
        "/member/L000174/sponsored-legislation",
        "/member/L000174/cosponsored-legislation",
        "/member/MI",
        "/member/MI/10",
        "/member/congress/97/TX/10",
    ] {
        expect_path(&server, expected).await;
    }

    members.get_members(&p).await.unwrap();
    members.get_member("L000174", &p).await.unwrap();
    members.get_sponsored_legislation("L000174", &p).await.unwrap();
    members.get_cosponsored_legislation("L000174", &p).await.unwrap();
    members.get_members_by_state("MI", &p).await.unwrap();
    members.get_members_by_state_and_district("MI", 10, &p).await.unwrap();
    members
        .get_members_by_congress_state_and_district(97, "TX", 10, &p)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_members_by_congress_sends_current_member() {
    let (server, congress) = setup().await;
    Mock::given(method("GET"))
        .and(path("/v3/member/congress/118"))
        .and(query_param("currentMember", "true"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v3/member/congress/117"))
        .and(query_param("currentMember", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"members": []})))
        .expect(1)
        .mount(&server)
        .await;

    let members = congress.member();
    let params = QueryParams::new().limit(250);
    members.get_members_by_congress(118, true, &params).await.unwrap();
    members
        .get_members_by_congress(117, false, &QueryParams::new())
        .await
        .unwrap();

    // caller's params are left untouched
    assert!(params.get("currentMember").is_none());
}

#[tokio::test]
async fn test_nomination_and_hearing_paths() {
    let (server, congress) = setup().await;
    let p = QueryParams::new();

    for expected in [
        "/nomination",
        "/nomination/117",
        "/nomination/117/2467",
        "/nomination/117/2467/1",
        "/nomination/117/2467/actions",
        "/nomination/117/2467/committees",
        "/nomination/117/2467/hearings",
        "/hearing",
        "/hearing/116",
        "/hearing/116/house",
        "/hearing/116/house/41365",
    ] {
        expect_path(&server, expected).await;
    }

    let nominations = congress.nomination();
    nominations.get_nominations(&p).await.unwrap();
    nominations.get_nominations_by_congress(117, &p).await.unwrap();
    nominations.get_nomination(117, "2467", &p).await.unwrap();
    nominations.get_nominees(117, "2467", 1, &p).await.unwrap();
    nominations.get_nomination_actions(117, "2467", &p).await.unwrap();
    nominations.get_nomination_committees(117, "2467", &p).await.unwrap();
    nominations.get_nomination_hearings(117, "2467", &p).await.unwrap();

    let hearings = congress.hearing();
    hearings.get_hearings(&p).await.unwrap();
    hearings.get_hearings_by_congress(116, &p).await.unwrap();
    hearings
        .get_hearings_by_congress_and_chamber(116, Chamber::House, &p)
        .await
        .unwrap();
    hearings.get_hearing(116, Chamber::House, 41365, &p).await.unwrap();
}

#[tokio::test]
async fn test_summaries_treaty_and_vote_paths() {
    let (server, congress) = setup().await;
    let p = QueryParams::new();

    for expected in [
        "/summaries",
        "/summaries/117",
        "/summaries/117/hres",
        "/treaty",
        "/treaty/117",
        "/treaty/117/3",
        "/treaty/114/13/A",
        "/treaty/117/3/actions",
        "/treaty/117/3/committees",
        "/house-vote",
        "/house-vote/118",
        "/house-vote/118/2",
        "/house-vote/118/2/17",
        "/house-vote/118/2/17/members",
    ] {
        expect_path(&server, expected).await;
    }

    let summaries = congress.summaries();
    summaries.get_summaries(&p).await.unwrap();
    summaries.get_summaries_by_congress(117, &p).await.unwrap();
    summaries
        .get_summaries_by_congress_and_type(117, BillType::Hres, &p)
        .await
        .unwrap();

    let treaties = congress.treaty();
    treaties.get_treaties(&p).await.unwrap();
    treaties.get_treaties_by_congress(117, &p).await.unwrap();
    treaties.get_treaty(117, "3", &p).await.unwrap();
    treaties.get_partitioned_treaty(114, "13", "A", &p).await.unwrap();
    treaties.get_treaty_actions(117, "3", &p).await.unwrap();
    treaties.get_treaty_committees(117, "3", &p).await.unwrap();

    let votes = congress.house_vote();
    votes.get_house_roll_call_votes(&p).await.unwrap();
    votes.get_house_roll_call_votes_by_congress(118, &p).await.unwrap();
    votes
        .get_house_roll_call_votes_by_congress_and_session(118, 2, &p)
        .await
        .unwrap();
    votes.get_house_roll_call_vote(118, 2, 17, &p).await.unwrap();
    votes.get_house_roll_call_vote_members(118, 2, 17, &p).await.unwrap();
}

#[tokio::test]
async fn test_bound_and_daily_record_paths() {
    let (server, congress) = setup().await;
    let p = QueryParams::new();

    for expected in [
        "/bound-congressional-record",
        "/bound-congressional-record/1990",
        "/bound-congressional-record/1990/5",
        "/bound-congressional-record/1948/5/19",
        "/daily-congressional-record",
        "/daily-congressional-record/166",
        "/daily-congressional-record/166/153",
        "/daily-congressional-record/168/153/articles",
    ] {
        expect_path(&server, expected).await;
    }

    let bound = congress.bound_congressional_record();
    bound.get_records(&p).await.unwrap();
    bound.get_records_by_year(1990, &p).await.unwrap();
    bound.get_records_by_year_and_month(1990, 5, &p).await.unwrap();
    let day = bound.get_records_by_date(1948, 5, 19, &p).await.unwrap();
    assert_eq!(day.body["path"], "/bound-congressional-record/1948/5/19");

    let daily = congress.daily_congressional_record();
    daily.get_records(&p).await.unwrap();
    daily.get_records_by_volume(166, &p).await.unwrap();
    daily.get_records_by_volume_and_issue(166, 153, &p).await.unwrap();
    daily.get_articles(168, 153, &p).await.unwrap();
}

#[tokio::test]
async fn test_committee_document_paths() {
    let (server, congress) = setup().await;
    let p = QueryParams::new();

    for expected in [
        "/committee-meeting",
        "/committee-meeting/118",
        "/committee-meeting/118/house",
        "/committee-meeting/118/house/115538",
        "/committee-print",
        "/committee-print/117",
        "/committee-print/117/house",
        "/committee-print/117/house/48144",
        "/committee-print/117/house/48144/text",
        "/committee-report",
        "/committee-report/116",
        "/committee-report/116/hrpt",
        "/committee-report/116/hrpt/617",
        "/committee-report/116/srpt/617/text",
    ] {
        expect_path(&server, expected).await;
    }

    let meetings = congress.committee_meeting();
    meetings.get_meetings(&p).await.unwrap();
    meetings.get_meetings_by_congress(118, &p).await.unwrap();
    meetings
        .get_meetings_by_congress_and_chamber(118, Chamber::House, &p)
        .await
        .unwrap();
    meetings.get_meeting(118, Chamber::House, "115538", &p).await.unwrap();

    let prints = congress.committee_print();
    prints.get_prints(&p).await.unwrap();
    prints.get_prints_by_congress(117, &p).await.unwrap();
    prints
        .get_prints_by_congress_and_chamber(117, Chamber::House, &p)
        .await
        .unwrap();
    prints.get_print(117, Chamber::House, 48144, &p).await.unwrap();
    prints.get_print_text(117, Chamber::House, 48144, &p).await.unwrap();

    let reports = congress.committee_report();
    reports.get_reports(&p).await.unwrap();
    reports.get_reports_by_congress(116, &p).await.unwrap();
    reports
        .get_reports_by_congress_and_type(116, CommitteeReportType::Hrpt, &p)
        .await
        .unwrap();
    reports
        .get_report(116, CommitteeReportType::Hrpt, 617, &p)
        .await
        .unwrap();
    let text = reports
        .get_report_text(116, CommitteeReportType::Srpt, 617, &p)
        .await
        .unwrap();
    assert_eq!(text.body["path"], "/committee-report/116/srpt/617/text");
}

#[tokio::test]
async fn test_crs_report_and_communication_paths() {
    let (server, congress) = setup().await;
    let p = QueryParams::new();

    for expected in [
        "/crsreport",
        "/crsreport/R47175",
        "/house-communication",
        "/house-communication/117",
        "/house-communication/117/ec",
        "/house-communication/117/ec/3324",
        "/senate-communication",
        "/senate-communication/117",
        "/senate-communication/117/pom",
        "/senate-communication/117/ec/2561",
        "/house-requirement",
        "/house-requirement/8070",
        "/house-requirement/8070/matching-communications",
    ] {
        expect_path(&server, expected).await;
    }

    let crs = congress.crs_report();
    crs.get_reports(&p).await.unwrap();
    crs.get_report("R47175", &p).await.unwrap();

    let house = congress.house_communication();
    house.get_communications(&p).await.unwrap();
    house.get_communications_by_congress(117, &p).await.unwrap();
    house
        .get_communications_by_congress_and_type(117, CommunicationType::Ec, &p)
        .await
        .unwrap();
    house
        .get_communication(117, CommunicationType::Ec, 3324, &p)
        .await
        .unwrap();

    let senate = congress.senate_communication();
    senate.get_communications(&p).await.unwrap();
    senate.get_communications_by_congress(117, &p).await.unwrap();
    senate
        .get_communications_by_congress_and_type(117, CommunicationType::Pom, &p)
        .await
        .unwrap();
    senate
        .get_communication(117, CommunicationType::Ec, 2561, &p)
        .await
        .unwrap();

    let requirements = congress.house_requirement();
    requirements.get_requirements(&p).await.unwrap();
    requirements.get_requirement(8070, &p).await.unwrap();
    requirements.get_matching_communications(8070, &p).await.unwrap();
}

#[tokio::test]
async fn test_resource_clients_share_one_limiter() {
    let (_server, congress) = setup().await;
    let shared = congress.rate_limiter();
    assert!(std::sync::Arc::ptr_eq(&shared, &congress.api_client().rate_limiter()));
    assert!(std::sync::Arc::ptr_eq(&shared, &congress.rate_limiter()));
}
