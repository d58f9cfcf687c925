//! Search integration tests covering both tiers and the due-date buckets.

use super::helpers::{Desk, seeded_desk};
use eyre::ensure;
use rstest::rstest;
use taskdesk::task::{
    adapters::memory::ServiceCall,
    domain::{DueDateRange, SearchFilters, Status},
    services::SearchSource,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn server_search_matches_titles_only(seeded_desk: Desk) -> eyre::Result<()> {
    let outcome = seeded_desk
        .searcher
        .search(&SearchFilters::new().with_title("Report"))
        .await?;

    ensure!(outcome.source() == SearchSource::Server, "server tier should answer");
    ensure!(
        Desk::ids(outcome.tasks()) == vec![1, 3],
        "unexpected ids: {:?}",
        Desk::ids(outcome.tasks())
    );
    ensure!(outcome.message() == "2 results found", "unexpected summary");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn offline_search_falls_back_with_identical_results(seeded_desk: Desk) -> eyre::Result<()> {
    let filters = SearchFilters::new()
        .with_title("report")
        .with_status(Status::InProgress);
    let online = seeded_desk.searcher.search(&filters).await?;

    seeded_desk.backend.set_search_offline(true)?;
    let offline = seeded_desk.searcher.search(&filters).await?;

    ensure!(offline.source() == SearchSource::ClientFallback, "fallback tier should answer");
    ensure!(
        online.tasks() == offline.tasks(),
        "tiers disagree: {:?} vs {:?}",
        Desk::ids(online.tasks()),
        Desk::ids(offline.tasks())
    );

    let calls = seeded_desk.backend.calls()?;
    ensure!(
        calls.last() == Some(&ServiceCall::List),
        "fallback should finish with a full list fetch: {calls:?}"
    );
    Ok(())
}

#[rstest]
#[case(DueDateRange::Any, vec![1, 2, 3, 4, 5, 6])]
#[case(DueDateRange::Today, vec![1])]
#[case(DueDateRange::ThisWeek, vec![1, 2])]
#[case(DueDateRange::Overdue, vec![3])]
#[tokio::test(flavor = "multi_thread")]
async fn due_date_buckets_apply_after_retrieval(
    seeded_desk: Desk,
    #[case] range: DueDateRange,
    #[case] expected: Vec<i64>,
) -> eyre::Result<()> {
    let filters = SearchFilters::new().with_due_date_range(range);
    let outcome = seeded_desk.searcher.search(&filters).await?;

    ensure!(
        Desk::ids(outcome.tasks()) == expected,
        "{range}: unexpected ids {:?}",
        Desk::ids(outcome.tasks())
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn buckets_also_apply_to_fallback_results(seeded_desk: Desk) -> eyre::Result<()> {
    seeded_desk.backend.set_search_offline(true)?;
    let filters = SearchFilters::new()
        .with_title("report")
        .with_due_date_range(DueDateRange::Overdue);

    let outcome = seeded_desk.searcher.search(&filters).await?;

    ensure!(outcome.source() == SearchSource::ClientFallback, "fallback tier should answer");
    ensure!(
        Desk::ids(outcome.tasks()) == vec![3],
        "unexpected ids: {:?}",
        Desk::ids(outcome.tasks())
    );
    Ok(())
}
